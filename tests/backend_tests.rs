//! # Backend Tests
//!
//! These tests drive the real HTTPS transport stack against a local stand-in
//! for the conversion backend.
//!
//! ## Setup
//!
//! Each test starts an `axum` server on its own `tokio` runtime in a
//! background thread. The transport under test is blocking, so the tests
//! themselves are plain `#[test]` functions. Production URLs are rewritten
//! onto the local server, keeping the `/action/{shopId}/conversion/backend`
//! path intact.

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    routing::post,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use zbozi_konverze::transport::{HttpTransport, Transport};
use zbozi_konverze::{
    CartLineFields, ClientConfig, ConversionError, OrderConversion, OrderDetails,
};

const SHOP_ID: &str = "1234567890";
const PRIVATE_KEY: &str = "fedcba9876543210123456789abcdef";

// ============================================================================
// FAKE BACKEND
// ============================================================================

/// One request as seen by the fake backend.
#[derive(Debug, Clone)]
struct Recorded {
    shop_id: String,
    content_type: Option<String>,
    user_agent: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct Backend {
    http_status: StatusCode,
    reply: String,
    delay: Duration,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

async fn conversion_handler(
    State(backend): State<Backend>,
    Path(shop_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    backend.requests.lock().unwrap().push(Recorded {
        shop_id,
        content_type: header_value(header::CONTENT_TYPE),
        user_agent: header_value(header::USER_AGENT),
        body,
    });

    if !backend.delay.is_zero() {
        tokio::time::sleep(backend.delay).await;
    }

    (backend.http_status, backend.reply.clone())
}

/// Start a fake backend and return its base URL and request log.
fn spawn_backend(
    http_status: StatusCode,
    reply: &str,
    delay: Duration,
) -> (String, Arc<Mutex<Vec<Recorded>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    let requests = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/action/:shop_id/conversion/backend", post(conversion_handler))
        .with_state(Backend {
            http_status,
            reply: reply.to_string(),
            delay,
            requests: requests.clone(),
        });

    thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });

    (format!("http://{}", addr), requests)
}

/// Sends to `base` instead of the real host.
struct LocalTransport {
    base: String,
    inner: HttpTransport,
}

impl LocalTransport {
    fn new(base: &str, config: &ClientConfig) -> Self {
        Self {
            base: base.to_string(),
            inner: HttpTransport::new(config).unwrap(),
        }
    }
}

impl Transport for LocalTransport {
    fn post_json(&self, url: &str, body: &str) -> Result<String, ConversionError> {
        let path = url
            .find("/action/")
            .map(|i| &url[i..])
            .expect("conversion URL has an /action/ path");
        self.inner.post_json(&format!("{}{}", self.base, path), body)
    }
}

/// The order from the extended usage demo.
fn extended_order() -> OrderConversion {
    let mut conversion = OrderConversion::new(SHOP_ID, PRIVATE_KEY).unwrap();

    conversion.add_cart_line(CartLineFields {
        product_name: Some("Název položky".into()),
        item_id: Some("id_polozky".into()),
        unit_price: Some(Decimal::new(225, 0)),
        quantity: Some(2),
    });
    conversion.add_cart_line(CartLineFields {
        product_name: Some("Jiná položka".into()),
        item_id: Some("jine_id".into()),
        unit_price: Some(Decimal::new(600, 0)),
        quantity: Some(1),
    });
    conversion.set_order_details(OrderDetails {
        email: Some("jan.novak@example.com".into()),
        delivery_type: Some("balik_do_ruky".into()),
        delivery_price: Some(Decimal::new(100, 0)),
        order_id: Some(123456.into()),
        other_costs: Some(Decimal::new(533, 2)),
        payment_type: Some("prevodem_z_uctu".into()),
    });

    conversion
}

// ============================================================================
// TESTS
// ============================================================================

#[test]
fn test_send_extended_order() {
    let (base, requests) = spawn_backend(StatusCode::OK, r#"{"status": 200}"#, Duration::ZERO);
    let transport = LocalTransport::new(&base, &ClientConfig::default());

    extended_order().send_with(&transport).unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.shop_id, SHOP_ID);
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert!(
        request
            .user_agent
            .as_deref()
            .is_some_and(|ua| ua.starts_with("zbozi-konverze-rs/"))
    );
    assert_eq!(
        request.body,
        json!({
            "SHOP_ID": SHOP_ID,
            "PRIVATE_KEY": PRIVATE_KEY,
            "orderId": 123456,
            "email": "jan.novak@example.com",
            "deliveryType": "balik_do_ruky",
            "deliveryPrice": 100,
            "paymentType": "prevodem_z_uctu",
            "otherCosts": 5.33,
            "cart": [
                {
                    "productName": "Název položky",
                    "itemId": "id_polozky",
                    "unitPrice": 225,
                    "quantity": 2
                },
                {
                    "productName": "Jiná položka",
                    "itemId": "jine_id",
                    "unitPrice": 600,
                    "quantity": 1
                }
            ]
        })
    );
}

#[test]
fn test_send_simple_order() {
    let (base, requests) = spawn_backend(StatusCode::OK, r#"{"status": 200}"#, Duration::ZERO);
    let transport = LocalTransport::new(&base, &ClientConfig::default());

    let mut conversion = OrderConversion::new(SHOP_ID, PRIVATE_KEY).unwrap();
    conversion.set_email("jan.novak@example.com");
    conversion.set_order_id(123456);
    conversion.add_product_by_id("B1234");
    conversion.add_product_by_name("iPhone 7S");
    conversion.send_with(&transport).unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(
        requests[0].body["cart"],
        json!([{ "itemId": "B1234" }, { "productName": "iPhone 7S" }])
    );
}

#[test]
fn test_2xx_status_accepted() {
    let (base, _) = spawn_backend(
        StatusCode::OK,
        r#"{"status": 201, "statusMessage": "Created"}"#,
        Duration::ZERO,
    );
    let transport = LocalTransport::new(&base, &ClientConfig::default());

    assert!(extended_order().send_with(&transport).is_ok());
}

#[test]
fn test_rejection_carries_status_message() {
    let (base, _) = spawn_backend(
        StatusCode::NOT_FOUND,
        r#"{"status": 404, "statusMessage": "not found"}"#,
        Duration::ZERO,
    );
    let transport = LocalTransport::new(&base, &ClientConfig::default());

    let err = extended_order().send_with(&transport).unwrap_err();
    match &err {
        ConversionError::Rejected { status, message } => {
            assert_eq!(*status, Some(404));
            assert_eq!(message, "not found");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[test]
fn test_json_status_decides_over_http_status() {
    let (base, _) = spawn_backend(
        StatusCode::OK,
        r#"{"status": 401, "statusMessage": "Invalid private key"}"#,
        Duration::ZERO,
    );
    let transport = LocalTransport::new(&base, &ClientConfig::default());

    let err = extended_order().send_with(&transport).unwrap_err();
    assert!(err.to_string().contains("Invalid private key"));
}

#[test]
fn test_non_json_response_rejected() {
    let (base, _) = spawn_backend(StatusCode::BAD_GATEWAY, "Bad Gateway", Duration::ZERO);
    let transport = LocalTransport::new(&base, &ClientConfig::default());

    let err = extended_order().send_with(&transport).unwrap_err();
    assert!(matches!(err, ConversionError::Rejected { status: None, .. }));
}

#[test]
fn test_send_twice_transmits_twice() {
    let (base, requests) = spawn_backend(StatusCode::OK, r#"{"status": 200}"#, Duration::ZERO);
    let transport = LocalTransport::new(&base, &ClientConfig::default());

    let conversion = extended_order();
    conversion.send_with(&transport).unwrap();
    conversion.send_with(&transport).unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].body, requests[1].body);
}

#[test]
fn test_connection_refused_is_transport_error() {
    // Reserve a port, then free it so nothing is listening
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let transport = LocalTransport::new(&format!("http://{}", addr), &ClientConfig::default());

    let err = extended_order().send_with(&transport).unwrap_err();
    assert!(err.is_transport(), "expected Transport, got {:?}", err);
}

#[test]
fn test_slow_backend_times_out() {
    let (base, _) = spawn_backend(
        StatusCode::OK,
        r#"{"status": 200}"#,
        Duration::from_secs(3),
    );
    let config = ClientConfig {
        connect_timeout_secs: 1,
        timeout_secs: 1,
        ..ClientConfig::default()
    };
    let transport = LocalTransport::new(&base, &config);

    let err = extended_order().send_with(&transport).unwrap_err();
    assert!(err.is_transport(), "expected Transport, got {:?}", err);
}
