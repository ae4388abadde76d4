//! Full conversion: order details and priced cart lines.
//!
//! Order details are read from JSON here to show that the input structs
//! accept the backend's camelCase keys.
//!
//! ```bash
//! RUST_LOG=zbozi_konverze=debug cargo run --example extended
//! ```

use rust_decimal::Decimal;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use zbozi_konverze::{CartLineFields, ConversionError, OrderConversion, OrderDetails};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        tracing::error!("Conversion failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConversionError> {
    let mut conversion = OrderConversion::new("1234567890", "fedcba9876543210123456789abcdef")?;
    conversion.set_sandbox(true);

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

    let details: OrderDetails = serde_json::from_value(json!({
        "email": "jan.novak@example.com",
        "deliveryType": "balik_do_ruky",
        "deliveryPrice": 100,
        "orderId": 123456,
        "otherCosts": 5.33,
        "paymentType": "prevodem_z_uctu"
    }))?;
    conversion.set_order_details(details);

    tracing::debug!(?conversion, "prepared");

    conversion.send()?;
    tracing::info!("Conversion accepted");
    Ok(())
}
