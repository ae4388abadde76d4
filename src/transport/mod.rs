//! # Transport Layer
//!
//! This module provides the backends that deliver a serialized conversion to
//! the service and hand back the raw response body.
//!
//! ## Available Transports
//!
//! - [`http`]: blocking HTTPS via `reqwest`
//!
//! Anything implementing [`Transport`] can be passed to
//! [`OrderConversion::send_with`], which is how tests substitute a recording
//! transport for the network.
//!
//! ## Response Contract
//!
//! The backend answers with a JSON object:
//!
//! ```json
//! { "status": 200, "statusMessage": "OK" }
//! ```
//!
//! Any `status` whose value divided by 100 truncates to 2 is a success.
//! `status` may arrive as a number or a numeric string.
//!
//! [`OrderConversion::send_with`]: crate::order::OrderConversion::send_with

pub mod http;

pub use http::HttpTransport;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ConversionError;

/// A way of POSTing a JSON body and reading back the response body.
///
/// Implementations return [`ConversionError::Transport`] only when no
/// response was obtained at all. The HTTP status code of a response that did
/// arrive is not inspected; the body's `status` field decides.
pub trait Transport {
    fn post_json(&self, url: &str, body: &str) -> Result<String, ConversionError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(&self, url: &str, body: &str) -> Result<String, ConversionError> {
        (**self).post_json(url, body)
    }
}

/// Status document returned by the backend.
#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    status: Option<Value>,
    #[serde(default, rename = "statusMessage")]
    status_message: Option<String>,
}

/// Read the `status` field as a number.
fn status_code(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Decide whether a response body reports success.
///
/// ## Errors
///
/// [`ConversionError::Rejected`] when the body is not JSON, has no readable
/// `status`, or the status is outside the 2xx class. The message carries the
/// backend's `statusMessage` when there is one.
pub fn interpret_response(body: &str) -> Result<(), ConversionError> {
    let response: StatusResponse =
        serde_json::from_str(body).map_err(|e| ConversionError::Rejected {
            status: None,
            message: format!("response is not a JSON status document: {}", e),
        })?;

    let Some(code) = response.status.as_ref().and_then(status_code) else {
        return Err(ConversionError::Rejected {
            status: None,
            message: response
                .status_message
                .unwrap_or_else(|| "response has no status".to_string()),
        });
    };

    if (code / 100.0).trunc() == 2.0 {
        tracing::debug!(status = code, "conversion accepted");
        return Ok(());
    }

    tracing::debug!(status = code, status_message = ?response.status_message, "conversion rejected");
    Err(ConversionError::Rejected {
        status: Some(code as i64),
        message: response
            .status_message
            .unwrap_or_else(|| "no status message".to_string()),
    })
}
