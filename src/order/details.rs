//! # Order Details
//!
//! Order-level attributes and the bulk-assignment input used by
//! [`OrderConversion::set_order_details`].
//!
//! [`OrderConversion::set_order_details`]: super::OrderConversion::set_order_details

use std::fmt;

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// The merchant's own order identifier.
///
/// Shops use either numeric or textual ids; both go on the wire unchanged.
/// Numbers keep their exact JSON text, so ids beyond `i64` or with a
/// fractional part are passed through as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(Number),
    Text(String),
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => Ok(Self::Number(n)),
            Value::String(s) => Ok(Self::Text(s)),
            other => Err(D::Error::custom(format!(
                "orderId must be a number or a string, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OrderId {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<Number> for OrderId {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Bulk order attributes.
///
/// `None` means "not given". For every field except `order_id`, a given
/// value is only applied when it is non-empty (strings) or non-zero
/// (amounts); see [`OrderConversion::set_order_details`].
///
/// When deserialized, keys use camelCase and unknown keys are ignored.
///
/// [`OrderConversion::set_order_details`]: super::OrderConversion::set_order_details
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    /// Customer email. Only pass it with the customer's consent.
    #[serde(default)]
    pub email: Option<String>,

    /// How the order is delivered, e.g. `"balik_do_ruky"`
    #[serde(default)]
    pub delivery_type: Option<String>,

    /// Delivery cost (CZK)
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub delivery_price: Option<Decimal>,

    /// Applied whenever given, even as `0` or `""`. A JSON `null` reads as
    /// not given.
    #[serde(default)]
    pub order_id: Option<OrderId>,

    /// Other fees (CZK)
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub other_costs: Option<Decimal>,

    /// How the order was paid, e.g. `"prevodem_z_uctu"`
    #[serde(default)]
    pub payment_type: Option<String>,
}

/// Non-empty text passes the guard.
pub(crate) fn given_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Non-zero amounts pass the guard.
pub(crate) fn given_amount(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|d| !d.is_zero())
}
