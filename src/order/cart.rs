//! # Cart Lines
//!
//! One ordered product per line. At least one of `product_name` or `item_id`
//! should be set for the line to mean anything to the backend, but that is
//! left to the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single product entry within an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product name as shown in the shop
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    /// Item identifier, the `ITEM_ID` from the shop's product feed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,

    /// Price per unit (CZK)
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub unit_price: Option<Decimal>,

    /// Number of units ordered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl CartLine {
    /// Line identified only by product name.
    pub fn named(product_name: impl Into<String>) -> Self {
        Self {
            product_name: Some(product_name.into()),
            ..Self::default()
        }
    }

    /// Line identified only by item id.
    pub fn with_item_id(item_id: impl Into<String>) -> Self {
        Self {
            item_id: Some(item_id.into()),
            ..Self::default()
        }
    }
}

/// Fields accepted by [`OrderConversion::add_cart_line`].
///
/// Every field is optional; fields left as `None` stay unset on the line.
/// When deserialized, keys use camelCase and unknown keys are ignored.
///
/// ## Example
///
/// ```
/// use rust_decimal::Decimal;
/// use zbozi_konverze::CartLineFields;
///
/// let fields = CartLineFields {
///     item_id: Some("1357902468".into()),
///     product_name: Some("Samsung Galaxy S3 (i9300)".into()),
///     unit_price: Some(Decimal::new(500050, 2)),
///     quantity: Some(1),
/// };
/// ```
///
/// [`OrderConversion::add_cart_line`]: super::OrderConversion::add_cart_line
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineFields {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub unit_price: Option<Decimal>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl From<CartLineFields> for CartLine {
    fn from(fields: CartLineFields) -> Self {
        Self {
            product_name: fields.product_name,
            item_id: fields.item_id,
            unit_price: fields.unit_price,
            quantity: fields.quantity,
        }
    }
}
