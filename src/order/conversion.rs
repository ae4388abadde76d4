//! # Order Conversion
//!
//! The object a checkout builds for one placed order and sends once.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::cart::{CartLine, CartLineFields};
use super::details::{OrderDetails, OrderId, given_amount, given_text};
use crate::config::ClientConfig;
use crate::endpoint::{self, Environment};
use crate::error::ConversionError;
use crate::transport::{self, HttpTransport, Transport};

/// # Order Conversion
///
/// Holds the shop credentials, order attributes and cart lines of a single
/// order, and reports them to the backend.
///
/// Create a fresh instance per order. Calling [`send`](Self::send) twice
/// transmits the same body twice, which the backend sees as a duplicate
/// notification.
///
/// ## Example
///
/// ```no_run
/// use zbozi_konverze::OrderConversion;
///
/// let mut conversion = OrderConversion::new("1234567890", "fedcba9876543210123456789abcdef")?;
/// conversion.set_sandbox(true);
/// conversion.set_email("jan.novak@example.com");
/// conversion.set_order_id(123456);
/// conversion.add_product_by_id("B1234");
/// conversion.add_product_by_name("iPhone 7S");
/// conversion.send()?;
///
/// # Ok::<(), zbozi_konverze::ConversionError>(())
/// ```
#[derive(Clone)]
pub struct OrderConversion {
    shop_id: String,
    private_key: String,
    order_id: Option<OrderId>,
    email: Option<String>,
    delivery_type: Option<String>,
    delivery_price: Option<Decimal>,
    payment_type: Option<String>,
    other_costs: Option<Decimal>,
    cart: Vec<CartLine>,
    sandbox: bool,
    config: ClientConfig,
}

/// Wire representation of a conversion.
#[derive(Serialize)]
struct Payload<'a> {
    #[serde(rename = "SHOP_ID")]
    shop_id: &'a str,
    #[serde(rename = "PRIVATE_KEY")]
    private_key: &'a str,
    #[serde(rename = "orderId", skip_serializing_if = "Option::is_none")]
    order_id: Option<&'a OrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(rename = "deliveryType", skip_serializing_if = "Option::is_none")]
    delivery_type: Option<&'a str>,
    #[serde(
        rename = "deliveryPrice",
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    delivery_price: Option<Decimal>,
    #[serde(rename = "paymentType", skip_serializing_if = "Option::is_none")]
    payment_type: Option<&'a str>,
    #[serde(
        rename = "otherCosts",
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    other_costs: Option<Decimal>,
    cart: &'a [CartLine],
}

/// Blank means absent or whitespace only.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl OrderConversion {
    /// Create a conversion for a shop.
    ///
    /// Sandbox mode is off and the default [`ClientConfig`] is used.
    ///
    /// ## Errors
    ///
    /// [`ConversionError::Validation`] with `"missing shopId"` or
    /// `"missing privateKey"` when either credential is empty after trimming.
    /// The shop id is checked first.
    pub fn new(
        shop_id: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Result<Self, ConversionError> {
        let shop_id = shop_id.into();
        if is_blank(&shop_id) {
            return Err(ConversionError::Validation("missing shopId"));
        }

        let private_key = private_key.into();
        if is_blank(&private_key) {
            return Err(ConversionError::Validation("missing privateKey"));
        }

        Ok(Self {
            shop_id,
            private_key,
            order_id: None,
            email: None,
            delivery_type: None,
            delivery_price: None,
            payment_type: None,
            other_costs: None,
            cart: Vec::new(),
            sandbox: false,
            config: ClientConfig::default(),
        })
    }

    /// Replace the transport configuration used by [`send`](Self::send).
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_config(&mut self, config: ClientConfig) {
        self.config = config;
    }

    /// Report to the sandbox host instead of production.
    pub fn set_sandbox(&mut self, enabled: bool) {
        self.sandbox = enabled;
    }

    /// Set the customer email. Only with the customer's consent.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    pub fn set_order_id(&mut self, order_id: impl Into<OrderId>) {
        self.order_id = Some(order_id.into());
    }

    /// Append a line carrying only a product name.
    pub fn add_product_by_name(&mut self, product_name: impl Into<String>) {
        self.cart.push(CartLine::named(product_name));
    }

    /// Append a line carrying only an item id.
    pub fn add_product_by_id(&mut self, item_id: impl Into<String>) {
        self.cart.push(CartLine::with_item_id(item_id));
    }

    /// Append a line built from the given fields; unset fields stay unset.
    pub fn add_cart_line(&mut self, fields: CartLineFields) {
        self.cart.push(fields.into());
    }

    /// Set several order attributes at once.
    ///
    /// A given string is applied only when non-empty and a given amount only
    /// when non-zero; otherwise the current value is kept. `order_id` is the
    /// exception: it is applied whenever given, so `0` or `""` still
    /// overwrite it.
    pub fn set_order_details(&mut self, details: OrderDetails) {
        let OrderDetails {
            email,
            delivery_type,
            delivery_price,
            order_id,
            other_costs,
            payment_type,
        } = details;

        if let Some(email) = given_text(email) {
            self.email = Some(email);
        }
        if let Some(delivery_type) = given_text(delivery_type) {
            self.delivery_type = Some(delivery_type);
        }
        if let Some(delivery_price) = given_amount(delivery_price) {
            self.delivery_price = Some(delivery_price);
        }
        if order_id.is_some() {
            self.order_id = order_id;
        }
        if let Some(other_costs) = given_amount(other_costs) {
            self.other_costs = Some(other_costs);
        }
        if let Some(payment_type) = given_text(payment_type) {
            self.payment_type = Some(payment_type);
        }
    }

    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    pub fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    pub fn environment(&self) -> Environment {
        Environment::from_sandbox(self.sandbox)
    }

    pub fn order_id(&self) -> Option<&OrderId> {
        self.order_id.as_ref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn delivery_type(&self) -> Option<&str> {
        self.delivery_type.as_deref()
    }

    pub fn delivery_price(&self) -> Option<Decimal> {
        self.delivery_price
    }

    pub fn payment_type(&self) -> Option<&str> {
        self.payment_type.as_deref()
    }

    pub fn other_costs(&self) -> Option<Decimal> {
        self.other_costs
    }

    /// Cart lines in insertion order
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL the conversion will be POSTed to.
    pub fn resolve_endpoint(&self) -> String {
        endpoint::conversion_url(self.environment(), &self.shop_id)
    }

    fn payload(&self) -> Payload<'_> {
        Payload {
            shop_id: &self.shop_id,
            private_key: &self.private_key,
            order_id: self.order_id.as_ref(),
            email: self.email.as_deref(),
            delivery_type: self.delivery_type.as_deref(),
            delivery_price: self.delivery_price,
            payment_type: self.payment_type.as_deref(),
            other_costs: self.other_costs,
            cart: &self.cart,
        }
    }

    /// Serialize to the JSON body sent to the backend.
    ///
    /// Fields never set are omitted. The cart is always present, possibly
    /// empty.
    pub fn serialize(&self) -> Result<String, ConversionError> {
        Ok(serde_json::to_string(&self.payload())?)
    }

    /// Same document as [`serialize`](Self::serialize), as a JSON value.
    pub fn to_json_value(&self) -> Result<serde_json::Value, ConversionError> {
        Ok(serde_json::to_value(self.payload())?)
    }

    /// Report the conversion over HTTPS.
    ///
    /// Blocks until the exchange completes or times out. Single attempt, no
    /// retry.
    ///
    /// ## Errors
    ///
    /// - [`ConversionError::InvalidConfig`] if the client configuration is out of range
    /// - [`ConversionError::Transport`] if no response was obtained
    /// - [`ConversionError::Rejected`] if the backend did not report a 2xx status
    pub fn send(&self) -> Result<(), ConversionError> {
        let transport = HttpTransport::new(&self.config)?;
        self.send_with(&transport)
    }

    /// Report the conversion through the given transport.
    pub fn send_with<T: Transport>(&self, transport: &T) -> Result<(), ConversionError> {
        let url = self.resolve_endpoint();
        let body = self.serialize()?;

        tracing::debug!(
            shop_id = %self.shop_id,
            sandbox = self.sandbox,
            order_id = ?self.order_id,
            cart_lines = self.cart.len(),
            %url,
            "sending conversion"
        );

        let response = transport.post_json(&url, &body)?;
        transport::interpret_response(&response)
    }
}

impl fmt::Debug for OrderConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderConversion")
            .field("shop_id", &self.shop_id)
            .field("private_key", &"<redacted>")
            .field("order_id", &self.order_id)
            .field("email", &self.email)
            .field("delivery_type", &self.delivery_type)
            .field("delivery_price", &self.delivery_price)
            .field("payment_type", &self.payment_type)
            .field("other_costs", &self.other_costs)
            .field("cart", &self.cart)
            .field("sandbox", &self.sandbox)
            .finish()
    }
}
