//! # Zboží Konverze - Conversion Reporting Client
//!
//! A client library for telling the Zboží.cz backend that an order was
//! placed, so the sale can be attributed to the referral click that brought
//! the customer. It provides:
//!
//! - **Order assembly**: credentials, order attributes and cart lines
//! - **Serialization**: the JSON body the backend expects
//! - **Transport**: a single blocking HTTPS POST with connect and overall timeouts
//! - **Typed errors**: validation, transport and rejection failures
//!
//! ## Quick Start
//!
//! ```no_run
//! use rust_decimal::Decimal;
//! use zbozi_konverze::{CartLineFields, OrderConversion, OrderDetails};
//!
//! let mut conversion = OrderConversion::new("1234567890", "fedcba9876543210123456789abcdef")?;
//!
//! // Test against the sandbox first
//! conversion.set_sandbox(true);
//!
//! conversion.set_order_details(OrderDetails {
//!     email: Some("jan.novak@example.com".into()),
//!     delivery_type: Some("balik_do_ruky".into()),
//!     delivery_price: Some(Decimal::new(100, 0)),
//!     order_id: Some(123456.into()),
//!     ..Default::default()
//! });
//!
//! conversion.add_cart_line(CartLineFields {
//!     product_name: Some("Název položky".into()),
//!     item_id: Some("id_polozky".into()),
//!     unit_price: Some(Decimal::new(225, 0)),
//!     quantity: Some(2),
//! });
//!
//! conversion.send()?;
//!
//! # Ok::<(), zbozi_konverze::ConversionError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`order`] | Conversion assembly, serialization and `send` |
//! | [`endpoint`] | Production and sandbox URLs |
//! | [`transport`] | HTTP delivery and response interpretation |
//! | [`config`] | Timeouts and user agent |
//! | [`error`] | Error types |
//!
//! ## Logging
//!
//! Nothing is printed. `send` emits `tracing` events at debug and trace
//! level, which stay silent unless the application installs a subscriber.
//! The private key never appears in them.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod order;
pub mod transport;

// Re-exports for convenience
pub use config::ClientConfig;
pub use error::ConversionError;
pub use order::{CartLine, CartLineFields, OrderConversion, OrderDetails, OrderId};
