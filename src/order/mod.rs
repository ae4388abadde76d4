//! # Order Module
//!
//! This module holds the conversion being assembled for one order.
//!
//! ## Modules
//!
//! - [`conversion`]: the conversion object, its serialization and `send`
//! - [`cart`]: cart lines
//! - [`details`]: order ids and bulk order attributes

pub mod cart;
pub mod conversion;
pub mod details;

pub use cart::{CartLine, CartLineFields};
pub use conversion::OrderConversion;
pub use details::{OrderDetails, OrderId};
