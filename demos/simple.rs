//! Minimal conversion: email, order id and two products.
//!
//! ```bash
//! RUST_LOG=zbozi_konverze=debug cargo run --example simple
//! ```

use tracing_subscriber::EnvFilter;
use zbozi_konverze::{ConversionError, OrderConversion};

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

    // Test mode
    conversion.set_sandbox(true);

    conversion.set_email("jan.novak@example.com");
    conversion.set_order_id(123456);
    conversion.add_product_by_id("B1234");
    conversion.add_product_by_name("iPhone 7S");

    conversion.send()?;
    tracing::info!("Conversion accepted");
    Ok(())
}
