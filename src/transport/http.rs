//! # HTTPS Transport
//!
//! Blocking delivery over HTTPS using `reqwest::blocking`.
//!
//! ## Timeouts
//!
//! Both timeouts come from [`ClientConfig`]:
//!
//! - **connect**: how long to wait for TCP + TLS establishment (default 3 s)
//! - **overall**: the whole exchange including reading the body (default 10 s)
//!
//! ## Async Callers
//!
//! `reqwest::blocking` owns an internal runtime and panics when used from
//! inside another async runtime's worker thread. From async code, call
//! `send` through `tokio::task::spawn_blocking`.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use super::Transport;
use crate::config::ClientConfig;
use crate::error::ConversionError;

/// # HTTPS Transport
///
/// ## Example
///
/// ```no_run
/// use zbozi_konverze::{ClientConfig, transport::{HttpTransport, Transport}};
///
/// let transport = HttpTransport::new(&ClientConfig::default())?;
/// let body = transport.post_json(
///     "https://sandbox.zbozi.cz/action/1234567890/conversion/backend",
///     r#"{"SHOP_ID":"1234567890","PRIVATE_KEY":"secret","cart":[]}"#,
/// )?;
/// println!("{}", body);
///
/// # Ok::<(), zbozi_konverze::ConversionError>(())
/// ```
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a client from a configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - the configuration fails [`ClientConfig::validate`]
    /// - the TLS backend cannot be initialized
    pub fn new(config: &ClientConfig) -> Result<Self, ConversionError> {
        config.validate()?;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConversionError::Transport(format!("HTTP client error: {}", e)))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: &str) -> Result<String, ConversionError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_owned())
            .send()
            .map_err(|e| {
                ConversionError::Transport(format!(
                    "Unable to establish connection to {}: {}",
                    url, e
                ))
            })?;

        tracing::trace!(http_status = %response.status(), "response received");

        response
            .text()
            .map_err(|e| ConversionError::Transport(format!("Failed to read response: {}", e)))
    }
}
