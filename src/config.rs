//! # Client Configuration
//!
//! Settings for the HTTP transport used by [`OrderConversion::send`].
//!
//! The defaults keep a stuck checkout from blocking for long: 3 seconds to
//! establish the connection, 10 seconds for the whole exchange.
//!
//! ## Usage
//!
//! ```
//! use zbozi_konverze::ClientConfig;
//!
//! let config = ClientConfig {
//!     timeout_secs: 5,
//!     ..ClientConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! ```
//!
//! [`OrderConversion::send`]: crate::order::OrderConversion::send

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConversionError;

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("zbozi-konverze-rs/", env!("CARGO_PKG_VERSION"));

/// # Client Configuration
///
/// Deserializable so it can live inside a host application's own config
/// file; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Connection establishment timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Overall request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Value of the `User-Agent` header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Check that the timeouts are within acceptable bounds.
    ///
    /// ## Errors
    ///
    /// Returns [`ConversionError::InvalidConfig`] if:
    /// - `connect_timeout_secs` is outside 1-60
    /// - `timeout_secs` is outside 1-300
    /// - the connect timeout is longer than the overall timeout
    pub fn validate(&self) -> Result<(), ConversionError> {
        if self.connect_timeout_secs == 0 || self.connect_timeout_secs > 60 {
            return Err(ConversionError::InvalidConfig(
                "connect_timeout_secs must be between 1 and 60".to_string(),
            ));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ConversionError::InvalidConfig(
                "timeout_secs must be between 1 and 300".to_string(),
            ));
        }
        if self.connect_timeout_secs > self.timeout_secs {
            return Err(ConversionError::InvalidConfig(format!(
                "connect_timeout_secs ({}) exceeds timeout_secs ({})",
                self.connect_timeout_secs, self.timeout_secs
            )));
        }
        Ok(())
    }

    /// Connect timeout as a `Duration`
    #[inline]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Overall timeout as a `Duration`
    #[inline]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_connect_timeout_secs() -> u64 {
    3
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
