//! # Error Types
//!
//! This module defines the error type returned by every fallible operation
//! in the library.

use thiserror::Error;

/// Main error type for conversion reporting
#[derive(Debug, Error)]
pub enum ConversionError {
    /// A mandatory credential was missing or blank at construction time
    #[error("Validation error: {0}")]
    Validation(&'static str),

    /// Client configuration out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No response was obtained (DNS, TCP, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response arrived but did not report success
    #[error("Request was not accepted{}: {message}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    Rejected {
        /// The `status` field of the response, when it could be read
        status: Option<i64>,
        /// `statusMessage` from the response, or a description of what was wrong with it
        message: String,
    },

    /// Payload encoding failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConversionError {
    /// True for failures where no response was received.
    ///
    /// Callers deciding whether to retry the whole `send` usually only
    /// retry these.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
