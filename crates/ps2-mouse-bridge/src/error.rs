//! Error types for the bridge.
//!
//! The PS/2 protocol paths never fail; errors only come from configuration
//! and from reports the USB stack hands over malformed.

use hid_ps2_mouse_protocol::ReportError;
use thiserror::Error;

/// Errors that can occur while setting up or feeding the bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Configuration text could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A USB report did not have the expected layout.
    #[error("Invalid USB report: {0}")]
    Report(#[from] ReportError),
}

impl BridgeError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
