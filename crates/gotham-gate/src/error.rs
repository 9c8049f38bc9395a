//! Gate error types

use thiserror::Error;

/// Errors that can occur during gate operations
#[derive(Error, Debug)]
pub enum GateError {
    /// Flag could not be read or written
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for GateError {
    fn from(e: std::io::Error) -> Self {
        GateError::Store(e.to_string())
    }
}

impl From<serde_json::Error> for GateError {
    fn from(e: serde_json::Error) -> Self {
        GateError::Store(format!("Corrupt flag file: {}", e))
    }
}
