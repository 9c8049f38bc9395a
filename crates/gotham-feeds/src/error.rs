//! Error types for feed operations

use thiserror::Error;

/// Errors that can occur while fetching a feed
#[derive(Error, Debug)]
pub enum FeedError {
    /// Network or transport failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Upstream answered with a non-success status
    #[error("Upstream returned status {0}")]
    Status(u16),

    /// Body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Upstream answered but carried no usable data
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Generated content could not be used
    #[error("Oracle error: {0}")]
    Oracle(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FeedError::Parse(e.to_string())
        } else {
            FeedError::Http(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::Parse(e.to_string())
    }
}

impl From<gotham_oracle::OracleError> for FeedError {
    fn from(e: gotham_oracle::OracleError) -> Self {
        FeedError::Oracle(e.to_string())
    }
}
