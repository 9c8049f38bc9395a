//! Error types for the Oracle

use thiserror::Error;

/// Errors that can occur while generating or reading wisdom
#[derive(Error, Debug)]
pub enum OracleError {
    /// Completion provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Output is not the expected JSON shape
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Output parsed but breaks an item rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// The provider returned nothing usable
    #[error("Empty completion")]
    Empty,

    /// Question rejected before reaching the provider
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
}

impl From<serde_json::Error> for OracleError {
    fn from(e: serde_json::Error) -> Self {
        OracleError::JsonParse(e.to_string())
    }
}

impl From<gotham_llm::LlmError> for OracleError {
    fn from(e: gotham_llm::LlmError) -> Self {
        OracleError::Llm(e.to_string())
    }
}
