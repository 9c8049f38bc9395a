//! Gotham LLM Provider Layer
//!
//! Pluggable chat-completion providers behind one async trait.
//!
//! # Architecture
//!
//! Callers build a [`ChatRequest`] (system role, user prompt, sampling
//! settings) and hand it to any [`CompletionProvider`]. The provider returns
//! the first completion's text verbatim. Providers never retry and never
//! cache.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing, records every request
//! - `OpenAiProvider`: OpenAI-compatible `/chat/completions` integration
//!
//! # Examples
//!
//! ```
//! use gotham_llm::{ChatRequest, CompletionProvider, MockProvider};
//!
//! # tokio_test_block_on(async {
//! let provider = MockProvider::new("Hello from Gotham!");
//! let request = ChatRequest::new("You are Batman.", "Say hello");
//! let result = provider.complete(&request).await.unwrap();
//! assert_eq!(result, "Hello from Gotham!");
//! assert_eq!(provider.requests()[0].user, "Say hello");
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;

use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during completion calls
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Provider is missing required configuration
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// One chat-completion call: a system role and a single user turn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// System role content
    pub system: String,

    /// User message content
    pub user: String,

    /// Model override; the provider default is used when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Sampling temperature
    pub temperature: f32,

    /// Completion length cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Default sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;

    /// Create a request with the default temperature
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            model: None,
            temperature: Self::DEFAULT_TEMPERATURE,
            max_tokens: None,
        }
    }

    /// Override the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Cap the completion length
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Override the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// A chat-completion backend
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the request and return the first completion's text verbatim
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError>;

    /// Short provider name for logs
    fn name(&self) -> &str;
}

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls and
/// records every request it receives.
///
/// # Examples
///
/// ```
/// use gotham_llm::MockProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_error("prompt2");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Option<String>,
    responses: Arc<Mutex<HashMap<String, Option<String>>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockProvider {
    /// Create a MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: Some(response.into()),
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a MockProvider that fails every call not otherwise configured
    pub fn failing() -> Self {
        Self {
            default_response: None,
            ..Self::new("")
        }
    }

    /// Add a specific response for a given user prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), Some(response.into()));
    }

    /// Configure to return an error for a specific user prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), None);
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<ChatRequest> {
        lock(&self.requests).clone()
    }

    /// Forget recorded requests
    pub fn reset(&self) {
        lock(&self.requests).clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        lock(&self.requests).push(request.clone());

        let configured = lock(&self.responses).get(&request.user).cloned();
        match configured.unwrap_or_else(|| self.default_response.clone()) {
            Some(response) => Ok(response),
            None => Err(LlmError::Other("Mock error".to_string())),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

// A poisoned lock only means another test thread panicked mid-push.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.complete(&ChatRequest::new("sys", "any prompt")).await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        let ask = |user: &str| ChatRequest::new("sys", user);
        assert_eq!(provider.complete(&ask("hello")).await.unwrap(), "world");
        assert_eq!(provider.complete(&ask("foo")).await.unwrap(), "bar");
        assert_eq!(
            provider.complete(&ask("unknown")).await.unwrap(),
            "Default mock response"
        );
    }

    #[tokio::test]
    async fn test_mock_provider_records_requests() {
        let provider = MockProvider::new("ok");
        let request = ChatRequest::new("system role", "question")
            .with_temperature(0.8)
            .with_max_tokens(200);

        provider.complete(&request).await.unwrap();
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.requests(), vec![request]);

        provider.reset();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.complete(&ChatRequest::new("sys", "bad prompt")).await;
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));
    }

    #[tokio::test]
    async fn test_failing_provider() {
        let mut provider = MockProvider::failing();
        provider.add_response("rescued", "yes");

        assert!(provider.complete(&ChatRequest::new("s", "x")).await.is_err());
        assert_eq!(
            provider.complete(&ChatRequest::new("s", "rescued")).await.unwrap(),
            "yes"
        );
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.complete(&ChatRequest::new("s", "u")).await.unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }

    #[test]
    fn test_chat_request_defaults() {
        let request = ChatRequest::new("s", "u");
        assert_eq!(request.temperature, ChatRequest::DEFAULT_TEMPERATURE);
        assert_eq!(request.max_tokens, None);
        assert_eq!(request.model, None);

        let request = request.with_model("gpt-4o");
        assert_eq!(request.model.as_deref(), Some("gpt-4o"));
    }
}
