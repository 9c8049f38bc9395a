//! Shared HTTP plumbing for feed sources

use crate::FeedError;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Build the client every source shares
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, FeedError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("gotham/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| FeedError::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Send a GET and decode a JSON body
///
/// Non-success statuses and malformed JSON are both failures.
pub async fn get_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, FeedError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Join a base URL and a path without doubling slashes
pub fn join(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
