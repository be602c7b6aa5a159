//! Fetch boundary between the controller and the remote API

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failures raised by a fetch adapter before any parsing happens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("response from {url} is not valid JSON: {message}")]
    Decode { url: String, message: String },

    #[error("invalid request URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

impl FetchError {
    /// The URL the failed request was issued for
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. }
            | FetchError::InvalidUrl { url, .. } => url,
        }
    }
}

/// Issues read-only GET requests and hands back the raw JSON body.
///
/// An empty response body is reported as `Value::Null` so the parsers can
/// classify it as a data error rather than a network failure.
#[async_trait]
pub trait FetchAdapter: Send + Sync {
    /// GET `url` (relative to the adapter's origin) and return its JSON body
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}
