//! reqwest-backed fetch adapter

use async_trait::async_trait;
use pf_core::{FetchAdapter, FetchError};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::DataError;

/// Issues GET requests against the configured API origin.
///
/// No request timeout is set: a hung request stays pending until the
/// server answers.
pub struct HttpFetcher {
    http: Client,
    origin: Url,
}

impl HttpFetcher {
    /// Create a fetcher resolving request paths against `origin`
    pub fn new(origin: &str) -> Result<Self, DataError> {
        // A base without a trailing slash would have its last path segment
        // replaced on join.
        let normalized = if origin.ends_with('/') {
            origin.to_string()
        } else {
            format!("{}/", origin)
        };

        let origin = Url::parse(&normalized)
            .map_err(|e| DataError::Config(format!("invalid API origin '{}': {}", origin, e)))?;

        let http = Client::builder()
            .build()
            .map_err(|e| DataError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { http, origin })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self, DataError> {
        Self::new(&api.origin)
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Resolve an origin-relative path into an absolute URL
    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.origin
            .join(path.trim_start_matches('/'))
            .map_err(|e| FetchError::InvalidUrl {
                url: path.to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl FetchAdapter for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let target = self.resolve(url)?;
        debug!("GET {}", target);

        let response = self
            .http
            .get(target.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: target.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: target.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            url: target.to_string(),
            message: e.to_string(),
        })?;

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: target.to_string(),
            message: e.to_string(),
        })
    }
}
