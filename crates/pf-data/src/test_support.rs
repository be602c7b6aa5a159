use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use pf_core::{FetchAdapter, FetchError};
use serde_json::{json, Value};

/// Fetch adapter answering from a fixed URL -> response table
#[derive(Default)]
pub struct ScriptedFetcher {
    responses: Mutex<HashMap<String, Result<Value, FetchError>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn respond(&self, url: &str, body: Value) {
        self.responses.lock().insert(url.to_string(), Ok(body));
    }

    pub fn fail(&self, url: &str, error: FetchError) {
        self.responses.lock().insert(url.to_string(), Err(error));
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl FetchAdapter for ScriptedFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self.requests.lock().push(url.to_string());
        // Give concurrently polled callers a chance to observe the in-flight state
        tokio::task::yield_now().await;
        self.responses
            .lock()
            .get(url)
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::Status {
                    url: url.to_string(),
                    status: 404,
                })
            })
    }
}

/// A search response page with parks `<prefix>-1 ..= <prefix>-<count>`
pub fn park_page(prefix: &str, count: usize, pages: Option<u32>) -> Value {
    let mut parks = serde_json::Map::new();
    for n in 1..=count {
        let slug = format!("{}-{}", prefix, n);
        parks.insert(
            slug.clone(),
            json!({ "slug": slug, "title": format!("Park {} {}", prefix, n) }),
        );
    }

    let mut body = json!({ "parks": Value::Object(parks) });
    if let Some(pages) = pages {
        body["pages"] = json!(pages);
    }
    body
}
