#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use pf_app::ParkFinderApp;
use pf_core::{FetchAdapter, FetchError};
use pf_data::AppConfig;
use serde_json::{json, Value};
use tokio::sync::oneshot;

pub use pf_views::testing::{RecordingRenderer, RenderCall};

pub const LISTS: &str = "parks/get_neighborhoods_and_activities_list/";

/// Fetch adapter with scripted responses. A gated URL blocks until its gate
/// is opened, which lets tests choose the order responses resolve in.
#[derive(Default)]
pub struct GatedFetcher {
    responses: Mutex<HashMap<String, Result<Value, FetchError>>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    requests: Mutex<Vec<String>>,
}

impl GatedFetcher {
    pub fn respond(&self, url: &str, body: Value) {
        self.responses.lock().insert(url.to_string(), Ok(body));
    }

    pub fn fail(&self, url: &str, status: u16) {
        self.responses.lock().insert(
            url.to_string(),
            Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
        );
    }

    /// Hold the next request for `url` until the returned sender fires
    pub fn gate(&self, url: &str) -> oneshot::Sender<()> {
        let (open, wait) = oneshot::channel();
        self.gates.lock().insert(url.to_string(), wait);
        open
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl FetchAdapter for GatedFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self.requests.lock().push(url.to_string());
        let gate = self.gates.lock().remove(url);
        match gate {
            Some(gate) => {
                let _ = gate.await;
            }
            None => tokio::task::yield_now().await,
        }
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

pub struct Harness {
    pub app: ParkFinderApp,
    pub fetcher: Arc<GatedFetcher>,
    pub renderer: Arc<RecordingRenderer>,
}

pub fn harness() -> Harness {
    harness_with(AppConfig::default())
}

pub fn harness_with(config: AppConfig) -> Harness {
    let fetcher = Arc::new(GatedFetcher::default());
    let renderer = Arc::new(RecordingRenderer::new());
    fetcher.respond(LISTS, search_options());
    let app = ParkFinderApp::new(config, fetcher.clone(), renderer.clone());
    Harness {
        app,
        fetcher,
        renderer,
    }
}

pub fn search_options() -> Value {
    json!({
        "neighborhoods": [{"id": 3, "name": "Roxbury"}, {"id": 4, "name": "Dorchester"}],
        "activities": [{"id": 9, "name": "Tennis"}],
        "featured_parks": [{"id": 1, "name": "Franklin Park", "url": "parks/franklin-park/", "images": []}],
        "hero_images": [{"src": "hero.jpg", "large_src": "hero-large.jpg"}]
    })
}

/// A search response page with parks `<prefix>-1 ..= <prefix>-<count>`
pub fn park_page(prefix: &str, count: usize, pages: u32) -> Value {
    let mut parks = serde_json::Map::new();
    for n in 1..=count {
        let slug = format!("{}-{}", prefix, n);
        parks.insert(
            slug.clone(),
            json!({ "slug": slug, "title": format!("Park {} {}", prefix, n) }),
        );
    }
    json!({ "parks": Value::Object(parks), "pages": pages })
}

pub fn park_detail(slug: &str, title: &str) -> Value {
    let mut parks = serde_json::Map::new();
    parks.insert(
        slug.to_string(),
        json!({ "slug": slug, "title": title, "images": [] }),
    );
    json!({ "parks": Value::Object(parks) })
}

/// Titles of every result item rendered so far, in render order
pub fn rendered_item_titles(renderer: &RecordingRenderer) -> Vec<String> {
    renderer
        .rendered()
        .into_iter()
        .filter(|(template, _)| *template == pf_views::Template::ResultItem)
        .filter_map(|(_, data)| data["title"].as_str().map(str::to_string))
        .collect()
}
