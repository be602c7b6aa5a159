pub mod endpoints;
pub mod http_source;

pub use endpoints::Endpoints;
pub use http_source::HttpFetcher;

use std::sync::Arc;

use pf_core::FetchAdapter;
use tracing::debug;

use crate::collection::ParksCollection;
use crate::config::{ApiConfig, PaginationMode};
use crate::model::{Park, SearchOptions};
use crate::parsers;
use crate::DataError;

/// Single-entity fetches plus a factory for result collections
#[derive(Clone)]
pub struct ParkApi {
    fetcher: Arc<dyn FetchAdapter>,
    endpoints: Endpoints,
}

impl ParkApi {
    pub fn new(fetcher: Arc<dyn FetchAdapter>, api: ApiConfig) -> Self {
        Self {
            fetcher,
            endpoints: Endpoints::new(api),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch one park by slug
    pub async fn fetch_park(&self, slug: &str) -> Result<Park, DataError> {
        let url = self.endpoints.park_detail(slug);
        debug!("Fetching park '{}'", slug);
        let body = self.fetcher.get_json(&url).await?;
        parsers::parse_park(&body, slug)
    }

    /// Fetch the search page's filter lists and featured content
    pub async fn fetch_search_options(&self) -> Result<SearchOptions, DataError> {
        let body = self.fetcher.get_json(&self.endpoints.search_options()).await?;
        parsers::parse_search_options(&body)
    }

    /// A new, not yet fetched, results collection for `query_string`
    pub fn collection(&self, query_string: &str, mode: PaginationMode) -> ParksCollection {
        ParksCollection::new(
            query_string,
            self.fetcher.clone(),
            self.endpoints.clone(),
            mode,
        )
    }
}
