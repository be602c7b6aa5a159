//! Remote API configuration

use serde::{Deserialize, Serialize};

/// Where the park API lives and how its responses are shaped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port all request paths are resolved against
    pub origin: String,

    /// Paged search endpoint
    pub search_path: String,

    /// Single-park lookup endpoint
    pub detail_path: String,

    /// Neighborhood / activity / featured park lists endpoint
    pub lists_path: String,

    /// Query parameter carrying the requested page number
    pub page_param: String,

    /// Response field holding the total page count
    pub total_pages_field: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:8000/".to_string(),
            search_path: "parks/search".to_string(),
            detail_path: "parks/search/".to_string(),
            lists_path: "parks/get_neighborhoods_and_activities_list/".to_string(),
            page_param: "page".to_string(),
            total_pages_field: "pages".to_string(),
        }
    }
}
