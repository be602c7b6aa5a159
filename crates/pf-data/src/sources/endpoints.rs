//! Request paths for the park API

use crate::config::ApiConfig;

/// Parameters the client never forwards; the server decides page size
const PAGE_SIZE_PARAMS: [&str; 3] = ["pageSize", "page_size", "per_page"];

/// Builds origin-relative request paths from the API configuration
#[derive(Debug, Clone)]
pub struct Endpoints {
    api: ApiConfig,
}

impl Endpoints {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// Single-park lookup
    pub fn park_detail(&self, slug: &str) -> String {
        format!(
            "{}?no_map=true&slug={}",
            self.api.detail_path,
            urlencoding::encode(slug)
        )
    }

    /// Neighborhood / activity / featured content lists
    pub fn search_options(&self) -> String {
        self.api.lists_path.clone()
    }

    /// Search results, optionally for one page. Page-size and page
    /// parameters already present in `query_string` are dropped.
    pub fn search_page(&self, query_string: &str, page: Option<u32>) -> String {
        let mut params: Vec<String> = query_string
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| {
                let key = pair.split('=').next().unwrap_or_default();
                key != self.api.page_param && !PAGE_SIZE_PARAMS.contains(&key)
            })
            .map(str::to_string)
            .collect();

        if let Some(page) = page {
            params.push(format!("{}={}", self.api.page_param, page));
        }

        if params.is_empty() {
            self.api.search_path.clone()
        } else {
            format!("{}?{}", self.api.search_path, params.join("&"))
        }
    }
}
