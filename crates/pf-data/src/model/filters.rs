use serde::{Deserialize, Serialize};

use crate::config::FilterProfile;

/// Search form selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    pub neighborhood_id: Option<i64>,
    pub activity_id: Option<i64>,
}

impl Filters {
    pub fn new(neighborhood_id: Option<i64>, activity_id: Option<i64>) -> Self {
        Self {
            neighborhood_id,
            activity_id,
        }
    }

    /// Serialize into the search query string for `profile`
    pub fn to_query_string(&self, profile: &FilterProfile) -> String {
        let mut parts = Vec::new();
        if !profile.base_params.is_empty() {
            parts.push(profile.base_params.clone());
        }
        if let Some(id) = self.neighborhood_id {
            parts.push(format!("{}={}", profile.neighborhood_param, id));
        }
        if let Some(id) = self.activity_id {
            parts.push(format!("{}={}", profile.activity_param, id));
        }
        parts.join("&")
    }

    /// Route fragment of the results page for these filters
    pub fn results_fragment(&self, profile: &FilterProfile) -> String {
        format!("results/{}", self.to_query_string(profile))
    }

    /// Recover the filters from a results query string. Unknown or
    /// non-numeric parameters are ignored.
    pub fn from_query_string(query: &str, profile: &FilterProfile) -> Self {
        let mut filters = Self::default();
        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let Ok(id) = value.parse::<i64>() else {
                continue;
            };
            if key == profile.neighborhood_param {
                filters.neighborhood_id = Some(id);
            } else if key == profile.activity_param {
                filters.activity_id = Some(id);
            }
        }
        filters
    }
}
