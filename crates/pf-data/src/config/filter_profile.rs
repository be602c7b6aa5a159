//! Filter naming and pagination profiles
//!
//! Two deployments of the site name their filter parameters differently and
//! disagree on whether results are paged. Neither is treated as canonical.

use serde::{Deserialize, Serialize};

/// How the results route fetches its collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    /// Page-at-a-time fetching with next/previous navigation
    Paged,
    /// One request for the whole result set
    Flat,
}

/// Query parameter names used when serializing search filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterProfile {
    pub neighborhood_param: String,
    pub activity_param: String,

    /// Parameters always sent with a search, before the filters
    pub base_params: String,

    pub pagination: PaginationMode,
}

impl FilterProfile {
    /// `neighborhoods` / `facility__activity`, paged results
    pub fn facility_activity() -> Self {
        Self {
            neighborhood_param: "neighborhoods".to_string(),
            activity_param: "facility__activity".to_string(),
            base_params: "no_map=true".to_string(),
            pagination: PaginationMode::Paged,
        }
    }

    /// `neighborhoods` / `activities`, flat results
    pub fn activities() -> Self {
        Self {
            neighborhood_param: "neighborhoods".to_string(),
            activity_param: "activities".to_string(),
            base_params: "no_map=true".to_string(),
            pagination: PaginationMode::Flat,
        }
    }
}

impl Default for FilterProfile {
    fn default() -> Self {
        Self::facility_activity()
    }
}
