//! Data access for the park finder client: API configuration, entity
//! models and parsers, the HTTP fetch adapter and the paged collection store.

pub mod collection;
pub mod config;
pub mod model;
pub mod parsers;
pub mod sources;

#[cfg(test)]
pub(crate) mod test_support;

use pf_core::FetchError;
use thiserror::Error;

// Re-exports
pub use collection::{CollectionId, CollectionSnapshot, PageOutcome, ParksCollection, SkipReason};
pub use config::{ApiConfig, AppConfig, FilterProfile, PaginationMode};
pub use model::{FeaturedPark, Filters, HeroImage, NamedOption, Park, SearchOptions};
pub use sources::{Endpoints, HttpFetcher, ParkApi};

/// Errors that can occur in data operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("unexpected response shape: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl DataError {
    /// Whether the server answered but the payload was unusable
    pub fn is_parse(&self) -> bool {
        matches!(self, DataError::Parse(_))
    }
}
