//! Client configuration module

pub mod api_config;
pub mod filter_profile;

pub use api_config::*;
pub use filter_profile::*;

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Complete client configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote API location and field names
    pub api: ApiConfig,

    /// Filter parameter naming and results pagination mode
    pub profile: FilterProfile,
}

impl AppConfig {
    /// Load a configuration file; missing fields fall back to defaults
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
