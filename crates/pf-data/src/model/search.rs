use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An `{id, name}` entry of a filter drop-down
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedPark {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub images: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroImage {
    pub src: String,
    #[serde(default)]
    pub large_src: String,
}

/// Everything the search page needs: filter choices plus the featured
/// carousel content. Lists the server omits are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub neighborhoods: Vec<NamedOption>,
    pub activities: Vec<NamedOption>,
    pub featured_parks: Vec<FeaturedPark>,
    pub hero_images: Vec<HeroImage>,
}
