use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A park as returned by the search API.
///
/// Identity is the slug. Every field the server sent is kept in the
/// attribute bag in server order so views can render whatever they need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Park {
    slug: String,
    title: String,
    attributes: IndexMap<String, Value>,
}

impl Park {
    /// Build a park from its raw fields. `fallback_slug` is used when the
    /// payload carries no `slug` field of its own.
    pub fn from_attributes(fallback_slug: &str, attributes: IndexMap<String, Value>) -> Self {
        let slug = attributes
            .get("slug")
            .and_then(Value::as_str)
            .unwrap_or(fallback_slug)
            .to_string();

        let title = ["title", "name"]
            .iter()
            .find_map(|key| attributes.get(*key).and_then(Value::as_str))
            .unwrap_or_default()
            .to_string();

        Self {
            slug,
            title,
            attributes,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &IndexMap<String, Value> {
        &self.attributes
    }

    /// Flattened JSON for template rendering
    pub fn to_value(&self) -> Value {
        let mut object: serde_json::Map<String, Value> = self
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        object.insert("slug".to_string(), Value::String(self.slug.clone()));
        object.insert("title".to_string(), Value::String(self.title.clone()));
        Value::Object(object)
    }
}
