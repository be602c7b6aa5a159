//! Pure transformations from raw API JSON into normalized entities
//!
//! Every parser rejects payloads missing the top-level shape it expects with
//! [`DataError::Parse`] instead of producing half-filled entities.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::model::{Park, SearchOptions};
use crate::DataError;

/// One page of search results
#[derive(Debug, Clone, PartialEq)]
pub struct ParkPage {
    pub parks: Vec<Park>,
    /// Total page count reported by the server, if any
    pub total_pages: Option<u32>,
}

/// Parse a single-park lookup. All entries under `parks` are merged into
/// one attribute bag, later keys overriding earlier ones.
pub fn parse_park(response: &Value, requested_slug: &str) -> Result<Park, DataError> {
    let parks = parks_field(response)?;

    let mut attributes = IndexMap::new();
    for (_, fields) in park_entries(parks)? {
        for (key, value) in fields {
            attributes.insert(key.clone(), value.clone());
        }
    }

    if attributes.is_empty() {
        return Err(DataError::Parse(format!(
            "no park data returned for '{}'",
            requested_slug
        )));
    }

    Ok(Park::from_attributes(requested_slug, attributes))
}

/// Parse a search results page, keeping server order
pub fn parse_park_page(response: &Value, total_pages_field: &str) -> Result<ParkPage, DataError> {
    let parks = park_entries(parks_field(response)?)?
        .into_iter()
        .map(|(key, fields)| {
            let attributes: IndexMap<String, Value> =
                fields.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            Park::from_attributes(key.unwrap_or_default(), attributes)
        })
        .collect();

    let total_pages = parse_total_pages(response, total_pages_field)?;

    Ok(ParkPage { parks, total_pages })
}

/// Parse the neighborhoods / activities / featured content lists
pub fn parse_search_options(response: &Value) -> Result<SearchOptions, DataError> {
    if !response.is_object() {
        return Err(DataError::Parse(
            "search options response is not a JSON object".to_string(),
        ));
    }

    serde_json::from_value(response.clone())
        .map_err(|e| DataError::Parse(format!("invalid search options: {}", e)))
}

fn parks_field(response: &Value) -> Result<&Value, DataError> {
    match response {
        Value::Null => Err(DataError::Parse("empty response".to_string())),
        Value::Object(map) => map
            .get("parks")
            .ok_or_else(|| DataError::Parse("response has no 'parks' key".to_string())),
        _ => Err(DataError::Parse("response is not a JSON object".to_string())),
    }
}

/// `parks` may be keyed by slug or a plain list
fn park_entries(parks: &Value) -> Result<Vec<(Option<&str>, &Map<String, Value>)>, DataError> {
    let entries: Vec<(Option<&str>, &Value)> = match parks {
        Value::Object(map) => map.iter().map(|(k, v)| (Some(k.as_str()), v)).collect(),
        Value::Array(list) => list.iter().map(|v| (None, v)).collect(),
        _ => {
            return Err(DataError::Parse(
                "'parks' is neither an object nor a list".to_string(),
            ))
        }
    };

    entries
        .into_iter()
        .map(|(key, value)| match value {
            Value::Object(fields) => Ok((key, fields)),
            _ => Err(DataError::Parse(format!(
                "park entry {} is not an object",
                key.unwrap_or("in list")
            ))),
        })
        .collect()
}

fn parse_total_pages(response: &Value, field: &str) -> Result<Option<u32>, DataError> {
    match response.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| DataError::Parse(format!("'{}' is not a page count: {}", field, n))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| DataError::Parse(format!("'{}' is not a page count: {}", field, s))),
        Some(other) => Err(DataError::Parse(format!(
            "'{}' is not a page count: {}",
            field, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_park_page_keeps_server_order() {
        let response = json!({
            "parks": {
                "zeta": { "slug": "zeta", "title": "Zeta Park" },
                "alpha": { "title": "Alpha Park" },
                "mid": { "slug": "mid", "title": "Mid Park" }
            },
            "pages": 4
        });

        let page = parse_park_page(&response, "pages").unwrap();
        let slugs: Vec<_> = page.parks.iter().map(|p| p.slug()).collect();
        assert_eq!(slugs, vec!["zeta", "alpha", "mid"]);
        assert_eq!(page.total_pages, Some(4));
    }

    #[test]
    fn test_park_page_accepts_list_and_missing_total() {
        let response = json!({ "parks": [{ "slug": "a" }, { "slug": "b" }] });
        let page = parse_park_page(&response, "pages").unwrap();
        assert_eq!(page.parks.len(), 2);
        assert_eq!(page.total_pages, None);

        let response = json!({ "parks": {}, "pages": "2" });
        assert_eq!(parse_park_page(&response, "pages").unwrap().total_pages, Some(2));
    }

    #[test]
    fn test_missing_parks_key_is_parse_failure() {
        let err = parse_park_page(&json!({ "pages": 1 }), "pages").unwrap_err();
        assert!(err.is_parse());

        assert!(parse_park_page(&Value::Null, "pages").unwrap_err().is_parse());
        assert!(parse_park_page(&json!([1, 2]), "pages").unwrap_err().is_parse());
        assert!(parse_park_page(&json!({ "parks": 3 }), "pages").unwrap_err().is_parse());
        assert!(parse_park_page(&json!({ "parks": { "a": 1 } }), "pages")
            .unwrap_err()
            .is_parse());
        assert!(parse_park_page(&json!({ "parks": {}, "pages": -1 }), "pages")
            .unwrap_err()
            .is_parse());
    }

    #[test]
    fn test_park_detail_merges_entries() {
        let response = json!({
            "parks": {
                "0": { "slug": "franklin-park", "title": "Franklin Park" },
                "1": { "acres": 527, "images": ["a.jpg"] }
            }
        });

        let park = parse_park(&response, "franklin-park").unwrap();
        assert_eq!(park.title(), "Franklin Park");
        assert_eq!(park.attribute("acres"), Some(&json!(527)));
        assert_eq!(park.attribute("images"), Some(&json!(["a.jpg"])));
    }

    #[test]
    fn test_park_detail_without_data() {
        assert!(parse_park(&json!({ "parks": {} }), "x").unwrap_err().is_parse());
        assert!(parse_park(&json!({}), "x").unwrap_err().is_parse());
    }

    #[test]
    fn test_search_options() {
        let response = json!({
            "neighborhoods": [{ "id": 1, "name": "Dorchester" }],
            "activities": [{ "id": 7, "name": "Swimming" }],
            "featured_parks": [{ "id": 2, "name": "Common", "url": "/parks/common/", "images": [] }],
            "hero_images": [{ "src": "s.jpg", "large_src": "l.jpg" }],
            "extra": true
        });

        let options = parse_search_options(&response).unwrap();
        assert_eq!(options.neighborhoods[0].name, "Dorchester");
        assert_eq!(options.activities[0].id, 7);
        assert_eq!(options.featured_parks[0].url, "/parks/common/");
        assert_eq!(options.hero_images[0].large_src, "l.jpg");

        let sparse = parse_search_options(&json!({ "activities": [] })).unwrap();
        assert!(sparse.neighborhoods.is_empty());

        assert!(parse_search_options(&Value::Null).unwrap_err().is_parse());
        assert!(parse_search_options(&json!({ "neighborhoods": [{ "id": "x" }] }))
            .unwrap_err()
            .is_parse());
    }
}
