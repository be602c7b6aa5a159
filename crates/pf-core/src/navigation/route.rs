//! Route patterns and fragment matching
//!
//! Patterns are `/`-separated segments where `:name` captures one non-empty
//! path segment and anything else must match literally. A trailing `/` in a
//! pattern is significant: `parks/:park_slug/` does not match `parks/foo`.

use std::borrow::Cow;

/// One segment of a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSegment {
    /// Must equal the path segment exactly
    Literal(String),
    /// Captures the path segment under the given name
    Param(String),
}

/// Path parameters captured by a match, in pattern order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A URL pattern bound to a named handler
#[derive(Debug, Clone)]
pub struct Route {
    pattern: String,
    segments: Vec<RouteSegment>,
    handler: String,
}

impl Route {
    pub fn new(pattern: impl Into<String>, handler: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let segments = parse_pattern(&pattern);
        Self {
            pattern,
            segments,
            handler: handler.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn handler(&self) -> &str {
        &self.handler
    }

    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// Match a path (no query suffix, already normalized) against this route
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let parts = split_segments(path);
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                RouteSegment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                RouteSegment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.push((name.clone(), decode_param(part).into_owned()));
                }
            }
        }

        Some(RouteParams(params))
    }
}

fn parse_pattern(pattern: &str) -> Vec<RouteSegment> {
    split_segments(pattern)
        .into_iter()
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) if !name.is_empty() => RouteSegment::Param(name.to_string()),
            _ => RouteSegment::Literal(segment.to_string()),
        })
        .collect()
}

fn split_segments(path: &str) -> Vec<&str> {
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}

fn decode_param(raw: &str) -> Cow<'_, str> {
    // Malformed escapes are passed through untouched
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

/// Strip leading `#` / `/` characters and trailing whitespace from a fragment
pub fn normalize_fragment(fragment: &str) -> &str {
    fragment.trim_start_matches(['#', '/']).trim_end()
}

/// Split a normalized fragment into its path and optional query string
pub fn split_fragment(fragment: &str) -> (&str, Option<&str>) {
    match fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (fragment, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_routes() {
        let about = Route::new("about", "about");
        assert!(about.match_path("about").is_some());
        assert!(about.match_path("about/").is_none());
        assert!(about.match_path("mission").is_none());

        let home = Route::new("", "home");
        assert!(home.match_path("").is_some());
        assert!(home.match_path("about").is_none());
    }

    #[test]
    fn test_query_string_param() {
        let results = Route::new("results/:queryString", "results");
        let params = results.match_path("results/neighborhoods=3").unwrap();
        assert_eq!(params.get("queryString"), Some("neighborhoods=3"));

        let params = results
            .match_path("results/no_map=true&neighborhoods=3&facility__activity=7")
            .unwrap();
        assert_eq!(
            params.get("queryString"),
            Some("no_map=true&neighborhoods=3&facility__activity=7")
        );
        assert!(results.match_path("results/").is_none());
        assert!(results.match_path("results").is_none());
    }

    #[test]
    fn test_trailing_slash_is_significant() {
        let park = Route::new("parks/:park_slug/", "park");
        let params = park.match_path("parks/boston-common/").unwrap();
        assert_eq!(params.get("park_slug"), Some("boston-common"));
        assert_eq!(params.len(), 1);
        assert!(park.match_path("parks/boston-common").is_none());
    }

    #[test]
    fn test_params_are_percent_decoded() {
        let park = Route::new("parks/:park_slug/", "park");
        let params = park.match_path("parks/franklin%20park/").unwrap();
        assert_eq!(params.get("park_slug"), Some("franklin park"));
    }

    #[test]
    fn test_fragment_helpers() {
        assert_eq!(normalize_fragment("#/about "), "about");
        assert_eq!(normalize_fragment("/results/a=1"), "results/a=1");
        assert_eq!(split_fragment("about?x=1"), ("about", Some("x=1")));
        assert_eq!(split_fragment("about"), ("about", None));
    }
}
