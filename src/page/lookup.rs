//! Page data lookup by route path.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::config::SeoPatch;

/// Result of [`lookup_page`].
///
/// Serializes as the page data, `null`, or `{"error": "..."}`.
#[derive(Debug, Clone, Copy)]
pub enum PageLookup<'a> {
    Found(&'a SeoPatch),
    NotFound,
    /// The caller gave no path.
    MissingPath,
}

impl PageLookup<'_> {
    pub const MISSING_PATH: &'static str = "No path provided";

    pub fn patch(&self) -> Option<&SeoPatch> {
        match self {
            Self::Found(patch) => Some(patch),
            _ => None,
        }
    }
}

impl Serialize for PageLookup<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        match self {
            Self::Found(patch) => patch.serialize(serializer),
            Self::NotFound => serializer.serialize_none(),
            Self::MissingPath => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", Self::MISSING_PATH)?;
                map.end()
            }
        }
    }
}

/// Find the override data registered for `path`.
///
/// The path is matched verbatim against the `[pages]` keys.
pub fn lookup_page<'a>(pages: &'a BTreeMap<String, SeoPatch>, path: Option<&str>) -> PageLookup<'a> {
    match path.filter(|p| !p.is_empty()) {
        None => PageLookup::MissingPath,
        Some(path) => pages
            .get(path)
            .map_or(PageLookup::NotFound, PageLookup::Found),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use serde_json::json;

    fn pages() -> BTreeMap<String, SeoPatch> {
        test_parse_config(
            r#"[pages."/about"]
title = "About Us Page"
description = "The about page"
"#,
        )
        .pages
    }

    #[test]
    fn test_found() {
        let pages = pages();
        let found = lookup_page(&pages, Some("/about"));
        assert_eq!(
            found.patch().and_then(|p| p.title.as_deref()),
            Some("About Us Page")
        );
        assert_eq!(
            serde_json::to_value(found).unwrap(),
            json!({"title": "About Us Page", "description": "The about page"})
        );
    }

    #[test]
    fn test_unknown_path_is_null() {
        let pages = pages();
        let result = lookup_page(&pages, Some("/contact"));
        assert!(result.patch().is_none());
        assert_eq!(serde_json::to_value(result).unwrap(), json!(null));
    }

    #[test]
    fn test_missing_path_is_error_payload() {
        let pages = pages();
        for path in [None, Some("")] {
            let result = lookup_page(&pages, path);
            assert!(matches!(result, PageLookup::MissingPath));
            assert_eq!(
                serde_json::to_value(result).unwrap(),
                json!({"error": "No path provided"})
            );
        }
    }
}
