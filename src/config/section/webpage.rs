//! `[webpage]` section: the WebPage schema of the current page.

use serde::{Deserialize, Serialize};

use super::extra::Extension;
use crate::config::Merge;
use crate::config::merge::{ListPatch, merge_fields, set_fields, set_optional_fields};
use crate::config::util::{list_or_table, non_empty};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebpageConfig {
    pub show: bool,
    /// Open Graph object type (`og:type`), `website` when unset.
    ///
    /// The schema itself is always typed `WebPage`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Page path relative to `website.url`. Filled from the route on render.
    pub url: Option<String>,
    /// Share image, preferred over `general.default_image`.
    pub image: Option<String>,
    /// ISO 8601 date.
    pub date_published: Option<String>,
    /// ISO 8601 date.
    pub date_modified: Option<String>,
    #[serde(deserialize_with = "list_or_table")]
    pub extra: Vec<Extension>,
}

impl Default for WebpageConfig {
    fn default() -> Self {
        Self {
            show: true,
            kind: None,
            url: None,
            image: None,
            date_published: None,
            date_modified: None,
            extra: Vec::new(),
        }
    }
}

impl WebpageConfig {
    pub fn og_type(&self) -> &str {
        non_empty(&self.kind).unwrap_or("website")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebpagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<ListPatch<Extension>>,
}

impl Merge for WebpageConfig {
    type Patch = WebpagePatch;

    fn apply(&mut self, patch: &WebpagePatch) {
        set_fields!(self, patch; show);
        set_optional_fields!(
            self, patch;
            kind, url, image, date_published, date_modified
        );
        merge_fields!(self, patch; extra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_og_type_default() {
        let config = test_parse_config("");
        assert_eq!(config.webpage.og_type(), "website");
        assert!(config.webpage.show);
    }

    #[test]
    fn test_og_type_configured() {
        let config = test_parse_config("[webpage]\ntype = \"article\"");
        assert_eq!(config.webpage.og_type(), "article");
    }

    #[test]
    fn test_dates_merge_independently() {
        let config = test_parse_config("[webpage]\ndate_published = \"2020-01-01\"");
        let patch = WebpagePatch {
            date_modified: Some("2021-06-30".into()),
            ..WebpagePatch::default()
        };
        let merged = config.webpage.merged(Some(&patch));
        assert_eq!(merged.date_published.as_deref(), Some("2020-01-01"));
        assert_eq!(merged.date_modified.as_deref(), Some("2021-06-30"));
    }
}
