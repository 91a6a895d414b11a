//! `[website]` section: the WebSite schema and its search action.

use serde::{Deserialize, Serialize};

use super::extra::Extension;
use super::validate_site_url;
use crate::config::merge::{ListPatch, merge_fields, set_fields, set_optional_fields};
use crate::config::util::{list_or_table, non_empty};
use crate::config::{ConfigDiagnostics, FieldPath, Merge};

/// Sitelinks search box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub show: bool,
    /// Search URL prefix; the query placeholder is appended to it.
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Merge for SearchConfig {
    type Patch = SearchPatch;

    fn apply(&mut self, patch: &SearchPatch) {
        set_fields!(self, patch; show);
        set_optional_fields!(self, patch; action);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteConfig {
    pub show: bool,
    #[serde(rename = "type")]
    pub kind: String,
    /// Site name, also exposed to title templates as `%site.name`.
    pub name: Option<String>,
    /// Canonical site origin, e.g. `https://example.com`.
    pub url: Option<String>,
    pub search: SearchConfig,
    #[serde(deserialize_with = "list_or_table")]
    pub extra: Vec<Extension>,
}

impl Default for WebsiteConfig {
    fn default() -> Self {
        Self {
            show: true,
            kind: "WebSite".into(),
            name: None,
            url: None,
            search: SearchConfig::default(),
            extra: Vec::new(),
        }
    }
}

/// Field paths for diagnostic messages.
pub struct WebsiteFields {
    pub url: FieldPath,
    pub search_show: FieldPath,
    pub search_action: FieldPath,
}

impl WebsiteConfig {
    pub const FIELDS: WebsiteFields = WebsiteFields {
        url: FieldPath::new("website.url"),
        search_show: FieldPath::new("website.search.show"),
        search_action: FieldPath::new("website.search.action"),
    };

    /// Schema `@type`, falling back to `WebSite` when blank.
    pub fn schema_type(&self) -> &str {
        if self.kind.is_empty() {
            "WebSite"
        } else {
            &self.kind
        }
    }

    /// Stable `@id` of the WebSite schema (`<url>#website`).
    pub fn schema_id(&self) -> Option<String> {
        non_empty(&self.url).map(|url| format!("{url}#website"))
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be an http(s) URL with a host
    /// - an enabled search box needs an `action`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url {
            validate_site_url(Self::FIELDS.url, url, diag);
        }

        if self.search.show && non_empty(&self.search.action).is_none() {
            diag.error_with_hint(
                Self::FIELDS.search_action,
                format!(
                    "{} is enabled but {} is not configured",
                    Self::FIELDS.search_show,
                    Self::FIELDS.search_action
                ),
                "set it to the search URL prefix, e.g.: \"https://example.com/search?q=\"",
            );
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsitePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<ListPatch<Extension>>,
}

impl Merge for WebsiteConfig {
    type Patch = WebsitePatch;

    fn apply(&mut self, patch: &WebsitePatch) {
        set_fields!(self, patch; show, kind);
        set_optional_fields!(self, patch; name, url);
        merge_fields!(self, patch; search, extra);
    }
}
