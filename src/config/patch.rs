//! Page-level overrides.

use serde::{Deserialize, Serialize};

use super::merge::{ListPatch, merge_fields, set_fields, set_optional_fields};
use super::{
    BreadcrumbsPatch, CustomSchema, FaviconPatch, GeneralPatch, Merge, OrganizationPatch,
    SeoConfig, TitlesPatch, WebpagePatch, WebsitePatch,
};
use crate::head::{LinkTag, MetaTag, ScriptTag};

/// Partial [`SeoConfig`]: every field is optional and omission inherits
/// the base value.
///
/// Written as `[pages."<path>"]` in `seo.toml`, or as a standalone TOML or
/// JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<GeneralPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<WebsitePatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webpage: Option<WebpagePatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumbs: Option<BreadcrumbsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<ListPatch<CustomSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titles: Option<TitlesPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<FaviconPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Vec<MetaTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<LinkTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<Vec<ScriptTag>>,
}

impl SeoPatch {
    /// Parse a TOML override document.
    pub fn from_toml(content: &str) -> Result<Self, super::ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON override document.
    pub fn from_json(content: &str) -> Result<Self, super::ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}

impl Merge for SeoConfig {
    type Patch = SeoPatch;

    /// Raw `meta`/`link`/`script` arrays replace the base arrays; lists of
    /// config objects merge by position.
    fn apply(&mut self, patch: &SeoPatch) {
        set_fields!(self, patch; auto, locale, meta, link, script);
        set_optional_fields!(self, patch; title, description);
        merge_fields!(
            self, patch;
            general, organization, website, webpage, breadcrumbs, schemas, titles, favicon
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use serde_json::json;

    fn base() -> SeoConfig {
        test_parse_config(
            r#"[general]
tagline = "Base tagline"
social = [
    { type = "facebook", link = "https://facebook.com/mess" },
    { type = "twitter", link = "https://twitter.com/mess" },
]

[website]
name = "Mess"
url = "https://thisismess.com"

[organization.address]
address_locality = "Chicago"
"#,
        )
    }

    #[test]
    fn test_merge_without_patch_is_deep_copy() {
        let base = base();
        let mut copy = base.merged(None);
        copy.general.social.clear();
        assert_eq!(base.general.social.len(), 2);
    }

    #[test]
    fn test_scalars_replace_and_sections_recurse() {
        let base = base();
        let patch: SeoPatch = serde_json::from_value(json!({
            "title": "About",
            "website": {"name": "Override"},
            "organization": {"address": {"postal_code": "60622"}}
        }))
        .unwrap();

        let merged = base.merged(Some(&patch));
        assert_eq!(merged.title.as_deref(), Some("About"));
        assert_eq!(merged.website.name.as_deref(), Some("Override"));
        assert_eq!(merged.website.url.as_deref(), Some("https://thisismess.com"));
        assert_eq!(
            merged.organization.address.address_locality.as_deref(),
            Some("Chicago")
        );
        assert_eq!(
            merged.organization.address.postal_code.as_deref(),
            Some("60622")
        );

        // Inputs are untouched
        assert!(base.title.is_none());
        assert_eq!(base.website.name.as_deref(), Some("Mess"));
    }

    #[test]
    fn test_social_array_merges_by_position() {
        let patch: SeoPatch = serde_json::from_value(json!({
            "general": {"social": [{"link": "https://facebook.com/other"}]}
        }))
        .unwrap();
        let merged = base().merged(Some(&patch));
        assert_eq!(merged.general.social.len(), 2);
        assert_eq!(merged.general.social[0].link, "https://facebook.com/other");
        assert_eq!(
            merged.general.social[0].platform,
            crate::config::SocialPlatform::Facebook
        );
        assert_eq!(merged.general.social[1].link, "https://twitter.com/mess");
    }

    #[test]
    fn test_social_array_longer_than_base_appends() {
        let patch: SeoPatch = serde_json::from_value(json!({
            "general": {"social": [{}, {}, {"type": "x", "link": "https://x.com/mess"}]}
        }))
        .unwrap();
        let merged = base().merged(Some(&patch));
        assert_eq!(merged.general.social.len(), 3);
        assert_eq!(merged.general.social[1].link, "https://twitter.com/mess");
        assert_eq!(
            merged.general.social[2].platform,
            crate::config::SocialPlatform::X
        );
    }

    #[test]
    fn test_social_keyed_patch_merges_positionally() {
        let patch: SeoPatch = serde_json::from_value(json!({
            "general": {"social": {"1": {"link": "https://twitter.com/other"}}}
        }))
        .unwrap();
        let merged = base().merged(Some(&patch));
        assert_eq!(merged.general.social.len(), 2);
        assert_eq!(merged.general.social[1].link, "https://twitter.com/other");
        assert_eq!(
            merged.general.social[1].platform,
            crate::config::SocialPlatform::Twitter
        );
    }

    #[test]
    fn test_patch_from_toml_and_json() {
        let toml_patch = SeoPatch::from_toml("title = \"T\"\n[webpage]\nimage = \"/i.png\"").unwrap();
        assert_eq!(toml_patch.title.as_deref(), Some("T"));

        let json_patch = SeoPatch::from_json(r#"{"description": "D"}"#).unwrap();
        assert_eq!(json_patch.description.as_deref(), Some("D"));

        assert!(SeoPatch::from_json("{").is_err());
    }
}
