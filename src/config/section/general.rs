//! `[general]` section: tagline, social profiles, default share image.

use serde::{Deserialize, Serialize};

use crate::config::merge::{ListPatch, merge_fields, set_fields, set_optional_fields};
use crate::config::util::list_or_table;
use crate::config::Merge;

/// Social network a profile link belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    X,
    Youtube,
    Instagram,
    Linkedin,
    Pinterest,
    Tumblr,
    Reddit,
    #[default]
    Other,
}

impl SocialPlatform {
    /// Twitter and X profiles feed `twitter:site`.
    pub const fn is_twitter(self) -> bool {
        matches!(self, Self::Twitter | Self::X)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    #[serde(rename = "type")]
    pub platform: SocialPlatform,
    pub link: String,
}

impl SocialLink {
    pub fn new(platform: SocialPlatform, link: impl Into<String>) -> Self {
        Self {
            platform,
            link: link.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinkPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub platform: Option<SocialPlatform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Merge for SocialLink {
    type Patch = SocialLinkPatch;

    fn apply(&mut self, patch: &SocialLinkPatch) {
        set_fields!(self, patch; platform, link);
    }
}

/// Site-wide defaults shared by every page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Fallback page description.
    pub tagline: Option<String>,
    /// Social profiles, in display order.
    #[serde(deserialize_with = "list_or_table")]
    pub social: Vec<SocialLink>,
    /// Share image used when a page has none.
    #[serde(alias = "site_image")]
    pub default_image: Option<String>,
}

impl GeneralConfig {
    /// First Twitter/X profile, if any.
    pub fn twitter(&self) -> Option<&SocialLink> {
        self.social.iter().find(|s| s.platform.is_twitter())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<ListPatch<SocialLink>>,
    #[serde(alias = "site_image", skip_serializing_if = "Option::is_none")]
    pub default_image: Option<String>,
}

impl Merge for GeneralConfig {
    type Patch = GeneralPatch;

    fn apply(&mut self, patch: &GeneralPatch) {
        set_optional_fields!(self, patch; tagline, default_image);
        merge_fields!(self, patch; social);
    }
}
