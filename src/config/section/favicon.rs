//! `[favicon]` section: icon links and companion meta tags.

use serde::{Deserialize, Serialize};

use crate::config::Merge;
use crate::config::merge::{ListPatch, merge_fields, set_fields, set_optional_fields};
use crate::config::util::list_or_table;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaviconRel {
    #[serde(rename = "apple-touch-icon")]
    AppleTouchIcon,
    #[default]
    #[serde(rename = "icon")]
    Icon,
    #[serde(rename = "mask-icon")]
    MaskIcon,
    #[serde(rename = "manifest")]
    Manifest,
    #[serde(rename = "shortcut icon")]
    ShortcutIcon,
}

impl FaviconRel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AppleTouchIcon => "apple-touch-icon",
            Self::Icon => "icon",
            Self::MaskIcon => "mask-icon",
            Self::Manifest => "manifest",
            Self::ShortcutIcon => "shortcut icon",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaviconLink {
    pub rel: FaviconRel,
    /// Size token such as `32x32`.
    pub sizes: Option<String>,
    pub href: String,
    /// Only meaningful for `mask-icon`.
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaviconLinkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<FaviconRel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Merge for FaviconLink {
    type Patch = FaviconLinkPatch;

    fn apply(&mut self, patch: &FaviconLinkPatch) {
        set_fields!(self, patch; rel, href);
        set_optional_fields!(self, patch; sizes, color);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaviconMeta {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaviconMetaPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Merge for FaviconMeta {
    type Patch = FaviconMetaPatch;

    fn apply(&mut self, patch: &FaviconMetaPatch) {
        set_fields!(self, patch; name, content);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaviconConfig {
    #[serde(deserialize_with = "list_or_table")]
    pub link: Vec<FaviconLink>,
    #[serde(deserialize_with = "list_or_table")]
    pub meta: Vec<FaviconMeta>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaviconPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<ListPatch<FaviconLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ListPatch<FaviconMeta>>,
}

impl Merge for FaviconConfig {
    type Patch = FaviconPatch;

    fn apply(&mut self, patch: &FaviconPatch) {
        merge_fields!(self, patch; link, meta);
    }
}
