//! Head descriptor handed to the host page renderer.
//!
//! The engine never touches a document. It assembles a [`HeadDescriptor`]
//! and passes it to a [`HeadSink`] in one call, so the sink can apply its
//! own `hid` deduplication over the complete tag set.
//!
//! | Type        | Renders as                                          |
//! |-------------|-----------------------------------------------------|
//! | `MetaTag`   | `<meta name/property=... content=...>`              |
//! | `LinkTag`   | `<link rel=... sizes=... href=...>`                 |
//! | `ScriptTag` | `<script type=...>` with JSON `innerHTML`           |

pub mod html;

pub use html::HtmlHead;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::TitleParams;

/// Extra attributes carried verbatim (insertion ordered).
pub type Attrs = Map<String, Value>;

/// MIME type of structured-data scripts.
pub const JSON_LD: &str = "application/ld+json";

#[inline]
fn is_false(value: &bool) -> bool {
    !*value
}

// ============================================================================
// Tags
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaTag {
    /// Deduplication key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    pub content: String,
    #[serde(flatten)]
    pub attrs: Attrs,
}

impl MetaTag {
    /// `<meta name=...>` keyed by its name.
    pub fn named(name: &str, content: impl Into<String>) -> Self {
        Self {
            hid: Some(name.to_string()),
            name: Some(name.to_string()),
            content: content.into(),
            ..Self::default()
        }
    }

    /// `<meta property=...>` keyed by its property (Open Graph style).
    pub fn property(property: &str, content: impl Into<String>) -> Self {
        Self {
            hid: Some(property.to_string()),
            property: Some(property.to_string()),
            content: content.into(),
            ..Self::default()
        }
    }

    /// The name or property this tag describes.
    pub fn key(&self) -> Option<&str> {
        self.name.as_deref().or(self.property.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hid: Option<String>,
    pub rel: String,
    /// Empty when the link has no size token.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sizes: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub attrs: Attrs,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hid: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(rename = "innerHTML", skip_serializing_if = "Value::is_null")]
    pub inner_html: Value,
    /// Template tokens inside `inner_html` must be resolved by the sink.
    #[serde(rename = "processTemplateParams", skip_serializing_if = "is_false")]
    pub process_template_params: bool,
    #[serde(flatten)]
    pub attrs: Attrs,
}

impl ScriptTag {
    /// Structured-data script carrying a JSON-LD object.
    pub fn json_ld(hid: impl Into<String>, body: Value, process_template_params: bool) -> Self {
        Self {
            hid: Some(hid.into()),
            kind: JSON_LD.to_string(),
            inner_html: body,
            process_template_params,
            attrs: Attrs::new(),
        }
    }
}

// ============================================================================
// Descriptor + sink
// ============================================================================

/// Everything the host needs to populate `<head>` for one render.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadDescriptor {
    /// Resolved page title (the `%s` of the template).
    pub title: String,
    pub title_template: String,
    pub title_template_params: TitleParams,
    pub meta: Vec<MetaTag>,
    pub link: Vec<LinkTag>,
    pub script: Vec<ScriptTag>,
}

impl HeadDescriptor {
    /// Find a meta tag by its `hid`.
    pub fn meta_by_hid(&self, hid: &str) -> Option<&MetaTag> {
        self.meta.iter().find(|m| m.hid.as_deref() == Some(hid))
    }

    /// Find a script by its `hid`.
    pub fn script_by_hid(&self, hid: &str) -> Option<&ScriptTag> {
        self.script.iter().find(|s| s.hid.as_deref() == Some(hid))
    }
}

/// Receiver of assembled head content (the host's head-injection hook).
pub trait HeadSink {
    fn inject_head(&mut self, head: HeadDescriptor);
}

/// Capture descriptors, mostly useful in tests and for JSON output.
impl HeadSink for Vec<HeadDescriptor> {
    fn inject_head(&mut self, head: HeadDescriptor) {
        self.push(head);
    }
}

impl<S: HeadSink + ?Sized> HeadSink for &mut S {
    fn inject_head(&mut self, head: HeadDescriptor) {
        (**self).inject_head(head);
    }
}
