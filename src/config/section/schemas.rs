//! `[[schemas]]`: caller-supplied JSON-LD fragments.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Merge;
use crate::config::merge::{merge_fields, set_fields};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSchema {
    /// Deduplication key, unique among all schemas of a page.
    pub hid: String,
    /// Raw JSON-LD body, passed through unvalidated.
    pub schema: Value,
}

impl CustomSchema {
    pub fn new(hid: impl Into<String>, schema: Value) -> Self {
        Self {
            hid: hid.into(),
            schema,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSchemaPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl Merge for CustomSchema {
    type Patch = CustomSchemaPatch;

    fn apply(&mut self, patch: &CustomSchemaPatch) {
        set_fields!(self, patch; hid);
        merge_fields!(self, patch; schema);
    }
}
