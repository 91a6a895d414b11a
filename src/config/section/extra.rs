//! Schema extensions (`extra = [{ key, value }]`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::Merge;
use crate::config::merge::{merge_fields, set_fields};

/// A caller-supplied key/value pair applied after a schema's built-in fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extension {
    pub key: String,
    pub value: Value,
}

impl Extension {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Merge for Extension {
    type Patch = ExtensionPatch;

    fn apply(&mut self, patch: &ExtensionPatch) {
        set_fields!(self, patch; key);
        merge_fields!(self, patch; value);
    }
}

/// Write every extension into `target`, last writer wins.
///
/// Extensions are always applied after built-in fields, so a key that
/// collides with a built-in field replaces it.
pub fn apply_extensions(target: &mut Map<String, Value>, extensions: &[Extension]) {
    for ext in extensions {
        target.insert(ext.key.clone(), ext.value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extensions_override_existing_keys() {
        let mut target = Map::new();
        target.insert("name".into(), json!("Built-in"));
        target.insert("url".into(), json!("https://example.com"));

        apply_extensions(
            &mut target,
            &[
                Extension::new("name", "Override"),
                Extension::new("email", "hi@example.com"),
            ],
        );

        assert_eq!(target["name"], "Override");
        assert_eq!(target["email"], "hi@example.com");
        assert_eq!(target["url"], "https://example.com");
        // Built-in key keeps its position, new keys are appended
        let keys: Vec<_> = target.keys().cloned().collect();
        assert_eq!(keys, ["name", "url", "email"]);
    }

    #[test]
    fn test_extension_patch_deep_merges_value() {
        let base = Extension::new("ContactPoint", json!({"name": "Jon", "email": "a@b.c"}));
        let patch = ExtensionPatch {
            key: None,
            value: Some(json!({"email": "new@b.c"})),
        };
        let merged = base.merged(Some(&patch));
        assert_eq!(merged.value, json!({"name": "Jon", "email": "new@b.c"}));
    }
}
