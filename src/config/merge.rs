//! Layered configuration merging.
//!
//! Every config section has a companion `*Patch` type whose fields are all
//! optional. Applying a patch follows three rules:
//!
//! | Patch field                | Effect on the target                       |
//! |----------------------------|--------------------------------------------|
//! | absent (`None`)            | target value inherited unchanged           |
//! | scalar / primitive list    | replaces the target value outright         |
//! | nested section             | merged recursively                         |
//!
//! Lists of objects take a [`ListPatch`] and merge position by position:
//! patch element `i` recurses into base element `i`, extra patch elements
//! are appended, base elements past the patch are kept.
//! Raw JSON values deep-merge object keys and replace everything else.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use super::util::{KeyedEntries, array_index};

/// A value that can absorb a partial override.
pub trait Merge: Clone {
    /// All-optional mirror of `Self`.
    type Patch: Clone + fmt::Debug;

    /// Apply `patch` in place.
    fn apply(&mut self, patch: &Self::Patch);

    /// Return a merged copy, leaving `self` and `patch` untouched.
    ///
    /// `None` yields a plain deep copy.
    fn merged(&self, patch: Option<&Self::Patch>) -> Self {
        let mut out = self.clone();
        if let Some(patch) = patch {
            out.apply(patch);
        }
        out
    }
}

/// Replace target fields with every patch field that is present.
macro_rules! set_fields {
    ($target:expr, $patch:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$patch.$field {
                $target.$field = value.clone();
            }
        )+
    };
}

/// Like `set_fields!`, for targets that are themselves `Option`s.
macro_rules! set_optional_fields {
    ($target:expr, $patch:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$patch.$field {
                $target.$field = Some(value.clone());
            }
        )+
    };
}

/// Recurse into nested sections (anything implementing `Merge`).
macro_rules! merge_fields {
    ($target:expr, $patch:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$patch.$field {
                $crate::config::Merge::apply(&mut $target.$field, value);
            }
        )+
    };
}

pub(crate) use {merge_fields, set_fields, set_optional_fields};

// ============================================================================
// Lists
// ============================================================================

/// Override for a list of objects.
///
/// Both shapes merge element by element: a patch that addresses an
/// existing element recurses into it, any other patch is appended as a
/// default element with the patch applied. Base elements the patch does
/// not reach are kept.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
#[serde(bound(deserialize = "T::Patch: Deserialize<'de>"))]
pub enum ListPatch<T: Merge> {
    /// Canonical shape: element `i` of the patch merges into element `i`.
    Items(Vec<T::Patch>),
    /// Legacy keyed shape (`{"0": {...}, "1": {...}}`).
    ///
    /// Integer keys that address an existing element merge into it;
    /// all other entries are appended in `Object.values` order.
    Keyed(KeyedEntries<T::Patch>),
}

impl<T: Merge> Serialize for ListPatch<T>
where
    T::Patch: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        match self {
            Self::Items(items) => items.serialize(serializer),
            Self::Keyed(KeyedEntries(entries)) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<T: Merge + Default + fmt::Debug> Merge for Vec<T> {
    type Patch = ListPatch<T>;

    fn apply(&mut self, patch: &Self::Patch) {
        let existing = self.len();
        let mut merge_at = |index: Option<usize>, item_patch: &T::Patch| match index {
            Some(index) if index < existing => self[index].apply(item_patch),
            _ => self.push(T::default().merged(Some(item_patch))),
        };
        match patch {
            ListPatch::Items(items) => {
                for (index, item_patch) in items.iter().enumerate() {
                    merge_at(Some(index), item_patch);
                }
            }
            ListPatch::Keyed(KeyedEntries(entries)) => {
                for (key, item_patch) in entries {
                    merge_at(array_index(key), item_patch);
                }
            }
        }
    }
}

// ============================================================================
// Raw JSON
// ============================================================================

/// Deep-merge `patch` into `base`: objects recurse key by key, any other
/// patch value replaces the base value.
pub fn merge_json(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match base_map.get_mut(key) {
                    Some(base_value) => merge_json(base_value, patch_value),
                    None => {
                        base_map.insert(key.clone(), patch_value.clone());
                    }
                }
            }
        }
        (base, patch) => *base = patch.clone(),
    }
}

impl Merge for Value {
    type Patch = Value;

    fn apply(&mut self, patch: &Self::Patch) {
        merge_json(self, patch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
    struct Item {
        name: String,
        size: u32,
    }

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(default)]
    struct ItemPatch {
        name: Option<String>,
        size: Option<u32>,
    }

    impl Merge for Item {
        type Patch = ItemPatch;

        fn apply(&mut self, patch: &ItemPatch) {
            set_fields!(self, patch; name, size);
        }
    }

    fn item(name: &str, size: u32) -> Item {
        Item {
            name: name.into(),
            size,
        }
    }

    #[test]
    fn test_merge_json_recurses_objects() {
        let mut base = json!({"a": {"b": 1, "c": 2}, "d": [1, 2]});
        merge_json(&mut base, &json!({"a": {"c": 3}, "d": [9]}));
        assert_eq!(base, json!({"a": {"b": 1, "c": 3}, "d": [9]}));
    }

    #[test]
    fn test_merge_json_replaces_mismatched_shapes() {
        let mut base = json!({"a": {"b": 1}});
        merge_json(&mut base, &json!({"a": "flat"}));
        assert_eq!(base, json!({"a": "flat"}));
    }

    #[test]
    fn test_list_patch_items_merge_by_position() {
        let base = vec![item("a", 1), item("b", 2)];
        let patch: ListPatch<Item> = serde_json::from_value(json!([{"size": 9}])).unwrap();
        assert_eq!(base.merged(Some(&patch)), vec![item("a", 9), item("b", 2)]);
    }

    #[test]
    fn test_list_patch_items_append_past_base() {
        let base = vec![item("a", 1)];
        let patch: ListPatch<Item> =
            serde_json::from_value(json!([{"name": "z"}, {"name": "c", "size": 3}])).unwrap();
        assert_eq!(base.merged(Some(&patch)), vec![item("z", 1), item("c", 3)]);
    }

    #[test]
    fn test_list_patch_serializes_patch_shape() {
        let patch: ListPatch<Item> = serde_json::from_value(json!([{"size": 4}])).unwrap();
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!([{"name": null, "size": 4}])
        );
    }

    #[test]
    fn test_list_patch_keyed_merges_by_index() {
        let base = vec![item("a", 1), item("b", 2)];
        let patch: ListPatch<Item> =
            serde_json::from_value(json!({"1": {"size": 5}, "new": {"name": "c"}})).unwrap();
        let merged = base.merged(Some(&patch));
        assert_eq!(merged, vec![item("a", 1), item("b", 5), item("c", 0)]);
        // Inputs are untouched
        assert_eq!(base, vec![item("a", 1), item("b", 2)]);
    }

    #[test]
    fn test_merged_without_patch_is_copy() {
        let base = vec![item("a", 1)];
        let mut copy = base.merged(None);
        copy[0].size = 42;
        assert_eq!(base[0].size, 1);
    }
}
