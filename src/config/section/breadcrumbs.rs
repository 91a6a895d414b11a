//! `[breadcrumbs]` section.

use serde::{Deserialize, Serialize};

use crate::config::Merge;
use crate::config::merge::set_fields;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbsConfig {
    pub show: bool,
    /// Segments left out of the trail, written with a leading slash (`/about`).
    pub excluded_paths: Vec<String>,
}

impl Default for BreadcrumbsConfig {
    fn default() -> Self {
        Self {
            show: true,
            excluded_paths: Vec::new(),
        }
    }
}

pub struct BreadcrumbsFields {
    pub excluded_paths: FieldPath,
}

impl BreadcrumbsConfig {
    pub const FIELDS: BreadcrumbsFields = BreadcrumbsFields {
        excluded_paths: FieldPath::new("breadcrumbs.excluded_paths"),
    };

    /// Whether `segment` (without slash) is excluded.
    pub fn is_excluded(&self, segment: &str) -> bool {
        self.excluded_paths
            .iter()
            .any(|p| p.strip_prefix('/') == Some(segment))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for path in &self.excluded_paths {
            let valid = path
                .strip_prefix('/')
                .is_some_and(|seg| !seg.is_empty() && !seg.contains('/'));
            if !valid {
                diag.error_with_hint(
                    Self::FIELDS.excluded_paths,
                    format!("`{path}` is not a single path segment"),
                    "write one segment with a leading slash, e.g.: \"/about\"",
                );
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_paths: Option<Vec<String>>,
}

impl Merge for BreadcrumbsConfig {
    type Patch = BreadcrumbsPatch;

    fn apply(&mut self, patch: &BreadcrumbsPatch) {
        set_fields!(self, patch; show, excluded_paths);
    }
}
