//! `[titles]` section and the derived template parameters.

use serde::{Deserialize, Serialize};

use crate::config::Merge;
use crate::config::merge::set_fields;

/// `%site.name` lookup target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteParams {
    pub name: Option<String>,
}

/// Values a title template may reference (`%site.name`, `%separator`, `%tagline`).
///
/// Always derived from the rest of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleParams {
    pub site: SiteParams,
    pub separator: String,
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitlesConfig {
    pub separator: String,
    /// Template for `<title>`; `%s` is the page title.
    pub template: String,
    #[serde(skip)]
    pub params: TitleParams,
}

impl Default for TitlesConfig {
    fn default() -> Self {
        Self {
            separator: "-".into(),
            template: "%s %separator %site.name".into(),
            params: TitleParams::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TitlesPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Merge for TitlesConfig {
    type Patch = TitlesPatch;

    fn apply(&mut self, patch: &TitlesPatch) {
        set_fields!(self, patch; separator, template);
    }
}
