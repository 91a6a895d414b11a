//! SEO configuration management for `seo.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── merge          # Merge trait, ListPatch, merge_json
//! ├── patch          # SeoPatch (page-level overrides)
//! └── mod.rs         # SeoConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                      |
//! |--------------------|----------------------------------------------|
//! | (root)             | `auto`, `locale`, page-level overrides       |
//! | `[general]`        | Tagline, social profiles, default image      |
//! | `[organization]`   | Organization schema                          |
//! | `[website]`        | WebSite schema and search box                |
//! | `[webpage]`        | WebPage schema                               |
//! | `[breadcrumbs]`    | BreadcrumbList schema                        |
//! | `[[schemas]]`      | Custom JSON-LD                               |
//! | `[titles]`         | Title template                               |
//! | `[favicon]`        | Icon links and meta tags                     |
//! | `[pages."<path>"]` | Per-page override data                       |

pub mod merge;
mod patch;
pub mod section;
pub mod types;
pub(crate) mod util;

pub use merge::{ListPatch, Merge, merge_json};
pub use patch::SeoPatch;
pub use section::*;
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::head::{LinkTag, MetaTag, ScriptTag};
use crate::log;
use crate::seo::schema::BUILTIN_SCHEMA_IDS;
use util::list_or_table;

/// Default config file name.
pub const CONFIG_FILE: &str = "seo.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `seo.toml`.
///
/// Also the shape of a resolved per-render configuration: page-level
/// fields (`title`, `description`, `meta`, `link`, `script`) are normally
/// empty in the file and filled in by a [`SeoPatch`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Render on every route without an explicit call.
    pub auto: bool,
    /// `og:locale` and WebPage `inLanguage`; empty disables both.
    pub locale: String,

    pub general: GeneralConfig,
    pub organization: OrganizationConfig,
    pub website: WebsiteConfig,
    pub webpage: WebpageConfig,
    pub breadcrumbs: BreadcrumbsConfig,
    #[serde(deserialize_with = "list_or_table")]
    pub schemas: Vec<CustomSchema>,
    pub titles: TitlesConfig,
    pub favicon: FaviconConfig,

    /// Explicit page title, otherwise derived from the route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Explicit page description, otherwise `general.tagline`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw tags passed through to the head verbatim.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meta: Vec<MetaTag>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<LinkTag>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub script: Vec<ScriptTag>,

    /// Override data keyed by route path.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub pages: BTreeMap<String, SeoPatch>,
}

impl Default for SeoConfig {
    fn default() -> Self {
        let mut config = Self {
            config_path: PathBuf::new(),
            auto: true,
            locale: "en_US".into(),
            general: GeneralConfig::default(),
            organization: OrganizationConfig::default(),
            website: WebsiteConfig::default(),
            webpage: WebpageConfig::default(),
            breadcrumbs: BreadcrumbsConfig::default(),
            schemas: Vec::new(),
            titles: TitlesConfig::default(),
            favicon: FaviconConfig::default(),
            title: None,
            description: None,
            meta: Vec::new(),
            link: Vec::new(),
            script: Vec::new(),
            pages: BTreeMap::new(),
        };
        config.refresh_title_params();
        config
    }
}

impl SeoConfig {
    /// Load configuration by searching upward from cwd for `name`.
    pub fn load(name: &Path) -> Result<Self, ConfigError> {
        let path = find_config_file(name).ok_or_else(|| {
            ConfigError::Io(
                name.to_path_buf(),
                std::io::Error::from(std::io::ErrorKind::NotFound),
            )
        })?;
        Self::from_path(&path)
    }

    /// Load configuration from a file, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(Self::parse_with_ignored(content)?.0)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let mut config: Self =
            serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
                ignored.push(path.to_string());
            })?;
        config.refresh_title_params();
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Recompute `titles.params` from the site name, separator and tagline.
    pub fn refresh_title_params(&mut self) {
        self.titles.params = TitleParams {
            site: SiteParams {
                name: self.website.name.clone(),
            },
            separator: self.titles.separator.clone(),
            tagline: self.general.tagline.clone(),
        };
    }

    /// Override data registered for `route` in `[pages]`.
    pub fn page(&self, route: &str) -> Option<&SeoPatch> {
        self.pages.get(route)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.website.validate(&mut diag);
        self.organization.validate(&mut diag);
        self.breadcrumbs.validate(&mut diag);
        validate_schema_ids("schemas", &self.schemas, &mut diag);

        for (route, page) in &self.pages {
            if !route.starts_with('/') {
                diag.error_with_hint(
                    format!("pages.\"{route}\""),
                    "page key is not a route path",
                    format!("write it with a leading slash, e.g.: \"/{route}\""),
                );
            }
            if page.schemas.is_some() {
                let merged = self.merged(Some(page));
                validate_schema_ids(
                    format!("pages.\"{route}\".schemas"),
                    &merged.schemas,
                    &mut diag,
                );
            }
        }

        if self.locale.is_empty() {
            diag.warn("locale", "empty, og:locale and inLanguage are omitted");
        }
        if self.titles.template.is_empty() {
            diag.warn("titles.template", "empty, og:title and twitter:title are omitted");
        }

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

/// Custom schema ids must be non-empty, unique and not shadow a built-in.
fn validate_schema_ids(
    field: impl AsRef<str>,
    schemas: &[CustomSchema],
    diag: &mut ConfigDiagnostics,
) {
    let field = field.as_ref();
    let mut seen = FxHashSet::default();
    for (i, schema) in schemas.iter().enumerate() {
        if schema.hid.is_empty() {
            diag.error_with_hint(
                format!("{field}[{i}].hid"),
                "custom schema has no hid",
                "set a unique hid, e.g.: hid = \"event\"",
            );
        } else if BUILTIN_SCHEMA_IDS.contains(&schema.hid.as_str()) {
            diag.error_with_hint(
                format!("{field}[{i}].hid"),
                format!("`{}` is reserved for a built-in schema", schema.hid),
                "disable the built-in section and use a different hid",
            );
        } else if !seen.insert(schema.hid.as_str()) {
            diag.error(
                format!("{field}[{i}].hid"),
                format!("duplicate hid `{}`", schema.hid),
            );
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SeoConfig {
    let (parsed, ignored) = SeoConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
