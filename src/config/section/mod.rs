//! Configuration section definitions.
//!
//! Each module corresponds to a section in `seo.toml`:
//!
//! | Module         | TOML Section      | Purpose                              |
//! |----------------|-------------------|--------------------------------------|
//! | `general`      | `[general]`       | Tagline, social profiles, image      |
//! | `organization` | `[organization]`  | Organization schema                  |
//! | `website`      | `[website]`       | WebSite schema, search box           |
//! | `webpage`      | `[webpage]`       | WebPage schema, og:type, dates       |
//! | `breadcrumbs`  | `[breadcrumbs]`   | BreadcrumbList schema                |
//! | `schemas`      | `[[schemas]]`     | Custom JSON-LD                       |
//! | `titles`       | `[titles]`        | Title template                       |
//! | `favicon`      | `[favicon]`       | Icon links and meta                  |

mod breadcrumbs;
pub mod extra;
mod favicon;
mod general;
mod organization;
mod schemas;
mod titles;
mod webpage;
mod website;

pub use breadcrumbs::{BreadcrumbsConfig, BreadcrumbsPatch};
pub use extra::{Extension, ExtensionPatch, apply_extensions};
pub use favicon::{
    FaviconConfig, FaviconLink, FaviconLinkPatch, FaviconMeta, FaviconMetaPatch, FaviconPatch,
    FaviconRel,
};
pub use general::{GeneralConfig, GeneralPatch, SocialLink, SocialLinkPatch, SocialPlatform};
pub use organization::{OrganizationConfig, OrganizationPatch, PostalAddress, PostalAddressPatch};
pub use schemas::{CustomSchema, CustomSchemaPatch};
pub use titles::{SiteParams, TitleParams, TitlesConfig, TitlesPatch};
pub use webpage::{WebpageConfig, WebpagePatch};
pub use website::{SearchConfig, SearchPatch, WebsiteConfig, WebsitePatch};

use super::{ConfigDiagnostics, FieldPath};

/// Check that `value` is an absolute http(s) URL with a host.
pub(crate) fn validate_site_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {e}"),
                "use format like https://example.com",
            );
        }
    }
}
