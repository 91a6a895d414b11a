//! SEO metadata synthesis.
//!
//! Turns a base [`SeoConfig`], the current route and an optional
//! [`SeoPatch`] into one [`HeadDescriptor`]:
//!
//! ```text
//! base ──clone──► webpage.url = route ──merge(patch)──► resolved config
//!                                                        │
//!        ┌──────────────┬──────────────┬─────────────────┤
//!        ▼              ▼              ▼                 ▼
//!   title/desc      favicons     og/twitter tags     JSON-LD schemas
//!        └──────────────┴──────────────┴─────────────────┘
//!                              │
//!                              ▼
//!                  HeadSink::inject_head (one call)
//! ```
//!
//! The engine is infallible: missing inputs omit the affected tag or
//! field instead of producing an error.

pub mod breadcrumb;
pub mod favicon;
pub mod og;
pub mod schema;
pub mod title;

pub use breadcrumb::{Breadcrumb, build_breadcrumbs};
pub use favicon::{Favicons, build_favicons};
pub use og::build_social_tags;
pub use schema::build_schemas;
pub use title::{resolve_description, resolve_title};

use crate::config::{Merge, SeoConfig, SeoPatch};
use crate::debug;
use crate::head::{HeadDescriptor, HeadSink, MetaTag};
use crate::page::{RouteProvider, normalize_route};

/// Resolve the configuration for one render without touching `base`.
///
/// `webpage.url` is taken from the route before the patch is applied, so a
/// patch may still override it.
pub fn resolve_config(base: &SeoConfig, route: &str, overrides: Option<&SeoPatch>) -> SeoConfig {
    let mut config = base.clone();
    config.pages.clear();
    config.webpage.url = Some(route.to_string());
    if let Some(patch) = overrides {
        config.apply(patch);
    }
    config.refresh_title_params();
    config
}

/// Compute the head content for `route`.
pub fn build_head<R>(base: &SeoConfig, route: &R, overrides: Option<&SeoPatch>) -> HeadDescriptor
where
    R: RouteProvider + ?Sized,
{
    let route = normalize_route(route.current_route_path());
    let config = resolve_config(base, &route, overrides);

    let title = resolve_title(&config, &route);
    let description = resolve_description(&config);
    debug!("seo"; "`{}` resolved title `{}`", route, title);

    let favicons = build_favicons(&config);
    let social = build_social_tags(&config, &title, description);
    let schemas = build_schemas(&config, &route, description);

    let mut meta = favicons.meta;
    meta.extend(config.meta.iter().cloned());
    meta.extend(social);
    if let Some(description) = description {
        meta.push(MetaTag::named("description", description));
    }

    let mut link = favicons.link;
    link.extend(config.link.iter().cloned());

    let mut script = config.script.clone();
    script.extend(schemas);

    HeadDescriptor {
        title,
        title_template: config.titles.template.clone(),
        title_template_params: config.titles.params.clone(),
        meta,
        link,
        script,
    }
}

/// Build the head for `route` and hand it to `sink` in a single call.
pub fn render_seo<R, S>(base: &SeoConfig, route: &R, overrides: Option<&SeoPatch>, sink: &mut S)
where
    R: RouteProvider + ?Sized,
    S: HeadSink + ?Sized,
{
    sink.inject_head(build_head(base, route, overrides));
}

/// Render without overrides when `auto` is enabled.
///
/// Returns whether anything was rendered.
pub fn render_auto<R, S>(base: &SeoConfig, route: &R, sink: &mut S) -> bool
where
    R: RouteProvider + ?Sized,
    S: HeadSink + ?Sized,
{
    if !base.auto {
        debug!("seo"; "auto render disabled");
        return false;
    }
    render_seo(base, route, None, sink);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::head::{LinkTag, ScriptTag};
    use serde_json::json;

    fn base() -> SeoConfig {
        test_parse_config(
            r##"[general]
tagline = "We help businesses grow."

[website]
name = "Mess"
url = "https://example.com"

[favicon]
link = [{ rel = "icon", sizes = "16x16", href = "/16.png" }]
meta = [{ name = "theme-color", content = "#ffffff" }]
"##,
        )
    }

    #[test]
    fn test_meta_order() {
        let patch: SeoPatch = serde_json::from_value(json!({
            "meta": [{"hid": "robots", "name": "robots", "content": "noindex"}]
        }))
        .unwrap();
        let head = build_head(&base(), "/about", Some(&patch));

        let keys: Vec<_> = head.meta.iter().filter_map(MetaTag::key).collect();
        assert_eq!(keys.first(), Some(&"theme-color"));
        assert_eq!(keys[1], "robots");
        assert_eq!(keys[2], "og:title");
        assert_eq!(keys.last(), Some(&"description"));
        assert_eq!(
            head.meta_by_hid("description").map(|m| m.content.as_str()),
            Some("We help businesses grow.")
        );
    }

    #[test]
    fn test_link_and_script_order() {
        let patch = SeoPatch {
            link: Some(vec![LinkTag {
                rel: "canonical".into(),
                href: "https://example.com/about".into(),
                ..LinkTag::default()
            }]),
            script: Some(vec![ScriptTag {
                hid: Some("analytics".into()),
                kind: "text/javascript".into(),
                ..ScriptTag::default()
            }]),
            ..SeoPatch::default()
        };
        let head = build_head(&base(), "/about", Some(&patch));

        let rels: Vec<_> = head.link.iter().map(|l| l.rel.as_str()).collect();
        assert_eq!(rels, ["icon", "canonical"]);
        assert_eq!(head.script[0].hid.as_deref(), Some("analytics"));
        assert_eq!(
            head.script[1].hid.as_deref(),
            Some(schema::ORGANIZATION_SCHEMA_ID)
        );
    }

    #[test]
    fn test_descriptor_title_fields() {
        let head = build_head(&base(), "/about/our-history/", None);
        assert_eq!(head.title, "Our History");
        assert_eq!(head.title_template, "%s %separator %site.name");
        assert_eq!(head.title_template_params.site.name.as_deref(), Some("Mess"));
    }

    #[test]
    fn test_no_description_meta_when_empty() {
        let head = build_head(&SeoConfig::default(), "/", None);
        assert!(head.meta_by_hid("description").is_none());
        assert_eq!(head.title, "Home");
    }

    #[test]
    fn test_title_params_follow_patch() {
        let patch: SeoPatch =
            serde_json::from_value(json!({"website": {"name": "Other"}, "titles": {"separator": "|"}}))
                .unwrap();
        let head = build_head(&base(), "/", Some(&patch));
        assert_eq!(head.title_template_params.site.name.as_deref(), Some("Other"));
        assert_eq!(head.title_template_params.separator, "|");
    }

    #[test]
    fn test_patch_can_override_webpage_url() {
        let patch: SeoPatch =
            serde_json::from_value(json!({"webpage": {"url": "/canonical"}})).unwrap();
        let head = build_head(&base(), "/about", Some(&patch));
        let page = head.script_by_hid(schema::WEBPAGE_SCHEMA_ID).unwrap();
        assert_eq!(page.inner_html["@id"], "https://example.com/canonical#webpage");
        assert_eq!(page.inner_html["potentialAction"][0]["target"], json!(["/canonical"]));
    }

    #[test]
    fn test_base_is_not_mutated() {
        let base = base();
        let patch = SeoPatch {
            title: Some("Changed".into()),
            ..SeoPatch::default()
        };
        let _ = build_head(&base, "/about", Some(&patch));
        assert!(base.title.is_none());
        assert!(base.webpage.url.is_none());
    }

    #[test]
    fn test_render_seo_injects_once() {
        let mut sink: Vec<HeadDescriptor> = Vec::new();
        render_seo(&base(), "/about", None, &mut sink);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].title, "About");
    }

    #[test]
    fn test_render_auto_respects_flag() {
        let mut sink: Vec<HeadDescriptor> = Vec::new();
        assert!(render_auto(&base(), "/", &mut sink));

        let mut manual = base();
        manual.auto = false;
        assert!(!render_auto(&manual, "/", &mut sink));
        assert_eq!(sink.len(), 1);
    }
}
