//! Breadcrumb trail for the current route.

use serde::Serialize;

use crate::config::SeoConfig;
use crate::config::util::non_empty;
use crate::page::{route_segments, segment_title};

/// One `ListItem` of a BreadcrumbList.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub position: usize,
    pub name: String,
    /// Absolute URL; `None` for the current page.
    #[serde(rename = "item", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Breadcrumb {
    pub fn new(position: usize, name: impl Into<String>, link: Option<String>) -> Self {
        Self {
            kind: "ListItem",
            position,
            name: name.into(),
            link,
        }
    }
}

/// Build the breadcrumb trail for `route`.
///
/// # Rules
/// - root route yields an empty trail
/// - entry 1 is the site itself (`website.name` or "Home")
/// - excluded segments are skipped without consuming a position
/// - the last emitted entry carries no link
pub fn build_breadcrumbs(config: &SeoConfig, route: &str) -> Vec<Breadcrumb> {
    if route == "/" {
        return Vec::new();
    }

    let site_url = non_empty(&config.website.url);
    let site_name = non_empty(&config.website.name).unwrap_or(super::title::HOME_TITLE);

    let mut trail = vec![Breadcrumb::new(1, site_name, site_url.map(str::to_string))];
    let mut path = String::new();
    for segment in route_segments(route) {
        path.push('/');
        path.push_str(segment);

        if config.breadcrumbs.is_excluded(segment) {
            continue;
        }

        let link = site_url.map(|url| format!("{url}{path}"));
        trail.push(Breadcrumb::new(trail.len() + 1, segment_title(segment), link));
    }

    if let Some(last) = trail.last_mut() {
        last.link = None;
    }
    trail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use serde_json::json;

    fn config(extra: &str) -> SeoConfig {
        test_parse_config(&format!(
            "[website]\nname = \"Mess\"\nurl = \"https://example.com\"\n{extra}"
        ))
    }

    #[test]
    fn test_root_is_empty() {
        assert!(build_breadcrumbs(&config(""), "/").is_empty());
    }

    #[test]
    fn test_nested_route() {
        let trail = build_breadcrumbs(&config(""), "/about/our-history");
        assert_eq!(
            trail,
            vec![
                Breadcrumb::new(1, "Mess", Some("https://example.com".into())),
                Breadcrumb::new(2, "About", Some("https://example.com/about".into())),
                Breadcrumb::new(3, "Our History", None),
            ]
        );
    }

    #[test]
    fn test_excluded_segment_keeps_positions_contiguous() {
        let config = config("[breadcrumbs]\nexcluded_paths = [\"/about\"]");
        let trail = build_breadcrumbs(&config, "/about/our-history");
        assert_eq!(
            trail,
            vec![
                Breadcrumb::new(1, "Mess", Some("https://example.com".into())),
                Breadcrumb::new(2, "Our History", None),
            ]
        );
    }

    #[test]
    fn test_excluded_last_segment_unlinks_last_emitted() {
        let config = config("[breadcrumbs]\nexcluded_paths = [\"/drafts\"]");
        let trail = build_breadcrumbs(&config, "/blog/drafts");
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[1].name, "Blog");
        assert!(trail[1].link.is_none());
    }

    #[test]
    fn test_every_segment_excluded_leaves_unlinked_site_entry() {
        let config = config("[breadcrumbs]\nexcluded_paths = [\"/about\"]");
        let trail = build_breadcrumbs(&config, "/about");
        assert_eq!(trail, vec![Breadcrumb::new(1, "Mess", None)]);
    }

    #[test]
    fn test_link_accumulates_full_path() {
        let trail = build_breadcrumbs(&config(""), "/a/b/c");
        assert_eq!(trail[2].link.as_deref(), Some("https://example.com/a/b"));
    }

    #[test]
    fn test_without_site_info() {
        let trail = build_breadcrumbs(&SeoConfig::default(), "/about/team");
        assert_eq!(trail[0].name, "Home");
        assert!(trail.iter().all(|b| b.link.is_none()));
    }

    #[test]
    fn test_serializes_as_list_item() {
        let trail = build_breadcrumbs(&config(""), "/about");
        assert_eq!(
            serde_json::to_value(&trail).unwrap(),
            json!([
                {"@type": "ListItem", "position": 1, "name": "Mess", "item": "https://example.com"},
                {"@type": "ListItem", "position": 2, "name": "About"},
            ])
        );
    }
}
