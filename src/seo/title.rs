//! Page title and description resolution.

use crate::config::SeoConfig;
use crate::config::util::non_empty;
use crate::page::{route_segments, segment_title};

/// Title used for the root route when none is configured.
pub const HOME_TITLE: &str = "Home";

/// Resolve the page title: explicit `title`, else derived from `route`.
///
/// `route` is expected in normalized form (see [`crate::page::normalize_route`]).
pub fn resolve_title(config: &SeoConfig, route: &str) -> String {
    if let Some(title) = non_empty(&config.title) {
        return title.to_string();
    }
    if route == "/" {
        return HOME_TITLE.to_string();
    }
    title_from_route(route)
}

/// Derive a title from a route path.
///
/// Every segment is converted, joined with ` - ` and split again, keeping
/// only the last part. The result is the title of the final segment.
fn title_from_route(route: &str) -> String {
    let joined = route_segments(route)
        .map(segment_title)
        .collect::<Vec<_>>()
        .join(" - ");
    joined.rsplit(" - ").next().unwrap_or_default().to_string()
}

/// Resolve the page description: explicit `description`, else the tagline.
pub fn resolve_description(config: &SeoConfig) -> Option<&str> {
    non_empty(&config.description).or_else(|| non_empty(&config.general.tagline))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_explicit_title_wins() {
        let mut config = SeoConfig::default();
        config.title = Some("Custom".into());
        assert_eq!(resolve_title(&config, "/about"), "Custom");
        assert_eq!(resolve_title(&config, "/"), "Custom");
    }

    #[test]
    fn test_empty_title_falls_back() {
        let mut config = SeoConfig::default();
        config.title = Some(String::new());
        assert_eq!(resolve_title(&config, "/contact-us"), "Contact Us");
    }

    #[test]
    fn test_root_is_home() {
        assert_eq!(resolve_title(&SeoConfig::default(), "/"), "Home");
    }

    #[test]
    fn test_only_last_segment_contributes() {
        let config = SeoConfig::default();
        assert_eq!(resolve_title(&config, "/about/our-history"), "Our History");
        assert_eq!(resolve_title(&config, "/a/b/c-d-e"), "C D E");
    }

    #[test]
    fn test_description_chain() {
        let mut config = test_parse_config("[general]\ntagline = \"We help businesses grow.\"");
        assert_eq!(resolve_description(&config), Some("We help businesses grow."));

        config.description = Some("Page description".into());
        assert_eq!(resolve_description(&config), Some("Page description"));

        config.description = Some(String::new());
        assert_eq!(resolve_description(&config), Some("We help businesses grow."));

        assert_eq!(resolve_description(&SeoConfig::default()), None);
    }
}
