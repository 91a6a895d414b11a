//! Favicon link and meta tags.

use crate::config::SeoConfig;
use crate::head::{Attrs, LinkTag, MetaTag};

/// Favicon tags, prepended to the page's own links and meta.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favicons {
    pub link: Vec<LinkTag>,
    pub meta: Vec<MetaTag>,
}

pub fn build_favicons(config: &SeoConfig) -> Favicons {
    let link = config
        .favicon
        .link
        .iter()
        .map(|icon| LinkTag {
            hid: None,
            rel: icon.rel.as_str().to_string(),
            sizes: icon.sizes.clone().unwrap_or_default(),
            href: icon.href.clone(),
            color: icon.color.clone(),
            attrs: Attrs::new(),
        })
        .collect();

    let meta = config
        .favicon
        .meta
        .iter()
        .map(|m| MetaTag {
            name: Some(m.name.clone()),
            content: m.content.clone(),
            ..MetaTag::default()
        })
        .collect();

    Favicons { link, meta }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_links_and_meta() {
        let config = test_parse_config(
            r##"[favicon]
link = [
    { rel = "icon", sizes = "32x32", href = "/favicon-32x32.png" },
    { rel = "mask-icon", color = "#37dbff", href = "/safari-pinned-tab.svg" },
]
meta = [{ name = "theme-color", content = "#ffffff" }]
"##,
        );
        let favicons = build_favicons(&config);

        assert_eq!(favicons.link[0].rel, "icon");
        assert_eq!(favicons.link[0].sizes, "32x32");
        assert_eq!(favicons.link[1].sizes, "");
        assert_eq!(favicons.link[1].color.as_deref(), Some("#37dbff"));

        assert_eq!(favicons.meta.len(), 1);
        assert_eq!(favicons.meta[0].name.as_deref(), Some("theme-color"));
        assert_eq!(favicons.meta[0].content, "#ffffff");
        assert!(favicons.meta[0].hid.is_none());
    }

    #[test]
    fn test_empty() {
        assert_eq!(build_favicons(&SeoConfig::default()), Favicons::default());
    }
}
