//! Open Graph and Twitter Card meta tags.
//!
//! Every tag is optional except `og:type`; a tag whose source value is
//! missing or empty is omitted rather than emitted blank.

use crate::config::SeoConfig;
use crate::config::util::non_empty;
use crate::head::MetaTag;

/// `twitter:card` value used whenever an image is available.
pub const TWITTER_CARD: &str = "summary";

/// Build the Open Graph / Twitter tag set.
///
/// `og:*` tags use `property`, `twitter:*` tags use `name`; each `hid` is
/// the tag key itself.
pub fn build_social_tags(config: &SeoConfig, title: &str, description: Option<&str>) -> Vec<MetaTag> {
    let template = Some(config.titles.template.as_str()).filter(|t| !t.is_empty());
    let image = non_empty(&config.webpage.image).or_else(|| non_empty(&config.general.default_image));
    let site_name = non_empty(&config.website.name);
    let locale = Some(config.locale.as_str()).filter(|l| !l.is_empty());
    let twitter_site = config.general.twitter().map(|s| s.link.as_str());

    let mut tags = Vec::with_capacity(12);
    let mut og = |key: &str, content: Option<&str>| {
        if let Some(content) = content {
            tags.push(MetaTag::property(key, content));
        }
    };
    og("og:title", template);
    og("og:description", description);
    og("og:image", image);
    og("og:site_name", site_name);
    og("og:locale", locale);
    og("og:type", Some(config.webpage.og_type()));

    let mut twitter = |key: &str, content: Option<&str>| {
        if let Some(content) = content {
            tags.push(MetaTag::named(key, content));
        }
    };
    twitter("twitter:card", image.map(|_| TWITTER_CARD));
    twitter("twitter:site", twitter_site);
    twitter("twitter:title", template.map(|_| title));
    twitter("twitter:description", description);
    twitter("twitter:image", image);
    twitter("twitter:image:alt", image.map(|_| title));

    tags
}
