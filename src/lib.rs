//! Tola SEO - head metadata synthesis for server-rendered sites.
//!
//! Given a site-wide [`SeoConfig`], the current route and optional
//! page-level [`SeoPatch`] data, [`render_seo`] produces the page title,
//! meta/link tags and JSON-LD structured data, and hands them to a
//! [`HeadSink`] in one call.
//!
//! ```ignore
//! let config = SeoConfig::load(Path::new("seo.toml"))?;
//! let mut head = HtmlHead::new();
//! render_seo(&config, "/about/our-history", config.page("/about/our-history"), &mut head);
//! println!("{}", head.render());
//! ```

pub mod config;
pub mod head;
pub mod logger;
pub mod page;
pub mod seo;
pub mod utils;

pub use config::{ConfigError, Merge, SeoConfig, SeoPatch};
pub use head::{HeadDescriptor, HeadSink, HtmlHead, LinkTag, MetaTag, ScriptTag};
pub use page::{PageLookup, RouteProvider, lookup_page};
pub use seo::{build_head, render_auto, render_seo, resolve_config};
