//! Lookup command implementation.

use anyhow::Result;

use tola_seo::config::SeoConfig;
use tola_seo::page::lookup_page;

/// Print the page data for `path` as JSON.
///
/// A missing path prints the error payload rather than failing.
pub fn lookup(config: &SeoConfig, path: Option<&str>) -> Result<()> {
    let result = lookup_page(&config.pages, path);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
