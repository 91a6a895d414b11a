//! Render command implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::{OutputFormat, RenderArgs};
use tola_seo::config::{SeoConfig, SeoPatch};
use tola_seo::head::{HeadDescriptor, HtmlHead};
use tola_seo::page::normalize_route;
use tola_seo::{debug, render_seo};

/// Render the head for `args.route` to stdout.
pub fn render_page(config: &SeoConfig, args: &RenderArgs) -> Result<()> {
    let route = normalize_route(&args.route);

    let file_patch = args.page.as_deref().map(read_page_file).transpose()?;
    let overrides = match &file_patch {
        Some(patch) => Some(patch),
        None => config.page(&route),
    };
    if overrides.is_none() {
        debug!("render"; "no page data for `{}`", route);
    }

    let output = match args.format {
        OutputFormat::Html => {
            let mut head = HtmlHead::new();
            render_seo(config, &route, overrides, &mut head);
            head.render()
        }
        OutputFormat::Json => {
            let mut heads: Vec<HeadDescriptor> = Vec::with_capacity(1);
            render_seo(config, &route, overrides, &mut heads);
            let mut json = serde_json::to_string_pretty(&heads[0])?;
            json.push('\n');
            json
        }
    };

    print!("{output}");
    Ok(())
}

/// Parse a page override file, JSON by `.json` extension, TOML otherwise.
fn read_page_file(path: &Path) -> Result<SeoPatch> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read page file '{}'", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let patch = if is_json {
        SeoPatch::from_json(&content)
    } else {
        SeoPatch::from_toml(&content)
    };
    patch.with_context(|| format!("Invalid page file '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_page_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("about.json");
        fs::File::create(&json_path)
            .unwrap()
            .write_all(br#"{"title": "About Us Page"}"#)
            .unwrap();
        let patch = read_page_file(&json_path).unwrap();
        assert_eq!(patch.title.as_deref(), Some("About Us Page"));

        let toml_path = dir.path().join("about.toml");
        fs::write(&toml_path, "title = \"About\"\n[webpage]\ndate_published = \"2022-01-01\"").unwrap();
        let patch = read_page_file(&toml_path).unwrap();
        assert_eq!(patch.title.as_deref(), Some("About"));
    }

    #[test]
    fn test_read_page_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_page_file(&dir.path().join("missing.toml")).is_err());

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{").unwrap();
        assert!(read_page_file(&bad).is_err());
    }
}
