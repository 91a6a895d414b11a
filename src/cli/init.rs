//! Init command implementation.
//!
//! Writes a starter `seo.toml` populated with the default values.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use tola_seo::config::SeoConfig;
use tola_seo::log;

/// Generate the starter configuration.
pub fn generate_config_template() -> Result<String> {
    let mut out = format!(
        "# tola-seo configuration file (v{})\n\
         # Page overrides go in [pages.\"/path\"] tables.\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&toml::to_string_pretty(&SeoConfig::default())?);
    Ok(out)
}

/// Write the starter configuration to `path`, or print it when `dry_run`.
pub fn init_config(path: &Path, dry_run: bool) -> Result<()> {
    let content = generate_config_template()?;
    if dry_run {
        print!("{content}");
        return Ok(());
    }

    if path.exists() {
        bail!(
            "Config file '{}' already exists.\n\
             Remove it first or choose another path with --config.",
            path.display()
        );
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
