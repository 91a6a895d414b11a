//! Validate command implementation.

use anyhow::Result;

use tola_seo::config::SeoConfig;
use tola_seo::log;

/// Report every configuration problem at once.
pub fn validate_config(config: &SeoConfig) -> Result<()> {
    config.validate()?;

    let pages = config.pages.len();
    log!(
        "validate";
        "`{}` is valid ({} page{})",
        config.config_path.display(),
        pages,
        if pages == 1 { "" } else { "s" }
    );
    Ok(())
}
