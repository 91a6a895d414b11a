//! Tola SEO - render SEO head metadata from a `seo.toml`.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use tola_seo::{SeoConfig, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dry } => cli::init::init_config(&cli.config, *dry),
        Commands::Render { args } => {
            let config = SeoConfig::load(&cli.config)?;
            config.validate()?;
            cli::render::render_page(&config, args)
        }
        Commands::Lookup { path } => {
            let config = SeoConfig::load(&cli.config)?;
            cli::lookup::lookup(&config, path.as_deref())
        }
        Commands::Validate => {
            let config = SeoConfig::load(&cli.config)?;
            cli::validate::validate_config(&config)
        }
    }
}
