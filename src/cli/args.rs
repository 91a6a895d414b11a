//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use tola_seo::config::CONFIG_FILE;

/// SEO head synthesis for server-rendered sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: seo.toml)
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the head for a route
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Print the override data registered for a path
    #[command(visible_alias = "l")]
    Lookup {
        /// Route path, e.g. `/about`
        path: Option<String>,
    },

    /// Check the configuration for errors
    #[command(visible_alias = "v")]
    Validate,

    /// Write a starter configuration file
    #[command(visible_alias = "i")]
    Init {
        /// Print the template instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Route path of the page, e.g. `/about/our-history`
    pub route: String,

    /// Page override file (TOML, or JSON with a `.json` extension).
    /// Defaults to the matching `[pages]` entry.
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub page: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered `<head>` content
    Html,
    /// Head descriptor as JSON
    Json,
}
