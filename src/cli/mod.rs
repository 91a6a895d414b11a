//! Command-line interface module.

mod args;
pub mod init;
pub mod lookup;
pub mod render;
pub mod validate;

pub use args::{Cli, Commands, OutputFormat, RenderArgs};
