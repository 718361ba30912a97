//! CLI module
//!
//! Singer command-line interface.
//!
//! # Modes
//!
//! - `--about` - Describe the tap and its settings
//! - `--discover` - Print the catalog
//! - default - Sync the selected streams to stdout

mod commands;
mod runner;

pub use commands::{AboutFormat, Cli};
pub use runner::Runner;
