//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// Singer tap for ReadMe.com
#[derive(Parser, Debug)]
#[command(name = "tap-readme")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON), repeatable; `ENV` reads settings from the
    /// environment, overriding the files
    #[arg(long, value_name = "PATH|ENV")]
    pub config: Vec<String>,

    /// Print tap information and exit
    #[arg(long)]
    pub about: bool,

    /// Output format for `--about`
    #[arg(long, default_value = "json", requires = "about")]
    pub format: AboutFormat,

    /// Run discovery and print the catalog
    #[arg(long, conflicts_with = "about")]
    pub discover: bool,

    /// Catalog file (JSON) selecting streams to sync
    #[arg(long, conflicts_with_all = ["about", "discover"])]
    pub catalog: Option<PathBuf>,

    /// State file (JSON) from a previous run
    #[arg(long, conflicts_with_all = ["about", "discover"])]
    pub state: Option<PathBuf>,

    /// Sync at most one record per stream
    #[arg(long, conflicts_with_all = ["about", "discover"])]
    pub test: bool,
}

/// `--about` output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AboutFormat {
    /// JSON document
    Json,
    /// Markdown summary
    Markdown,
}
