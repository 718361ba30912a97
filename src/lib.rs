// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]

//! # tap-readme
//!
//! A Singer tap extracting documentation data from the ReadMe.com API.
//!
//! ## Features
//!
//! - **Four streams**: categories, the docs of each category, API
//!   specification metadata and changelogs
//! - **Link header pagination**: Follows RFC 8288 `rel="next"` links
//! - **Basic auth**: API key as username, empty password
//! - **Parent/child streams**: Docs are fetched once per category slug
//! - **Singer output**: SCHEMA, RECORD and STATE messages on stdout
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tap_readme::{MessageWriter, SyncConfig, TapConfig, TapReadMe, TapState, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = TapConfig::new("rdme_xxx")?;
//!     let tap = TapReadMe::new(config)?;
//!
//!     // Describe the streams
//!     let catalog = tap.discover();
//!
//!     // Sync everything to stdout
//!     let mut writer = MessageWriter::new(std::io::stdout());
//!     tap.sync(&mut writer, Some(&catalog), TapState::new(), SyncConfig::new()).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           TapReadMe                             │
//! │   about() → settings    discover() → Catalog    sync() → stdout │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │   Auth   │   HTTP    │   Paginate    │  Streams  │   Output    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Basic    │ GET       │ Link header   │ Graph     │ SCHEMA      │
//! │          │ Retry     │ Cursor        │ Context   │ RECORD      │
//! │          │ Rate Limit│ perPage       │ Templates │ STATE       │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the tap
pub mod error;

/// Common types and type aliases
pub mod types;

/// Child sync context
pub mod context;

/// Path template rendering
pub mod template;

/// HTTP Basic authentication
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// Link header pagination
pub mod pagination;

/// Response decoding
pub mod decode;

/// Record schemas
pub mod schema;

/// ReadMe stream definitions and the stream graph
pub mod streams;

/// Singer catalog and stream selection
pub mod catalog;

/// Singer state
pub mod state;

/// Singer messages
pub mod output;

/// Main execution engine
pub mod engine;

/// Tap configuration
pub mod config;

/// Tap entry point
pub mod tap;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use catalog::{Catalog, Selection};
pub use config::TapConfig;
pub use context::Context;
pub use engine::{SyncConfig, SyncEngine, SyncStats};
pub use output::{Message, MessageWriter};
pub use state::TapState;
pub use tap::TapReadMe;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
