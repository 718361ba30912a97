//! ReadMe.com tap entry point
//!
//! Ties the configuration, stream graph, HTTP client and sync engine
//! together behind the three things a Singer tap does: describe itself,
//! discover a catalog and sync.

use crate::auth::Authenticator;
use crate::catalog::{Catalog, Selection};
use crate::config::TapConfig;
use crate::engine::{SyncConfig, SyncEngine, SyncStats};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::output::MessageWriter;
use crate::state::TapState;
use crate::streams::{readme_graph, StreamGraph};
use serde_json::{json, Value};
use std::fmt::Write as _;
use std::io::Write;
use tracing::info;

/// Tap name
pub const TAP_NAME: &str = "tap-readme";

/// One-line description
pub const TAP_DESCRIPTION: &str = "Singer tap for ReadMe.com";

/// Capabilities advertised by `--about`
pub const CAPABILITIES: &[&str] = &["catalog", "state", "discover", "about"];

/// The ReadMe.com tap
pub struct TapReadMe {
    config: Option<TapConfig>,
    http_config: HttpClientConfig,
    graph: StreamGraph,
}

impl TapReadMe {
    /// Create a tap that can sync
    pub fn new(config: TapConfig) -> Result<Self> {
        Ok(Self {
            config: Some(config),
            ..Self::unconfigured()?
        })
    }

    /// Create a tap without credentials, enough for `--about` and
    /// `--discover`
    pub fn unconfigured() -> Result<Self> {
        Ok(Self {
            config: None,
            http_config: HttpClientConfig::default(),
            graph: readme_graph()?,
        })
    }

    /// Point the tap at another API root
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.http_config.base_url = url.into();
        self
    }

    /// Replace the HTTP client configuration
    #[must_use]
    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// The stream graph
    pub fn graph(&self) -> &StreamGraph {
        &self.graph
    }

    /// Tap description as JSON
    pub fn about() -> Value {
        json!({
            "name": TAP_NAME,
            "description": TAP_DESCRIPTION,
            "version": crate::VERSION,
            "capabilities": CAPABILITIES,
            "settings": TapConfig::json_schema(),
        })
    }

    /// Tap description as Markdown
    pub fn about_markdown() -> String {
        let mut out = format!("# `{TAP_NAME}`\n\n{TAP_DESCRIPTION}\n\n");
        let _ = writeln!(out, "Version: {}\n", crate::VERSION);

        out.push_str("## Capabilities\n\n");
        for capability in CAPABILITIES {
            let _ = writeln!(out, "* `{capability}`");
        }

        out.push_str("\n## Settings\n\n");
        out.push_str("| Setting | Required | Default | Description |\n");
        out.push_str("|:--------|:--------:|:-------:|:------------|\n");
        for property in TapConfig::properties().iter() {
            let _ = writeln!(
                out,
                "| {} | {} | None | {} |",
                property.name,
                if property.required { "True" } else { "False" },
                property.description.as_deref().unwrap_or("")
            );
        }

        let _ = write!(
            out,
            "\nA full list of supported settings and capabilities is available by running: `{TAP_NAME} --about`\n"
        );
        out
    }

    /// Catalog of every stream
    pub fn discover(&self) -> Catalog {
        Catalog::discover(&self.graph)
    }

    /// HTTP client authenticated with the configured API key
    pub fn http_client(&self) -> Result<HttpClient> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| Error::missing_field("api_key"))?;
        let authenticator = Authenticator::new(config.credential()?);
        HttpClient::with_auth(self.http_config.clone(), authenticator)
    }

    /// Sync the selected streams, writing Singer messages to `writer`
    ///
    /// Without a catalog every stream is selected. Input state is carried
    /// forward into the STATE messages.
    pub async fn sync<W: Write + Send>(
        &self,
        writer: &mut MessageWriter<W>,
        catalog: Option<&Catalog>,
        state: TapState,
        sync_config: SyncConfig,
    ) -> Result<SyncStats> {
        let selection = match catalog {
            Some(catalog) => catalog.selection(&self.graph),
            None => Selection::all(),
        };

        info!(tap = TAP_NAME, version = crate::VERSION, "Starting sync");
        let mut engine = SyncEngine::new(self.http_client()?, state).with_config(sync_config);
        engine.sync_all(&self.graph, &selection, writer).await
    }
}
