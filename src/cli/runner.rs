//! CLI runner - executes the selected mode

use crate::catalog::Catalog;
use crate::cli::commands::{AboutFormat, Cli};
use crate::config::TapConfig;
use crate::engine::SyncConfig;
use crate::error::Result;
use crate::output::MessageWriter;
use crate::state::TapState;
use crate::tap::TapReadMe;
use std::io::Write;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
    base_url: Option<String>,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            base_url: None,
        }
    }

    /// Send requests to another API root
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Run against stdout
    pub async fn run(&self) -> Result<()> {
        self.run_with_output(std::io::stdout()).await
    }

    /// Run, writing protocol output to `out`
    pub async fn run_with_output<W: Write + Send>(&self, mut out: W) -> Result<()> {
        if self.cli.about {
            return self.about(&mut out);
        }
        if self.cli.discover {
            return self.discover(&mut out);
        }
        self.sync(out).await
    }

    fn about<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.cli.format {
            AboutFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&TapReadMe::about())?)?;
            }
            AboutFormat::Markdown => {
                write!(out, "{}", TapReadMe::about_markdown())?;
            }
        }
        Ok(())
    }

    fn discover<W: Write>(&self, out: &mut W) -> Result<()> {
        // Credentials are not needed to describe the streams, but a
        // config that was given must still be valid.
        if !self.cli.config.is_empty() {
            TapConfig::load(self.cli.config.as_slice())?;
        }

        let catalog = TapReadMe::unconfigured()?.discover();
        writeln!(out, "{}", serde_json::to_string_pretty(&catalog)?)?;
        Ok(())
    }

    async fn sync<W: Write + Send>(&self, out: W) -> Result<()> {
        let config = TapConfig::load(self.cli.config.as_slice())?;
        let mut tap = TapReadMe::new(config)?;
        if let Some(url) = &self.base_url {
            tap = tap.with_base_url(url.clone());
        }

        let catalog = self
            .cli
            .catalog
            .as_deref()
            .map(Catalog::from_file)
            .transpose()?;

        let state = match &self.cli.state {
            Some(path) => TapState::from_file(path)?,
            None => TapState::new(),
        };

        let sync_config = if self.cli.test {
            SyncConfig::new().with_max_records(1)
        } else {
            SyncConfig::new()
        };

        let mut writer = MessageWriter::new(out);
        let stats = tap
            .sync(&mut writer, catalog.as_ref(), state, sync_config)
            .await?;

        info!(
            records = stats.records_synced,
            pages = stats.pages_fetched,
            messages = writer.messages_written(),
            "Tap finished"
        );
        Ok(())
    }
}
