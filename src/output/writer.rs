//! Singer message writer
//!
//! Writes each message as one line of JSON and flushes, so a downstream
//! target sees records as they are extracted.

use super::messages::Message;
use crate::error::Result;
use std::collections::HashSet;
use std::io::Write;

/// Line-oriented writer for Singer messages
pub struct MessageWriter<W: Write> {
    /// Underlying sink (stdout in the CLI)
    inner: W,
    /// Streams whose SCHEMA has been written
    schemas_written: HashSet<String>,
    /// Number of messages written
    messages_written: usize,
}

impl<W: Write> MessageWriter<W> {
    /// Create a new writer
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            schemas_written: HashSet::new(),
            messages_written: 0,
        }
    }

    /// Write a message
    pub fn write(&mut self, message: &Message) -> Result<()> {
        serde_json::to_writer(&mut self.inner, message)?;
        self.inner.write_all(b"\n")?;
        self.inner.flush()?;

        if let Message::Schema { stream, .. } = message {
            self.schemas_written.insert(stream.clone());
        }
        self.messages_written += 1;
        Ok(())
    }

    /// Whether a SCHEMA message was already written for a stream
    pub fn has_schema(&self, stream: &str) -> bool {
        self.schemas_written.contains(stream)
    }

    /// Number of messages written so far
    #[must_use]
    pub fn messages_written(&self) -> usize {
        self.messages_written
    }

    /// Get a reference to the underlying sink
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consume the writer and return the underlying sink
    pub fn into_inner(self) -> W {
        self.inner
    }
}
