//! Singer state
//!
//! All ReadMe streams are full-table, so there is no replication key to
//! resume from. State records which contexts of each stream were synced
//! and is emitted after every completed stream or child context. Entries
//! for streams this tap does not know are carried forward untouched.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Complete tap state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TapState {
    /// Per-stream bookmarks
    #[serde(default)]
    pub bookmarks: BTreeMap<String, StreamBookmark>,

    /// Top-level keys written by other tools
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl TapState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse state from JSON text. An empty document is an empty state.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(json)
            .map_err(|e| Error::state(format!("Failed to parse state JSON: {e}")))
    }

    /// Load state from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::state(format!("Failed to read state file: {e}")))?;
        Self::from_json(&contents)
    }

    /// Bookmark for a stream
    pub fn get_stream(&self, stream: &str) -> Option<&StreamBookmark> {
        self.bookmarks.get(stream)
    }

    /// Mutable bookmark for a stream, creating it if needed
    pub fn get_stream_mut(&mut self, stream: &str) -> &mut StreamBookmark {
        self.bookmarks.entry(stream.to_string()).or_default()
    }

    /// Record that a stream (or one context of it) finished syncing
    pub fn mark_synced(&mut self, stream: &str, context: Option<&Context>) {
        let bookmark = self.get_stream_mut(stream);
        match context {
            Some(ctx) if !ctx.is_empty() => bookmark.record_partition(ctx),
            _ => {}
        }
    }

    /// State as the value of a STATE message
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Bookmark for one stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamBookmark {
    /// Child contexts synced for this stream
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partitions: Vec<PartitionBookmark>,

    /// Other keys carried forward
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl StreamBookmark {
    /// Bookmark for a context, if recorded
    pub fn get_partition(&self, context: &Context) -> Option<&PartitionBookmark> {
        self.partitions.iter().find(|p| &p.context == context)
    }

    /// Record a context; recording it again is a no-op
    pub fn record_partition(&mut self, context: &Context) {
        if self.get_partition(context).is_none() {
            self.partitions.push(PartitionBookmark {
                context: context.clone(),
                extra: JsonObject::new(),
            });
        }
    }
}

/// Bookmark for one child context
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionBookmark {
    /// Context the partition was synced with
    pub context: Context,

    /// Other keys carried forward
    #[serde(flatten)]
    pub extra: JsonObject,
}
