//! Singer catalog
//!
//! Discovery produces a catalog describing every stream; a catalog passed
//! back in with `--catalog` selects which streams and properties to sync.

use crate::error::{Error, Result, ResultExt};
use crate::streams::{StreamDescriptor, StreamGraph};
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::warn;

/// Singer catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub streams: Vec<CatalogEntry>,
}

/// One stream in a catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub tap_stream_id: String,
    pub stream: String,
    pub schema: Value,
    #[serde(default)]
    pub key_properties: Vec<String>,
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,
}

/// Metadata attached to a breadcrumb (`[]` for the stream itself,
/// `["properties", name]` for a property)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub breadcrumb: Vec<String>,
    pub metadata: JsonObject,
}

impl MetadataEntry {
    fn flag(&self, key: &str) -> Option<bool> {
        self.metadata.get(key).and_then(Value::as_bool)
    }

    fn is_root(&self) -> bool {
        self.breadcrumb.is_empty()
    }

    fn property_name(&self) -> Option<&str> {
        match self.breadcrumb.as_slice() {
            [kind, name] if kind == "properties" => Some(name.as_str()),
            _ => None,
        }
    }
}

impl Catalog {
    /// Describe every stream in the graph, all selected
    pub fn discover(graph: &StreamGraph) -> Self {
        Self {
            streams: graph.streams().iter().map(CatalogEntry::discover).collect(),
        }
    }

    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::catalog(format!("invalid catalog: {e}")))
    }

    /// Load a catalog file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Find an entry by stream id
    pub fn get(&self, tap_stream_id: &str) -> Option<&CatalogEntry> {
        self.streams.iter().find(|s| s.tap_stream_id == tap_stream_id)
    }

    /// Work out which streams and properties to sync
    pub fn selection(&self, graph: &StreamGraph) -> Selection {
        let mut selection = Selection::none();

        for entry in &self.streams {
            let Ok(descriptor) = graph.get(&entry.tap_stream_id) else {
                warn!(stream = %entry.tap_stream_id, "Catalog stream is unknown to this tap, ignoring");
                continue;
            };

            if !entry.is_selected() {
                continue;
            }

            let deselected = entry
                .metadata
                .iter()
                .filter_map(|m| m.property_name().map(|name| (name, m)))
                .filter(|(name, m)| {
                    !descriptor.is_primary_key(name) && !property_selected(m)
                })
                .map(|(name, _)| name.to_string())
                .collect();

            selection.streams.insert(
                descriptor.name.clone(),
                StreamSelection { deselected },
            );
        }

        selection
    }
}

fn property_selected(entry: &MetadataEntry) -> bool {
    match entry.metadata.get("inclusion").and_then(Value::as_str) {
        Some("automatic") => return true,
        Some("unsupported") => return false,
        _ => {}
    }
    entry
        .flag("selected")
        .or_else(|| entry.flag("selected-by-default"))
        .unwrap_or(true)
}

impl CatalogEntry {
    /// Catalog entry for a stream descriptor
    pub fn discover(descriptor: &StreamDescriptor) -> Self {
        let mut metadata = vec![MetadataEntry {
            breadcrumb: Vec::new(),
            metadata: json!({
                "inclusion": "available",
                "selected": true,
                "table-key-properties": descriptor.primary_keys,
                "forced-replication-method": descriptor.replication_method.as_str(),
            })
            .as_object()
            .cloned()
            .unwrap_or_default(),
        }];

        for name in descriptor.schema.names() {
            let inclusion = if descriptor.is_primary_key(name) {
                "automatic"
            } else {
                "available"
            };
            let mut entry = JsonObject::new();
            entry.insert("inclusion".to_string(), json!(inclusion));
            metadata.push(MetadataEntry {
                breadcrumb: vec!["properties".to_string(), name.to_string()],
                metadata: entry,
            });
        }

        Self {
            tap_stream_id: descriptor.name.clone(),
            stream: descriptor.name.clone(),
            schema: descriptor.json_schema(),
            key_properties: descriptor.primary_keys.clone(),
            metadata,
        }
    }

    fn root_metadata(&self) -> Option<&MetadataEntry> {
        self.metadata.iter().find(|m| m.is_root())
    }

    /// Whether the stream-level metadata selects this stream
    pub fn is_selected(&self) -> bool {
        self.root_metadata()
            .and_then(|m| m.flag("selected").or_else(|| m.flag("selected-by-default")))
            .unwrap_or(false)
    }
}

/// Selection state for one stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamSelection {
    /// Properties to strip from records and schema
    pub deselected: BTreeSet<String>,
}

/// Which streams (and properties) a sync emits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    all: bool,
    streams: HashMap<String, StreamSelection>,
}

impl Selection {
    /// Every stream and property
    pub fn all() -> Self {
        Self {
            all: true,
            streams: HashMap::new(),
        }
    }

    /// Nothing selected
    pub fn none() -> Self {
        Self {
            all: false,
            streams: HashMap::new(),
        }
    }

    /// Select a single stream with all properties
    #[must_use]
    pub fn with_stream(mut self, name: impl Into<String>) -> Self {
        self.streams.insert(name.into(), StreamSelection::default());
        self
    }

    /// Whether records of this stream are emitted
    pub fn is_selected(&self, name: &str) -> bool {
        self.all || self.streams.contains_key(name)
    }

    /// Properties removed from this stream's records
    pub fn deselected(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.streams.get(name).map(|s| &s.deselected)
    }

    /// Whether the stream has to be read: selected itself, or the parent
    /// of a selected stream
    pub fn needs_sync(&self, graph: &StreamGraph, name: &str) -> bool {
        self.is_selected(name)
            || graph
                .descendants(name)
                .iter()
                .any(|child| self.is_selected(child))
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::all()
    }
}
