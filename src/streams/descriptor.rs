//! Stream descriptor

use crate::context::Context;
use crate::decode::{JsonDecoder, ROOT_ARRAY_PATH};
use crate::error::Result;
use crate::pagination::PAGE_SIZE;
use crate::schema::PropertiesList;
use crate::template;
use crate::types::ReplicationMethod;
use serde_json::Value;

/// Static description of one stream
#[derive(Debug, Clone, PartialEq)]
pub struct StreamDescriptor {
    /// Stream name (also the Singer `tap_stream_id`)
    pub name: String,
    /// Request path relative to the API root; may contain `{variable}`s
    pub path: String,
    /// Primary key properties
    pub primary_keys: Vec<String>,
    /// Record schema
    pub schema: PropertiesList,
    /// Replication method
    pub replication_method: ReplicationMethod,
    /// JSONPath selecting records in a response body
    pub records_path: String,
    /// Records requested per page
    pub page_size: u32,
}

impl StreamDescriptor {
    /// Create a full-table stream reading a root-level array
    pub fn new(name: impl Into<String>, path: impl Into<String>, schema: PropertiesList) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            primary_keys: Vec::new(),
            schema,
            replication_method: ReplicationMethod::FullTable,
            records_path: ROOT_ARRAY_PATH.to_string(),
            page_size: PAGE_SIZE,
        }
    }

    /// Set primary key properties
    #[must_use]
    pub fn with_primary_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Render the request path for a context
    pub fn render_path(&self, context: &Context) -> Result<String> {
        template::render(&self.path, context)
    }

    /// Variables the path template needs from a context
    pub fn path_variables(&self) -> Vec<String> {
        template::variables(&self.path)
    }

    /// Decoder for this stream's responses
    pub fn decoder(&self) -> JsonDecoder {
        JsonDecoder::with_path(&self.records_path)
    }

    /// Record schema as JSON Schema
    pub fn json_schema(&self) -> Value {
        self.schema.to_json_schema()
    }

    /// Whether a property is part of the primary key
    pub fn is_primary_key(&self, property: &str) -> bool {
        self.primary_keys.iter().any(|k| k == property)
    }
}
