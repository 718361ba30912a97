//! Response decoding
//!
//! Extracts records from a JSON response body with a JSONPath expression.
//! ReadMe list endpoints return a bare JSON array, so streams use `$[*]`.

use crate::error::{Error, Result};
use crate::types::Record;
use serde_json::Value;

/// JSONPath selecting every element of a root-level array
pub const ROOT_ARRAY_PATH: &str = "$[*]";

/// JSON decoder with a record path
#[derive(Debug, Clone)]
pub struct JsonDecoder {
    record_path: String,
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::with_path(ROOT_ARRAY_PATH)
    }
}

impl JsonDecoder {
    /// Create a JSON decoder with a record path
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            record_path: path.into(),
        }
    }

    /// The JSONPath used to select records
    pub fn record_path(&self) -> &str {
        &self.record_path
    }

    /// Parse a body and extract its records
    ///
    /// Every selected value must be a JSON object.
    pub fn decode(&self, body: &str) -> Result<Vec<Record>> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))?;

        self.extract(&value)?
            .into_iter()
            .map(|v| match v {
                Value::Object(record) => Ok(record),
                other => Err(Error::decode(format!(
                    "Expected a JSON object at '{}', got {}",
                    self.record_path,
                    type_name(&other)
                ))),
            })
            .collect()
    }

    fn extract(&self, value: &Value) -> Result<Vec<Value>> {
        if self.record_path == "$" {
            return Ok(match value {
                Value::Array(arr) => arr.clone(),
                other => vec![other.clone()],
            });
        }
        extract_with_jsonpath(value, &self.record_path)
    }
}

fn extract_with_jsonpath(value: &Value, path: &str) -> Result<Vec<Value>> {
    use jsonpath_rust::JsonPath;

    let jp = JsonPath::try_from(path).map_err(|e| Error::JsonPath {
        message: format!("Invalid JSONPath: {e}"),
    })?;

    match jp.find(value) {
        Value::Array(arr) => Ok(arr),
        Value::Null => Ok(vec![]),
        other => Ok(vec![other]),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
