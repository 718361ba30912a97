//! Child sync context
//!
//! A `Context` carries values derived from a parent record into a child
//! stream's requests, e.g. `{"category_slug": "getting-started"}` for the
//! docs under one category. It is serialised as a plain JSON object in
//! state bookmarks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Values passed from a parent record to one child sync
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    values: BTreeMap<String, Value>,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Add a string value
    #[must_use]
    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), Value::String(value.into()));
        self
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a string value by key
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Whether the context has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over key/value pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pairs: Vec<String> = self
            .values
            .iter()
            .map(|(k, v)| match v {
                Value::String(s) => format!("{k}={s}"),
                other => format!("{k}={other}"),
            })
            .collect();
        write!(f, "{{{}}}", pairs.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_values() {
        let ctx = Context::new()
            .with_string("category_slug", "getting-started")
            .with_value("order", 3);

        assert_eq!(ctx.get_string("category_slug"), Some("getting-started"));
        assert_eq!(ctx.get("order"), Some(&json!(3)));
        assert_eq!(ctx.get_string("order"), None);
        assert!(ctx.get("missing").is_none());
        assert!(!ctx.is_empty());
        assert!(Context::new().is_empty());
    }

    #[test]
    fn test_context_serializes_as_object() {
        let ctx = Context::new().with_string("category_slug", "api");
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value, json!({"category_slug": "api"}));

        let back: Context = serde_json::from_value(value).unwrap();
        assert_eq!(back, ctx);
    }

    #[test]
    fn test_context_display() {
        let ctx = Context::new()
            .with_string("category_slug", "api")
            .with_value("n", 1);
        assert_eq!(ctx.to_string(), "{category_slug=api, n=1}");
    }
}
