//! Path template rendering
//!
//! Stream paths embed `{variable}` placeholders that are filled from the
//! child `Context`, e.g. `/v1/categories/{category_slug}/docs`.

use crate::context::Context;
use crate::error::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Regex for matching template variables: {variable}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}").expect("template regex is valid")
});

/// Names of the variables a template refers to, in order of appearance
pub fn variables(template: &str) -> Vec<String> {
    TEMPLATE_REGEX
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Render a template string with the given context
///
/// Values are percent-encoded as a single path segment. Every placeholder
/// must resolve; missing names are reported together.
pub fn render(template: &str, ctx: &Context) -> Result<String> {
    let mut missing = Vec::new();

    let rendered = TEMPLATE_REGEX.replace_all(template, |cap: &regex::Captures<'_>| {
        let name = &cap[1];
        match ctx.get(name) {
            Some(value) => encode_segment(&value_to_string(value)),
            None => {
                missing.push(name.to_string());
                String::new()
            }
        }
    });

    if missing.is_empty() {
        Ok(rendered.into_owned())
    } else {
        Err(Error::undefined_var(missing.join(", ")))
    }
}

/// Convert a JSON value to a string for template substitution
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Percent-encode a value for use as one URL path segment
fn encode_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
