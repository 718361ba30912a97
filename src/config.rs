//! Tap configuration
//!
//! The tap takes one setting, `api_key`. Settings come from one or more
//! JSON files given with `--config`, merged left to right, or from the
//! environment when `--config ENV` is passed.

use crate::auth::Credential;
use crate::error::{Error, Result, ResultExt};
use crate::schema::{PropertiesList, Property, PropertyType};
use crate::types::JsonObject;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// `--config` value that reads settings from the environment
pub const ENV_CONFIG: &str = "ENV";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "TAP_README_API_KEY";

const API_KEY: &str = "api_key";

// ============================================================================
// Tap Config
// ============================================================================

/// Validated tap configuration
#[derive(Clone, PartialEq, Eq)]
pub struct TapConfig {
    /// ReadMe.com API key
    pub api_key: String,
}

impl std::fmt::Debug for TapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TapConfig").field("api_key", &"***").finish()
    }
}

impl TapConfig {
    /// Create a config from an API key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let mut settings = JsonObject::new();
        settings.insert(API_KEY.to_string(), Value::String(api_key.into()));
        Self::from_settings(&settings)
    }

    /// Validate a settings object
    pub fn from_settings(settings: &JsonObject) -> Result<Self> {
        for key in settings.keys().filter(|k| k.as_str() != API_KEY) {
            debug!(setting = key.as_str(), "Ignoring unrecognized setting");
        }

        let api_key = match settings.get(API_KEY) {
            None | Some(Value::Null) => return Err(Error::missing_field(API_KEY)),
            Some(Value::String(s)) => s,
            Some(_) => return Err(Error::invalid_value(API_KEY, "must be a string")),
        };

        if api_key.trim().is_empty() {
            return Err(Error::invalid_value(API_KEY, "must not be empty"));
        }

        Ok(Self {
            api_key: api_key.clone(),
        })
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_settings(&parse_settings(json)?)
    }

    /// Load from `--config` sources, reading `ENV` from the process
    /// environment
    pub fn load<S: AsRef<str>>(sources: &[S]) -> Result<Self> {
        Self::load_with_env(sources, |key| std::env::var(key).ok())
    }

    /// Load from `--config` sources with a custom environment lookup
    ///
    /// Files are merged in order, later keys winning. A value found in the
    /// environment overrides the files.
    pub fn load_with_env<S, F>(sources: &[S], env: F) -> Result<Self>
    where
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = JsonObject::new();
        let mut use_env = false;

        for source in sources {
            let source = source.as_ref();
            if source == ENV_CONFIG {
                use_env = true;
                continue;
            }
            debug!(path = source, "Loading config file");
            settings.extend(read_settings_file(Path::new(source))?);
        }

        if use_env {
            if let Some(value) = env(API_KEY_ENV) {
                settings.insert(API_KEY.to_string(), Value::String(value));
            }
        }

        Self::from_settings(&settings)
    }

    /// Credential for HTTP Basic authentication
    pub fn credential(&self) -> Result<Credential> {
        Credential::new(self.api_key.clone())
    }

    /// Settings schema
    pub fn properties() -> PropertiesList {
        PropertiesList::new().property(
            Property::new(API_KEY, PropertyType::String)
                .required()
                .secret()
                .description("API Key for ReadMe.com"),
        )
    }

    /// Settings schema as JSON Schema
    pub fn json_schema() -> Value {
        Self::properties().to_json_schema()
    }
}

fn parse_settings(json: &str) -> Result<JsonObject> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => Ok(map),
        _ => Err(Error::config("config must be a JSON object")),
    }
}

fn read_settings_file(path: &Path) -> Result<JsonObject> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_settings(&content).with_context(|| format!("Invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn path_of(file: &NamedTempFile) -> String {
        file.path().display().to_string()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_parse_config() {
        let config = TapConfig::from_json(r#"{"api_key": "rdme_abc"}"#).unwrap();
        assert_eq!(config.api_key, "rdme_abc");
    }

    #[test]
    fn test_missing_api_key() {
        let err = TapConfig::from_json("{}").unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == "api_key"));

        let err = TapConfig::from_json(r#"{"api_key": null}"#).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_invalid_api_key() {
        let err = TapConfig::from_json(r#"{"api_key": 42}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));

        let err = TapConfig::from_json(r#"{"api_key": "   "}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_extra_settings_ignored() {
        let config = TapConfig::from_json(
            r#"{"api_key": "rdme_x", "stream_maps": {}, "flattening_enabled": false}"#,
        )
        .unwrap();
        assert_eq!(config.api_key, "rdme_x");
    }

    #[test]
    fn test_config_not_an_object() {
        assert!(matches!(
            TapConfig::from_json("[]"),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            TapConfig::from_json("{"),
            Err(Error::JsonParse(_))
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = TapConfig::new("rdme_secret").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("rdme_secret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_load_merges_files() {
        let first = config_file(r#"{"api_key": "first"}"#);
        let second = config_file(r#"{"api_key": "second"}"#);

        let config = TapConfig::load_with_env(&[path_of(&first), path_of(&second)], no_env).unwrap();
        assert_eq!(config.api_key, "second");
    }

    #[test]
    fn test_load_from_env() {
        let config = TapConfig::load_with_env(&[ENV_CONFIG], |key| {
            (key == API_KEY_ENV).then(|| "from-env".to_string())
        })
        .unwrap();
        assert_eq!(config.api_key, "from-env");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = config_file(r#"{"api_key": "from-file"}"#);
        let config = TapConfig::load_with_env(&[path_of(&file), ENV_CONFIG.to_string()], |_| {
            Some("from-env".to_string())
        })
        .unwrap();
        assert_eq!(config.api_key, "from-env");
    }

    #[test]
    fn test_file_used_when_env_unset() {
        let file = config_file(r#"{"api_key": "from-file"}"#);
        let config =
            TapConfig::load_with_env(&[path_of(&file), ENV_CONFIG.to_string()], no_env).unwrap();
        assert_eq!(config.api_key, "from-file");
    }

    #[test]
    fn test_load_without_sources() {
        let err = TapConfig::load_with_env::<&str, _>(&[], no_env).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TapConfig::load_with_env(&["/nonexistent/config.json"], no_env).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_credential() {
        let config = TapConfig::new("key").unwrap();
        assert_eq!(config.credential().unwrap().username(), "key");
    }

    #[test]
    fn test_json_schema() {
        assert_eq!(
            TapConfig::json_schema(),
            json!({
                "type": "object",
                "properties": {
                    "api_key": {
                        "type": ["string"],
                        "secret": true,
                        "writeOnly": true,
                        "description": "API Key for ReadMe.com"
                    }
                },
                "required": ["api_key"]
            })
        );
    }
}
