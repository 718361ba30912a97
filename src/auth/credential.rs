//! API key credential

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Basic-auth credential built from the configured API key
///
/// The key is the username and the password is always empty. The value is
/// never printed: `Debug` redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    api_key: String,
}

impl Credential {
    /// Create a credential, rejecting an empty key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::invalid_value("api_key", "must not be empty"));
        }
        Ok(Self { api_key })
    }

    /// Basic-auth username (the API key)
    pub fn username(&self) -> &str {
        &self.api_key
    }

    /// Basic-auth password (always empty)
    pub fn password(&self) -> &str {
        ""
    }

    /// Value for the `Authorization` header
    pub fn basic_auth_value(&self) -> String {
        let pair = format!("{}:{}", self.username(), self.password());
        format!("Basic {}", STANDARD.encode(pair))
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &"***")
            .finish()
    }
}
