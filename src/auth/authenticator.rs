//! Authenticator implementation
//!
//! Applies the basic-auth credential to outbound requests.

use super::credential::Credential;
use crate::error::{Error, Result};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::RequestBuilder;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone)]
pub struct Authenticator {
    credential: Credential,
}

impl Authenticator {
    /// Create a new authenticator for the given credential
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// The credential this authenticator applies
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Build the `Authorization` header value, marked sensitive
    pub fn header_value(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&self.credential.basic_auth_value())
            .map_err(|e| Error::auth(format!("API key is not a valid header value: {e}")))?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        Ok(req.header(AUTHORIZATION, self.header_value()?))
    }
}
