//! Authentication module
//!
//! ReadMe.com uses HTTP Basic authentication with the API key as the
//! username and an empty password.
//!
//! The `Credential` holds the key for the lifetime of the process and the
//! `Authenticator` attaches it to every outbound request.

mod authenticator;
mod credential;

pub use authenticator::Authenticator;
pub use credential::Credential;
