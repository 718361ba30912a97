//! Schema module
//!
//! Typed property lists for stream and configuration schemas.
//!
//! # Features
//!
//! - **Builder**: `PropertiesList::new().property(Property::new(..))`
//! - **JSON Schema**: rendered with nullable types and `date-time` formats
//! - **Conformance**: undeclared record properties are dropped before emission

mod conform;
mod types;

pub use conform::conform_record;
pub use types::{PropertiesList, Property, PropertyType};

#[cfg(test)]
mod tests;
