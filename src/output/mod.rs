//! Output module
//!
//! Singer messages and the line writer that puts them on stdout.
//!
//! # Overview
//!
//! - `Message` - SCHEMA, RECORD and STATE messages
//! - `MessageWriter` - Writes one JSON message per line and flushes

mod messages;
mod writer;

pub use messages::Message;
pub use writer::MessageWriter;
