//! Stream definitions
//!
//! A stream is one ReadMe collection with its own schema and pagination
//! sequence. Streams are plain descriptors consumed by the generic sync
//! engine; parent/child relationships are explicit edges in a
//! `StreamGraph`, validated before any sync begins.

mod descriptor;
mod graph;
mod readme;

pub use descriptor::StreamDescriptor;
pub use graph::{ContextFn, ParentEdge, StreamGraph};
pub use readme::{
    categories, category_context, category_docs, changelogs, metadata, readme_graph, CATEGORIES,
    CATEGORY_DOCS, CHANGELOGS, METADATA,
};

#[cfg(test)]
mod tests;
