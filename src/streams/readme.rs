//! ReadMe.com streams
//!
//! Four collections under `https://dash.readme.com/api/v1`:
//! categories, the docs of each category, API specification metadata and
//! changelogs.

use super::descriptor::StreamDescriptor;
use super::graph::{ParentEdge, StreamGraph};
use crate::context::Context;
use crate::error::Result;
use crate::schema::{PropertiesList, Property, PropertyType};
use crate::types::Record;
use tracing::warn;

pub const CATEGORIES: &str = "categories";
pub const CATEGORY_DOCS: &str = "category_docs";
pub const METADATA: &str = "metadata";
pub const CHANGELOGS: &str = "changelogs";

fn string(name: &str) -> Property {
    Property::new(name, PropertyType::String)
}

fn integer(name: &str) -> Property {
    Property::new(name, PropertyType::Integer)
}

fn boolean(name: &str) -> Property {
    Property::new(name, PropertyType::Boolean)
}

fn datetime(name: &str) -> Property {
    Property::new(name, PropertyType::DateTime)
}

/// Documentation categories
pub fn categories() -> StreamDescriptor {
    let schema = PropertiesList::new()
        .property(string("title"))
        .property(string("slug"))
        .property(integer("order"))
        .property(boolean("reference"))
        .property(string("version"))
        .property(string("project"))
        .property(datetime("createdAt"))
        .property(string("type"))
        .property(string("id"))
        .property(string("_id"));

    StreamDescriptor::new(CATEGORIES, "/v1/categories", schema).with_primary_keys(["id"])
}

/// Docs within one category
pub fn category_docs() -> StreamDescriptor {
    let schema = PropertiesList::new()
        .property(string("_id"))
        .property(string("title"))
        .property(string("slug"))
        .property(integer("order"))
        .property(boolean("hidden"))
        .property(Property::new(
            "children",
            PropertyType::array(PropertyType::any_object()),
        ));

    StreamDescriptor::new(CATEGORY_DOCS, "/v1/categories/{category_slug}/docs", schema)
        .with_primary_keys(["_id"])
}

/// API specification metadata
pub fn metadata() -> StreamDescriptor {
    let category = PropertiesList::new()
        .property(string("title"))
        .property(string("slug"))
        .property(integer("order"))
        .property(string("_id"))
        .property(string("type"))
        .property(string("id"));

    let schema = PropertiesList::new()
        .property(string("title"))
        .property(string("source"))
        .property(string("_id"))
        .property(datetime("lastSynced"))
        .property(string("version"))
        .property(Property::new("category", PropertyType::object(category)))
        .property(string("type"))
        .property(string("id"));

    StreamDescriptor::new(METADATA, "/v1/api-specification", schema).with_primary_keys(["id"])
}

/// Changelog posts
pub fn changelogs() -> StreamDescriptor {
    let page_metadata = PropertiesList::new()
        .property(Property::new(
            "image",
            PropertyType::array(PropertyType::String),
        ))
        .property(string("title"))
        .property(string("description"))
        .property(string("keywords"));

    let algolia = PropertiesList::new()
        .property(integer("recordCount"))
        .property(boolean("publishPending"));

    let schema = PropertiesList::new()
        .property(Property::new("metadata", PropertyType::object(page_metadata)))
        .property(Property::new("algolia", PropertyType::object(algolia)))
        .property(string("title"))
        .property(string("slug"))
        .property(string("body"))
        .property(string("type"))
        .property(boolean("hidden"))
        .property(integer("revision"))
        .property(string("_id"))
        .property(boolean("pendingAlgoliaPublish"))
        .property(datetime("createdAt"))
        .property(datetime("updatedAt"))
        .property(integer("__v"))
        .property(string("html"));

    StreamDescriptor::new(CHANGELOGS, "/v1/changelogs", schema).with_primary_keys(["_id"])
}

/// Child context for the docs of one category: `slug` → `category_slug`
pub fn category_context(record: &Record) -> Option<Context> {
    match record.get("slug").and_then(|v| v.as_str()) {
        Some(slug) => Some(Context::new().with_string("category_slug", slug)),
        None => {
            warn!(
                id = ?record.get("id"),
                "Category record has no string 'slug', skipping its docs"
            );
            None
        }
    }
}

/// All ReadMe streams with the categories → category_docs edge
pub fn readme_graph() -> Result<StreamGraph> {
    StreamGraph::new(
        vec![categories(), category_docs(), metadata(), changelogs()],
        vec![ParentEdge::new(
            CATEGORIES,
            CATEGORY_DOCS,
            category_context,
        )],
    )
}
