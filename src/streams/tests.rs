//! Tests for stream definitions

use super::*;
use crate::context::Context;
use crate::error::Error;
use crate::schema::PropertiesList;
use crate::types::{Record, ReplicationMethod};
use serde_json::json;

fn record(value: serde_json::Value) -> Record {
    value.as_object().cloned().unwrap()
}

fn stream(name: &str, path: &str) -> StreamDescriptor {
    StreamDescriptor::new(name, path, PropertiesList::new())
}

fn no_context(_: &Record) -> Option<Context> {
    None
}

// ============================================================================
// ReadMe Stream Tests
// ============================================================================

#[test]
fn test_readme_stream_names_and_paths() {
    let graph = readme_graph().unwrap();
    let streams: Vec<(&str, &str)> = graph
        .streams()
        .iter()
        .map(|s| (s.name.as_str(), s.path.as_str()))
        .collect();

    assert_eq!(
        streams,
        vec![
            ("categories", "/v1/categories"),
            ("category_docs", "/v1/categories/{category_slug}/docs"),
            ("metadata", "/v1/api-specification"),
            ("changelogs", "/v1/changelogs"),
        ]
    );
}

#[test]
fn test_readme_primary_keys() {
    assert_eq!(categories().primary_keys, vec!["id"]);
    assert_eq!(category_docs().primary_keys, vec!["_id"]);
    assert_eq!(metadata().primary_keys, vec!["id"]);
    assert_eq!(changelogs().primary_keys, vec!["_id"]);
    assert!(changelogs().is_primary_key("_id"));
    assert!(!changelogs().is_primary_key("slug"));
}

#[test]
fn test_readme_defaults() {
    for descriptor in readme_graph().unwrap().streams() {
        assert_eq!(descriptor.replication_method, ReplicationMethod::FullTable);
        assert_eq!(descriptor.records_path, "$[*]");
        assert_eq!(descriptor.page_size, 100);
    }
}

#[test]
fn test_categories_schema() {
    let schema = categories().json_schema();
    assert_eq!(schema["properties"]["order"]["type"], json!(["integer", "null"]));
    assert_eq!(schema["properties"]["createdAt"]["format"], "date-time");
    assert_eq!(schema["properties"]["reference"]["type"], json!(["boolean", "null"]));
    assert_eq!(schema["properties"].as_object().unwrap().len(), 10);
}

#[test]
fn test_category_docs_schema() {
    let schema = category_docs().json_schema();
    assert_eq!(schema["properties"]["children"]["type"], json!(["array", "null"]));
    assert_eq!(
        schema["properties"]["children"]["items"]["type"],
        json!(["object"])
    );
}

#[test]
fn test_metadata_schema_nested_category() {
    let schema = metadata().json_schema();
    let category = &schema["properties"]["category"];
    assert_eq!(category["type"], json!(["object", "null"]));
    assert_eq!(category["properties"]["order"]["type"], json!(["integer", "null"]));
    assert_eq!(schema["properties"]["lastSynced"]["format"], "date-time");
}

#[test]
fn test_changelogs_schema() {
    let schema = changelogs().json_schema();
    assert_eq!(
        schema["properties"]["metadata"]["properties"]["image"]["items"]["type"],
        json!(["string"])
    );
    assert_eq!(
        schema["properties"]["algolia"]["properties"]["recordCount"]["type"],
        json!(["integer", "null"])
    );
    assert_eq!(schema["properties"]["__v"]["type"], json!(["integer", "null"]));
    assert_eq!(schema["properties"].as_object().unwrap().len(), 14);
}

#[test]
fn test_category_context() {
    let ctx = category_context(&record(json!({"id": "1", "slug": "getting-started"}))).unwrap();
    assert_eq!(ctx, Context::new().with_string("category_slug", "getting-started"));
}

#[test]
fn test_category_context_without_slug() {
    assert!(category_context(&record(json!({"id": "1"}))).is_none());
    assert!(category_context(&record(json!({"id": "1", "slug": null}))).is_none());
    assert!(category_context(&record(json!({"id": "1", "slug": 5}))).is_none());
}

#[test]
fn test_category_docs_path_from_context() {
    let ctx = category_context(&record(json!({"slug": "getting-started"}))).unwrap();
    assert_eq!(
        category_docs().render_path(&ctx).unwrap(),
        "/v1/categories/getting-started/docs"
    );
}

#[test]
fn test_category_docs_path_requires_context() {
    let err = category_docs().render_path(&Context::new()).unwrap_err();
    assert!(matches!(err, Error::UndefinedVariable { .. }));
}

// ============================================================================
// Graph Tests
// ============================================================================

#[test]
fn test_readme_graph_shape() {
    let graph = readme_graph().unwrap();

    let roots: Vec<&str> = graph.roots().map(|s| s.name.as_str()).collect();
    assert_eq!(roots, vec!["categories", "metadata", "changelogs"]);

    let children: Vec<&str> = graph
        .children(CATEGORIES)
        .map(|e| e.child.as_str())
        .collect();
    assert_eq!(children, vec!["category_docs"]);

    assert_eq!(graph.parent_of(CATEGORY_DOCS).unwrap().parent, "categories");
    assert!(graph.parent_of(CHANGELOGS).is_none());
    assert_eq!(graph.descendants(CATEGORIES), vec!["category_docs".to_string()]);
    assert!(graph.descendants(METADATA).is_empty());
}

#[test]
fn test_graph_lookup() {
    let graph = readme_graph().unwrap();
    assert_eq!(graph.get("metadata").unwrap().path, "/v1/api-specification");
    assert!(matches!(
        graph.get("pages"),
        Err(Error::StreamNotFound { .. })
    ));
}

#[test]
fn test_edge_child_context() {
    let graph = readme_graph().unwrap();
    let edge = graph.parent_of(CATEGORY_DOCS).unwrap();
    let ctx = edge
        .child_context(&record(json!({"slug": "api-reference"})))
        .unwrap();
    assert_eq!(ctx.get_string("category_slug"), Some("api-reference"));
}

#[test]
fn test_graph_rejects_duplicate_names() {
    let err = StreamGraph::new(vec![stream("a", "/a"), stream("a", "/b")], vec![]).unwrap_err();
    assert!(err.to_string().contains("duplicate stream name 'a'"));
}

#[test]
fn test_graph_rejects_unknown_edge() {
    let err = StreamGraph::new(
        vec![stream("a", "/a")],
        vec![ParentEdge::new("a", "b", no_context)],
    )
    .unwrap_err();
    assert!(err.to_string().contains("unknown stream 'b'"));
}

#[test]
fn test_graph_rejects_two_parents() {
    let err = StreamGraph::new(
        vec![stream("a", "/a"), stream("b", "/b"), stream("c", "/c/{x}")],
        vec![
            ParentEdge::new("a", "c", no_context),
            ParentEdge::new("b", "c", no_context),
        ],
    )
    .unwrap_err();
    assert!(err.to_string().contains("more than one parent"));
}

#[test]
fn test_graph_rejects_cycle() {
    let err = StreamGraph::new(
        vec![stream("a", "/a/{x}"), stream("b", "/b/{y}")],
        vec![
            ParentEdge::new("a", "b", no_context),
            ParentEdge::new("b", "a", no_context),
        ],
    )
    .unwrap_err();
    assert!(err.to_string().contains("cycle"));
}

#[test]
fn test_graph_rejects_root_with_path_variables() {
    let err = StreamGraph::new(vec![stream("docs", "/v1/categories/{category_slug}/docs")], vec![])
        .unwrap_err();
    assert!(matches!(err, Error::InvalidStreamGraph { .. }));
}
