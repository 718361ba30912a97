//! Tests for schema module

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample_list() -> PropertiesList {
    PropertiesList::new()
        .property(Property::new("id", PropertyType::String))
        .property(Property::new("order", PropertyType::Integer))
        .property(Property::new("createdAt", PropertyType::DateTime))
}

#[test]
fn test_scalar_types() {
    assert_eq!(
        PropertyType::String.to_json_schema(true),
        json!({"type": ["string", "null"]})
    );
    assert_eq!(
        PropertyType::Integer.to_json_schema(false),
        json!({"type": ["integer"]})
    );
    assert_eq!(
        PropertyType::Boolean.to_json_schema(true),
        json!({"type": ["boolean", "null"]})
    );
    assert_eq!(
        PropertyType::DateTime.to_json_schema(true),
        json!({"type": ["string", "null"], "format": "date-time"})
    );
}

#[test]
fn test_array_type() {
    let schema = PropertyType::array(PropertyType::String).to_json_schema(true);
    assert_eq!(
        schema,
        json!({"type": ["array", "null"], "items": {"type": ["string"]}})
    );

    let schema = PropertyType::array(PropertyType::any_object()).to_json_schema(true);
    assert_eq!(
        schema,
        json!({"type": ["array", "null"], "items": {"type": ["object"], "properties": {}}})
    );
}

#[test]
fn test_nested_object_type() {
    let schema = PropertyType::object(
        PropertiesList::new()
            .property(Property::new("recordCount", PropertyType::Integer))
            .property(Property::new("publishPending", PropertyType::Boolean)),
    )
    .to_json_schema(true);

    assert_eq!(
        schema,
        json!({
            "type": ["object", "null"],
            "properties": {
                "recordCount": {"type": ["integer", "null"]},
                "publishPending": {"type": ["boolean", "null"]}
            }
        })
    );
}

#[test]
fn test_properties_list_schema() {
    assert_eq!(
        sample_list().to_json_schema(),
        json!({
            "type": "object",
            "properties": {
                "id": {"type": ["string", "null"]},
                "order": {"type": ["integer", "null"]},
                "createdAt": {"type": ["string", "null"], "format": "date-time"}
            }
        })
    );
}

#[test]
fn test_required_secret_property() {
    let list = PropertiesList::new().property(
        Property::new("api_key", PropertyType::String)
            .required()
            .secret()
            .description("API Key for ReadMe.com"),
    );

    assert_eq!(
        list.to_json_schema(),
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

#[test]
fn test_properties_list_lookup() {
    let list = sample_list();
    assert_eq!(list.len(), 3);
    assert!(!list.is_empty());
    assert!(list.contains("order"));
    assert!(!list.contains("hidden"));
    assert_eq!(
        list.get("createdAt").map(|p| &p.property_type),
        Some(&PropertyType::DateTime)
    );
    assert_eq!(list.names().collect::<Vec<_>>(), vec!["id", "order", "createdAt"]);
}

#[test]
fn test_conform_record_drops_undeclared() {
    let record = json!({"id": "a", "order": 1, "isAPI": true, "extra": {"x": 1}})
        .as_object()
        .cloned()
        .unwrap();

    let (conformed, removed) = conform_record(&sample_list(), record);

    assert_eq!(
        serde_json::Value::Object(conformed),
        json!({"id": "a", "order": 1})
    );
    assert_eq!(removed, vec!["extra".to_string(), "isAPI".to_string()]);
}

#[test]
fn test_conform_record_keeps_declared_values_as_is() {
    let record = json!({"id": null, "order": "not-a-number"})
        .as_object()
        .cloned()
        .unwrap();

    let (conformed, removed) = conform_record(&sample_list(), record.clone());
    assert_eq!(conformed, record);
    assert!(removed.is_empty());
}
