//! Schema types

use serde_json::{json, Map, Value};

/// Type of a single property
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyType {
    String,
    Integer,
    Number,
    Boolean,
    /// ISO 8601 timestamp carried as a string
    DateTime,
    /// Homogeneous array of the given item type
    Array(Box<PropertyType>),
    /// Nested object; an empty list accepts any object
    Object(PropertiesList),
}

impl PropertyType {
    /// Array of the given item type
    pub fn array(item: PropertyType) -> Self {
        PropertyType::Array(Box::new(item))
    }

    /// Object with the given properties
    pub fn object(properties: PropertiesList) -> Self {
        PropertyType::Object(properties)
    }

    /// Object with no declared properties
    pub fn any_object() -> Self {
        PropertyType::Object(PropertiesList::new())
    }

    /// Primary JSON Schema type name
    pub fn json_type(&self) -> &'static str {
        match self {
            PropertyType::String | PropertyType::DateTime => "string",
            PropertyType::Integer => "integer",
            PropertyType::Number => "number",
            PropertyType::Boolean => "boolean",
            PropertyType::Array(_) => "array",
            PropertyType::Object(_) => "object",
        }
    }

    /// Render as a JSON Schema fragment
    pub fn to_json_schema(&self, nullable: bool) -> Value {
        let types = if nullable {
            json!([self.json_type(), "null"])
        } else {
            json!([self.json_type()])
        };

        let mut schema = Map::new();
        schema.insert("type".to_string(), types);

        match self {
            PropertyType::DateTime => {
                schema.insert("format".to_string(), json!("date-time"));
            }
            PropertyType::Array(item) => {
                schema.insert("items".to_string(), item.to_json_schema(false));
            }
            PropertyType::Object(properties) => {
                schema.insert("properties".to_string(), properties.properties_json());
            }
            _ => {}
        }

        Value::Object(schema)
    }
}

/// A named, typed property
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub property_type: PropertyType,
    pub required: bool,
    pub secret: bool,
    pub description: Option<String>,
}

impl Property {
    /// Optional, nullable property
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
            required: false,
            secret: false,
            description: None,
        }
    }

    /// Mark as required (and therefore not nullable)
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark as secret (sensitive value, write-only)
    #[must_use]
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// Set a description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Render as a JSON Schema fragment
    pub fn to_json_schema(&self) -> Value {
        let mut schema = self.property_type.to_json_schema(!self.required);
        if let Value::Object(map) = &mut schema {
            if self.secret {
                map.insert("secret".to_string(), json!(true));
                map.insert("writeOnly".to_string(), json!(true));
            }
            if let Some(description) = &self.description {
                map.insert("description".to_string(), json!(description));
            }
        }
        schema
    }
}

/// Ordered list of properties forming an object schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertiesList {
    properties: Vec<Property>,
}

impl PropertiesList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property
    #[must_use]
    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Look up a property by name
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Whether a property with this name is declared
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Property names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.name.as_str())
    }

    /// Properties in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn properties_json(&self) -> Value {
        let map: Map<String, Value> = self
            .properties
            .iter()
            .map(|p| (p.name.clone(), p.to_json_schema()))
            .collect();
        Value::Object(map)
    }

    /// Render as a top-level object JSON Schema
    pub fn to_json_schema(&self) -> Value {
        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), self.properties_json());

        let required: Vec<&str> = self
            .properties
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect();
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }

        Value::Object(schema)
    }
}
