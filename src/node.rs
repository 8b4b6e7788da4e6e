//! Graph node types and structures
//!
//! The input graph is a flat sequence of nodes, discriminated by a `type` tag:
//! `Class` nodes describe structured types with an ordered field list, and
//! `Property` nodes describe reusable field definitions. Nodes reference each
//! other by `uid`.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single entity in the input graph
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// A structured type with named, typed fields
    Class(ClassNode),
    /// A field definition, reusable across multiple classes
    Property(PropertyNode),
    /// Any other node type; tolerated in the input and skipped by indexing
    #[serde(other)]
    Other,
}

/// A structured type with an ordered list of property specs.
///
/// `property_specs` order is significant: it determines field declaration
/// order in the emitted SDL. The list is expected to already include
/// inherited properties (see [`crate::flatten::HierarchyFlattener`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassNode {
    /// Unique identifier within the graph
    pub uid: String,
    /// Schema-facing type name (e.g., "Book")
    pub label: String,
    /// Ordered field list
    #[serde(default)]
    pub property_specs: Vec<PropertySpec>,
}

/// How a class instantiates a property: which property, and with which
/// field-level modifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySpec {
    /// Uid of the [`PropertyNode`] this spec instantiates
    #[serde(rename = "ref")]
    pub ref_uid: String,
    /// Forces the field type to the `ID` scalar, whatever the range says
    #[serde(default)]
    pub primary_key: bool,
    /// Wraps the resolved type in list notation `[T]`
    #[serde(default)]
    pub array: bool,
    /// Appends the non-null suffix `!`
    #[serde(default)]
    pub required: bool,
}

/// A field definition with a value domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyNode {
    /// Unique identifier within the graph
    pub uid: String,
    /// Schema-facing field name (e.g., "title")
    pub label: String,
    /// Value domain of the property
    #[serde(default)]
    pub range: Range,
}

/// Value domain of a property.
///
/// A closed set of variants plus a catch-all: any range type this crate does
/// not recognize deserializes to [`Range::Other`] and maps to the `String`
/// scalar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Range {
    /// Boolean scalar
    Boolean,
    /// Numeric scalar, split into `Int` / `Float` by format
    Number {
        #[serde(default)]
        format: NumberFormat,
    },
    /// String scalar
    Text,
    /// Closed set of literal names, emitted as an `enum` declaration
    Enum { values: Vec<String> },
    /// Reference to another class node (a graph edge between types)
    LinkedClass {
        #[serde(rename = "ref")]
        ref_uid: String,
    },
    /// Inline, anonymous structured type defined directly within the
    /// property; named after the property's own label
    NestedObject {
        #[serde(rename = "propertySpecs")]
        property_specs: Vec<PropertySpec>,
    },
    /// Unrecognized range type; maps to the `String` scalar
    #[default]
    #[serde(other)]
    Other,
}

/// Numeric format of a [`Range::Number`].
///
/// Any format string other than the recognized integer formats (including a
/// missing format) is treated as floating point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum NumberFormat {
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    #[default]
    Float,
}

impl NumberFormat {
    /// Whether this format maps to the `Int` scalar
    pub fn is_integer(self) -> bool {
        !matches!(self, NumberFormat::Float)
    }
}

impl From<&str> for NumberFormat {
    fn from(s: &str) -> Self {
        match s {
            "Int" => NumberFormat::Int,
            "Int8" => NumberFormat::Int8,
            "Int16" => NumberFormat::Int16,
            "Int32" => NumberFormat::Int32,
            "Int64" => NumberFormat::Int64,
            _ => NumberFormat::Float,
        }
    }
}

impl<'de> Deserialize<'de> for NumberFormat {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(NumberFormat::from(s.as_str()))
    }
}

/// Parse a JSON graph document into a node list
pub fn parse_graph(json: &str) -> Result<Vec<Node>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_class_node() {
        let node: Node = serde_json::from_value(json!({
            "type": "Class",
            "uid": "c1",
            "label": "Book",
            "propertySpecs": [
                { "ref": "p1", "primaryKey": true },
                { "ref": "p2", "required": true }
            ]
        }))
        .unwrap();

        match node {
            Node::Class(class) => {
                assert_eq!(class.uid, "c1");
                assert_eq!(class.label, "Book");
                assert_eq!(class.property_specs.len(), 2);
                assert!(class.property_specs[0].primary_key);
                assert!(!class.property_specs[0].array);
                assert!(!class.property_specs[0].required);
                assert!(class.property_specs[1].required);
            }
            other => panic!("Expected Class, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_property_ranges() {
        let node: Node = serde_json::from_value(json!({
            "type": "Property",
            "uid": "p1",
            "label": "rating",
            "range": { "type": "Enum", "values": ["GOOD", "BAD"] }
        }))
        .unwrap();

        match node {
            Node::Property(property) => match property.range {
                Range::Enum { values } => assert_eq!(values, vec!["GOOD", "BAD"]),
                other => panic!("Expected Enum range, got {:?}", other),
            },
            other => panic!("Expected Property, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_node_type_is_tolerated() {
        let nodes: Vec<Node> =
            serde_json::from_value(json!([{ "type": "Ontology", "uid": "o1" }])).unwrap();
        assert!(matches!(nodes[0], Node::Other));
    }

    #[test]
    fn test_unrecognized_range_is_other() {
        let range: Range = serde_json::from_value(json!({ "type": "GeoCoordinates" })).unwrap();
        assert!(matches!(range, Range::Other));
    }

    #[test]
    fn test_number_format_mapping() {
        assert!(NumberFormat::from("Int32").is_integer());
        assert!(NumberFormat::from("Int").is_integer());
        assert!(!NumberFormat::from("Float").is_integer());
        // Unrecognized formats fall back to floating point
        assert!(!NumberFormat::from("Double").is_integer());

        let range: Range = serde_json::from_value(json!({ "type": "Number" })).unwrap();
        match range {
            Range::Number { format } => assert_eq!(format, NumberFormat::Float),
            other => panic!("Expected Number range, got {:?}", other),
        }
    }
}
