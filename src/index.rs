//! Graph indexing
//!
//! Builds uid keyed lookup tables for class and property nodes in a single
//! pass over the input collection. Graph integrity is a caller precondition:
//! a later node with a duplicate uid silently overwrites the earlier one.

use std::collections::HashMap;

use crate::error::{Result, SchemaError};
use crate::node::{ClassNode, Node, PropertyNode};

/// Uid keyed lookup tables over a node collection
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    classes: HashMap<String, ClassNode>,
    properties: HashMap<String, PropertyNode>,
}

impl GraphIndex {
    /// Index a node collection in a single pass
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let mut index = GraphIndex::default();
        for node in nodes {
            match node {
                Node::Class(class) => {
                    index.classes.insert(class.uid.clone(), class.clone());
                }
                Node::Property(property) => {
                    index
                        .properties
                        .insert(property.uid.clone(), property.clone());
                }
                Node::Other => {}
            }
        }
        index
    }

    /// Look up a class by uid
    pub fn class(&self, uid: &str) -> Result<&ClassNode> {
        self.classes
            .get(uid)
            .ok_or_else(|| SchemaError::ClassNotFound {
                uid: uid.to_string(),
            })
    }

    /// Look up a property by uid
    pub fn property(&self, uid: &str) -> Result<&PropertyNode> {
        self.properties
            .get(uid)
            .ok_or_else(|| SchemaError::PropertyNotFound {
                uid: uid.to_string(),
            })
    }

    /// Mutable iteration over all classes, for hierarchy flatteners that
    /// merge inherited property lists in place
    pub fn classes_mut(&mut self) -> impl Iterator<Item = &mut ClassNode> + '_ {
        self.classes.values_mut()
    }

    /// Number of indexed classes
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Number of indexed properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}
