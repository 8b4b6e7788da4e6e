//! GraphQL SDL Emitter
//!
//! Renders `type` and `enum` declaration blocks from indexed graph nodes.
//!
//! Key constraints:
//! - Memo tables are keyed by emitted label and double as the visited set:
//!   a placeholder is stored *before* recursing into a type's properties, so
//!   cycles (a class referencing itself directly or through another class)
//!   short-circuit instead of recursing forever.
//! - Emission order is insertion order, and every label is emitted at most
//!   once no matter how often it is referenced.

use indexmap::IndexMap;
use tracing::trace;

use crate::error::{Result, SchemaError};
use crate::index::GraphIndex;
use crate::node::{ClassNode, PropertyNode, PropertySpec, Range};

const INDENT: &str = "  ";

/// Emission state of one type label
#[derive(Debug)]
enum Emitted {
    /// Placeholder stored before descending into properties; a cycle back to
    /// this label stops here
    InProgress,
    /// Fully rendered declaration block
    Complete(String),
}

/// A claimed type label: which graph entity claimed it, and how far its
/// declaration has gotten.
///
/// The origin lets re-visits of the same entity (memoization, cycles) pass
/// silently while a second distinct entity claiming the same label surfaces
/// [`SchemaError::DuplicateTypeLabel`].
#[derive(Debug)]
struct TypeSlot {
    origin: String,
    state: Emitted,
}

/// Per-call emission state
pub(super) struct Emitter {
    types: IndexMap<String, TypeSlot>,
    enums: IndexMap<String, String>,
}

impl Emitter {
    pub(super) fn new() -> Self {
        Emitter {
            types: IndexMap::new(),
            enums: IndexMap::new(),
        }
    }

    /// Emit the `type` block for a class and, transitively, everything it
    /// references
    pub(super) fn emit_class(&mut self, index: &GraphIndex, class: &ClassNode) -> Result<()> {
        self.emit_type(index, &class.uid, &class.label, &class.property_specs)
    }

    fn emit_type(
        &mut self,
        index: &GraphIndex,
        origin: &str,
        label: &str,
        specs: &[PropertySpec],
    ) -> Result<()> {
        if let Some(slot) = self.types.get(label) {
            if slot.origin != origin {
                return Err(SchemaError::DuplicateTypeLabel {
                    label: label.to_string(),
                });
            }
            // Already emitted, or currently being emitted further up the
            // stack; either way there is nothing left to do here.
            return Ok(());
        }

        self.types.insert(
            label.to_string(),
            TypeSlot {
                origin: origin.to_string(),
                state: Emitted::InProgress,
            },
        );

        let mut block = format!("type {} {{\n", label);
        for spec in specs {
            let property = index.property(&spec.ref_uid)?;
            let token = self.field_type(index, spec, property)?;
            block.push_str(&format!("{}{}: {}\n", INDENT, property.label, token));
        }
        block.push('}');

        trace!(label, "emitted type");
        if let Some(slot) = self.types.get_mut(label) {
            slot.state = Emitted::Complete(block);
        }
        Ok(())
    }

    /// Resolve the full field type token for one property spec
    fn field_type(
        &mut self,
        index: &GraphIndex,
        spec: &PropertySpec,
        property: &PropertyNode,
    ) -> Result<String> {
        // Primary keys are always the ID scalar, whatever the range says
        let mut token = if spec.primary_key {
            "ID".to_string()
        } else {
            self.range_token(index, property)?
        };

        // List wrapping happens before the non-null suffix, so only the list
        // itself can be marked non-null
        if spec.array {
            token = format!("[{}]", token);
        }
        if spec.required {
            token.push('!');
        }
        Ok(token)
    }

    fn range_token(&mut self, index: &GraphIndex, property: &PropertyNode) -> Result<String> {
        match &property.range {
            Range::Boolean => Ok("Boolean".to_string()),
            Range::Number { format } => Ok(if format.is_integer() { "Int" } else { "Float" }.to_string()),
            Range::Enum { values } => Ok(self.emit_enum(&property.label, values)),
            Range::LinkedClass { ref_uid } => {
                let class = index.class(ref_uid)?;
                self.emit_type(index, &class.uid, &class.label, &class.property_specs)?;
                Ok(class.label.clone())
            }
            Range::NestedObject { property_specs } => {
                let name = to_pascal_case(&property.label);
                // Synthetic types have no class uid; key the claim to the
                // defining property instead
                let origin = format!("nested:{}", property.uid);
                self.emit_type(index, &origin, &name, property_specs)?;
                Ok(name)
            }
            Range::Text | Range::Other => Ok("String".to_string()),
        }
    }

    /// Emit an `enum` block once per label; returns the type name token
    fn emit_enum(&mut self, label: &str, values: &[String]) -> String {
        let name = to_pascal_case(label);
        if !self.enums.contains_key(&name) {
            let mut block = format!("enum {} {{\n", name);
            for value in values {
                block.push_str(&format!("{}{}\n", INDENT, value));
            }
            block.push('}');
            trace!(name = name.as_str(), "emitted enum");
            self.enums.insert(name.clone(), block);
        }
        name
    }

    pub(super) fn type_count(&self) -> usize {
        self.types.len()
    }

    pub(super) fn enum_count(&self) -> usize {
        self.enums.len()
    }

    /// Join all blocks: enums first, then types, each in emission order,
    /// separated by one blank line
    pub(super) fn finish(self) -> String {
        let blocks: Vec<String> = self
            .enums
            .into_values()
            .chain(self.types.into_values().filter_map(|slot| match slot.state {
                Emitted::Complete(text) => Some(text),
                Emitted::InProgress => None,
            }))
            .collect();
        blocks.join("\n\n")
    }
}

/// Convert a property label to PascalCase for synthetic type and enum names
fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' || c == ' ' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("rating"), "Rating");
        assert_eq!(to_pascal_case("postal_address"), "PostalAddress");
        assert_eq!(to_pascal_case("postal-address"), "PostalAddress");
        assert_eq!(to_pascal_case("Rating"), "Rating");
    }

    #[test]
    fn test_enum_emitted_once() {
        let mut emitter = Emitter::new();
        let values = vec!["GOOD".to_string(), "BAD".to_string()];

        assert_eq!(emitter.emit_enum("rating", &values), "Rating");
        assert_eq!(emitter.emit_enum("rating", &values), "Rating");
        assert_eq!(emitter.enum_count(), 1);
        assert_eq!(emitter.finish(), "enum Rating {\n  GOOD\n  BAD\n}");
    }

    #[test]
    fn test_empty_emitter_renders_nothing() {
        assert_eq!(Emitter::new().finish(), "");
    }
}
