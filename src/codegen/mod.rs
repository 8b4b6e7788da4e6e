//! SDL Generation
//!
//! Walks outward from a start class and emits GraphQL SDL text: one `type`
//! block per reachable class, one `enum` block per reachable enumeration.
//!
//! Architecture:
//! - `GraphIndex`: uid keyed lookup tables, built once per call
//! - `Emitter`: per-call emission state (memo tables doubling as the
//!   visited set for cycle breaking)
//!
//! Each call owns its emitter exclusively; concurrent calls over the same
//! graph are independent.

mod graphql;

use tracing::debug;

use crate::error::Result;
use crate::flatten::{HierarchyFlattener, PreFlattened};
use crate::index::GraphIndex;
use crate::node::Node;

/// Options for SDL generation.
///
/// Currently carries only reserved flags; present in the call signature so
/// callers do not change when options gain meaning.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Reserved: emit interface based inheritance instead of relying on
    /// pre-flattened property lists. Ignored for now.
    pub use_interfaces: bool,
}

/// Generate SDL for `start_class_uid` and everything it transitively
/// references.
///
/// The graph is expected to arrive with inheritance already flattened; use
/// [`generate_with_flattener`] to plug in a flattening step.
///
/// Fails with [`crate::SchemaError::ClassNotFound`] if the start class is
/// absent. Dangling references inside the closure surface as typed lookup
/// errors; graph integrity is otherwise a caller precondition.
pub fn generate(graph: &[Node], start_class_uid: &str, options: &GenerateOptions) -> Result<String> {
    generate_with_flattener(graph, start_class_uid, options, &PreFlattened)
}

/// Generate SDL, normalizing property lists through `flattener` first
pub fn generate_with_flattener(
    graph: &[Node],
    start_class_uid: &str,
    options: &GenerateOptions,
    flattener: &dyn HierarchyFlattener,
) -> Result<String> {
    // Reserved until interface emission lands
    let _ = options.use_interfaces;

    let mut index = GraphIndex::from_nodes(graph);
    debug!(
        classes = index.class_count(),
        properties = index.property_count(),
        "indexed graph"
    );

    flattener.flatten(&mut index)?;

    let start = index.class(start_class_uid)?;
    let mut emitter = graphql::Emitter::new();
    emitter.emit_class(&index, start)?;

    debug!(
        types = emitter.type_count(),
        enums = emitter.enum_count(),
        "emitted declaration closure"
    );
    Ok(emitter.finish())
}
