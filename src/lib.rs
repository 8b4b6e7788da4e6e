//! GraphQL SDL generation from a class/property graph
//!
//! Takes a flat collection of graph nodes (structured types tagged `Class`,
//! reusable field definitions tagged `Property`, cross-referenced by uid)
//! and renders GraphQL SDL text: one `type` block per class reachable from a
//! requested start class and one `enum` block per reachable enumeration.
//!
//! ## Pipeline
//!
//! ```text
//! [Node] --index--> GraphIndex --flatten--> GraphIndex --emit--> SDL text
//!        uid lookup            inherited props           memoized closure walk
//! ```
//!
//! Memo tables double as the visited set, so shared and cyclically referenced
//! classes collapse to a single declaration and translation terminates on any
//! finite graph. Each call builds and owns its own state; concurrent calls
//! over the same read-only graph are independent.
//!
//! ## Example
//!
//! ```
//! use graph_sdl::{generate, parse_graph, GenerateOptions};
//!
//! # fn main() -> graph_sdl::Result<()> {
//! let graph = parse_graph(r#"[
//!   { "type": "Class", "uid": "c1", "label": "Book",
//!     "propertySpecs": [{ "ref": "p1", "primaryKey": true }] },
//!   { "type": "Property", "uid": "p1", "label": "id",
//!     "range": { "type": "Text" } }
//! ]"#)?;
//!
//! let sdl = generate(&graph, "c1", &GenerateOptions::default())?;
//! assert_eq!(sdl, "type Book {\n  id: ID\n}");
//! # Ok(())
//! # }
//! ```

pub mod codegen;
pub mod error;
pub mod flatten;
pub mod index;
pub mod node;

pub use codegen::{generate, generate_with_flattener, GenerateOptions};
pub use error::{Result, SchemaError};
pub use flatten::{HierarchyFlattener, PreFlattened};
pub use index::GraphIndex;
pub use node::{parse_graph, ClassNode, Node, NumberFormat, PropertyNode, PropertySpec, Range};
