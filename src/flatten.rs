//! Hierarchy flattening seam
//!
//! Inheritance resolution happens upstream of SDL emission: every class is
//! expected to carry its final, ordered property list with inherited
//! properties already merged in. The [`HierarchyFlattener`] trait is the
//! seam through which that collaborator is consumed; [`PreFlattened`] is the
//! default for graphs that arrive already normalized.

use crate::error::Result;
use crate::index::GraphIndex;

/// Normalizes every class's property list before emission
pub trait HierarchyFlattener {
    /// Merge inherited property specs onto each class in the index
    fn flatten(&self, index: &mut GraphIndex) -> Result<()>;
}

/// Pass-through flattener for graphs whose property lists already include
/// inherited properties
#[derive(Debug, Clone, Copy, Default)]
pub struct PreFlattened;

impl HierarchyFlattener for PreFlattened {
    fn flatten(&self, _index: &mut GraphIndex) -> Result<()> {
        Ok(())
    }
}
