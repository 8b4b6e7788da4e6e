//! Error types for schema generation

use thiserror::Error;

/// Result type for schema generation operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Schema generation errors
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("class not found in graph: {uid}")]
    ClassNotFound { uid: String },

    #[error("property not found in graph: {uid}")]
    PropertyNotFound { uid: String },

    #[error("duplicate type label: {label} is claimed by more than one class")]
    DuplicateTypeLabel { label: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
