//! Error types for schema ingestion

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur while ingesting a schema tree
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The serialized schema document could not be parsed
    #[error("malformed schema document: {0}")]
    Parse(#[from] serde_json::Error),
}
