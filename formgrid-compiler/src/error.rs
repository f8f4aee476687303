//! Error types for schema compilation.

use thiserror::Error;

/// Result type for compile operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Errors raised while compiling a schema into a grid configuration.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The schema document could not be ingested.
    #[error("schema error: {0}")]
    Schema(#[from] formgrid_schema::SchemaError),

    /// A field definition carried no usable identifier.
    ///
    /// Columns are keyed by identifier; a definition without one has no place
    /// to land in the output, so the whole compile pass stops.
    #[error("field definition \"{label}\" has no identifier to key its column by")]
    MissingFieldIdentifier {
        /// Display label of the offending definition. May itself be empty.
        label: String,
    },
}
