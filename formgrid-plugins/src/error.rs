//! Error types for the plugin registry

use thiserror::Error;

/// Result type for plugin registry operations
pub type Result<T> = std::result::Result<T, PluginError>;

/// Errors that can occur when mutating the plugin registry.
///
/// Mutation problems surface as explicit errors rather than silent no-ops so
/// operators can detect configuration drift between registration sources.
#[derive(Debug, Error)]
pub enum PluginError {
    /// A plugin with this id is already registered
    #[error("plugin already registered: {id}")]
    DuplicateId { id: String },

    /// No registered plugin carries this id
    #[error("plugin not registered: {id}")]
    UnknownPlugin { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PluginError::DuplicateId {
            id: "rating-stars".into(),
        };
        assert_eq!(err.to_string(), "plugin already registered: rating-stars");

        let err = PluginError::UnknownPlugin {
            id: "missing".into(),
        };
        assert_eq!(err.to_string(), "plugin not registered: missing");
    }
}
