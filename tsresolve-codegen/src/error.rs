//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] tsresolve_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] tsresolve_schema::SchemaError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] tsresolve_core::ConfigError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },

    /// A type referenced by the resolved graph is missing from it.
    #[error("unknown type '{type_name}' referenced by '{referenced_by}'")]
    UnknownType {
        /// Type name.
        type_name: String,
        /// Referencing type or field coordinate.
        referenced_by: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates an unknown type error.
    pub fn unknown_type(type_name: impl Into<String>, referenced_by: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
            referenced_by: referenced_by.into(),
        }
    }
}
