//! Error types for configuration handling.

use thiserror::Error;

/// Error type for loading and checking a generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON or has a wrong shape.
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An option holds a value the generator cannot use.
    #[error("invalid value for option '{option}': {message}")]
    InvalidValue {
        /// Option key, in its serialized spelling.
        option: String,
        /// Why the value was rejected.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid value error.
    pub fn invalid_value(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            option: option.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
