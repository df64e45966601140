//! Error types for suite-core operations.
//!
//! Wraps primitive errors and adds the failures of the composition layer:
//! unknown algorithm names, invalid configuration and (de)serialization.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::registry::AlgorithmKind;
use thiserror::Error;

/// Errors that can occur while resolving or using a suite.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A primitive rejected its input.
    #[error(transparent)]
    Primitive(#[from] suite_primitives::Error),

    /// No algorithm of this kind is registered under the name.
    #[error("Unknown {kind} algorithm: {name}")]
    UnknownAlgorithm {
        /// Which registry table was searched.
        kind: AlgorithmKind,
        /// Name as supplied by the caller.
        name: String,
    },

    /// Configuration validation error.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for suite-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}
