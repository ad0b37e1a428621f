//! Error types for the attribute model.

use thiserror::Error;

/// Attribute model errors.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A schema tried to declare an attribute under a reserved key.
    #[error("attribute name {0:?} is reserved for the overlay map")]
    ReservedAttribute(String),

    /// Persisted attributes were not a JSON object, or the overlay map was malformed.
    #[error("invalid attributes: {0}")]
    InvalidAttributes(String),

    /// Block metadata could not be understood.
    #[error("invalid block metadata: {0}")]
    InvalidMetadata(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
