/// Core error types for Chirp
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Chirp
#[derive(Error, Debug)]
pub enum CoreError {
    /// A client-supplied field violates a constraint
    #[error("invalid {field}: {message}")]
    Validation {
        /// Name of the offending field
        field: String,
        /// The constraint that was violated
        message: String,
    },

    /// The persisted collection exists but does not parse
    #[error("store corrupt: {0}")]
    StoreCorrupt(String),

    /// The backing resource could not be written
    #[error("store write failed: {0}")]
    StoreWrite(String),

    /// A record with the same key already exists
    #[error("duplicate entry: {0}")]
    Duplicate(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up
        entity: String,
        /// Identifier that missed
        id: String,
    },

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a validation error naming the offending field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a store-corrupt error
    pub fn store_corrupt(msg: impl Into<String>) -> Self {
        Self::StoreCorrupt(msg.into())
    }

    /// Create a store-write error
    pub fn store_write(msg: impl Into<String>) -> Self {
        Self::StoreWrite(msg.into())
    }

    /// Create a duplicate-entry error
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}
