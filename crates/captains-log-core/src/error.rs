//! Error types for Captain's Log core operations.
//!
//! `LogError` is the umbrella type returned by store operations. The smaller
//! error types below are exposed on their own so callers can match on a
//! single failure family without going through the umbrella enum.

use thiserror::Error;

/// Result type alias for Captain's Log operations.
pub type Result<T> = std::result::Result<T, LogError>;

/// Core error type for Captain's Log operations.
#[derive(Debug, Error)]
pub enum LogError {
    /// Key generation, key file parsing or encryption failure
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Stored ciphertext could not be read under the current key.
    ///
    /// Store reads never return this; they substitute
    /// `DECRYPTION_FAILED_CONTENT` instead. It exists for callers that use
    /// `crypto::decrypt` directly and want to propagate the failure with `?`.
    #[error(transparent)]
    Decryption(#[from] DecryptionError),

    /// Caller-side validation failure (never raised by the store itself)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unparseable stardate string
    #[error(transparent)]
    Stardate(#[from] StardateError),

    /// Storage backend error (schema mismatch, invalid stored values)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl LogError {
    /// Whether this error comes from the persistence layer.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            LogError::Storage(_) | LogError::Sqlite { .. } | LogError::Io { .. }
        )
    }
}

/// Ciphertext unreadable under the current at-rest key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecryptionError {
    /// Stored text is not valid base64
    #[error("Ciphertext is not valid base64: {0}")]
    Encoding(String),

    /// Payload is truncated or not an age message
    #[error("Ciphertext is malformed: {0}")]
    Malformed(String),

    /// Payload was produced under a different key
    #[error("Ciphertext was not encrypted with the current key")]
    WrongKey,

    /// Decrypted bytes are not UTF-8 text
    #[error("Decrypted content is not valid UTF-8")]
    NotUtf8,
}

/// Draft rejected by caller-side validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Content cannot be empty")]
    EmptyContent,

    #[error("Priority must be between 1 and 5 (got {0})")]
    PriorityOutOfRange(i64),

    #[error("Unknown classification: {0}")]
    UnknownClassification(String),
}

/// A display date that does not decode to a real timestamp.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StardateError {
    #[error("Stardate {input:?} must have 3 to 5 dot-separated fields (found {found})")]
    FieldCount { input: String, found: usize },

    #[error("Stardate {input:?} has a non-numeric {field} field")]
    InvalidField { input: String, field: &'static str },

    #[error("Stardate {input:?} is not a valid calendar date and time")]
    OutOfRange { input: String },
}
