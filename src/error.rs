//! Error types for jsonkv
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::value::Kind;

/// Result type alias using JsonKvError
pub type Result<T> = std::result::Result<T, JsonKvError>;

/// Unified error type for jsonkv operations
#[derive(Debug, Error)]
pub enum JsonKvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Failed to encode dataset: {0}")]
    Encode(String),

    // -------------------------------------------------------------------------
    // Operation Errors
    // -------------------------------------------------------------------------
    #[error("Type mismatch for `{key}`: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: Kind,
        found: Kind,
    },

    #[error("Type mismatch for `{key}` at index {index}: expected {expected}, found {found}")]
    ElementMismatch {
        key: String,
        index: usize,
        expected: Kind,
        found: Kind,
    },

    #[error("Index {index} out of range for `{key}` (len {len})")]
    IndexOutOfRange {
        key: String,
        index: usize,
        len: usize,
    },

    // -------------------------------------------------------------------------
    // Initialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to initialize store directory {}: {source}", .path.display())]
    Init {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl JsonKvError {
    /// Build a type mismatch for `key`, deriving the found kind from its current value.
    pub(crate) fn mismatch(
        key: impl Into<String>,
        expected: Kind,
        found: Option<&crate::value::Value>,
    ) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
            found: Kind::of(found),
        }
    }
}
