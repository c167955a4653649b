//! Error types for command execution.
//!
//! All errors from the tagging entry points are represented by the [`Error`]
//! enum. These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Terminal**: Every error ends the invocation that raised it; nothing is retried

use metatag_core::StorageError;
use serde::{Deserialize, Serialize};

/// Tagging service errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Caller | `InvalidArgumentCount`, `UnknownOperation`, `UnknownQuery` | Bad invocation |
/// | Lifecycle | `NotInitialized`, `Initialization` | Setup missing or failed |
/// | Constraint | `DuplicateRecord` | Composite-key collision on insert |
/// | System | `Storage`, `ScanTimeout`, `Serialization`, `Internal` | Infrastructure errors |
///
/// # Example
///
/// ```ignore
/// use metatag_executor::{Error, Tagger};
///
/// match tagger.invoke("create", &args) {
///     Ok(id) => { /* handle success */ }
///     Err(Error::InvalidArgumentCount { expected, actual, .. }) => {
///         println!("expected {} arguments, got {}", expected, actual);
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Caller Errors ====================
    /// Wrong number of positional arguments
    #[error("incorrect number of arguments for {operation}: expected {expected}, got {actual}")]
    InvalidArgumentCount {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// Write path called with an unrecognized operation name
    #[error("unknown operation: {name}")]
    UnknownOperation { name: String },

    /// Read path called with an unrecognized query name
    #[error("unknown query: expected 'query', found '{name}'")]
    UnknownQuery { name: String },

    // ==================== Lifecycle Errors ====================
    /// Operation attempted before `init`
    #[error("service not initialized")]
    NotInitialized,

    /// Schema creation failed during `init`
    #[error("initialization failed: {reason}")]
    Initialization { reason: String },

    // ==================== Constraint Errors ====================
    /// The storage refused the insert because the composite key exists
    #[error("record already exists: id={id} document={document} tag={tag}")]
    DuplicateRecord {
        id: String,
        document: String,
        tag: String,
    },

    // ==================== System Errors ====================
    /// Any other failure reported by the table backend
    #[error("storage error: {reason}")]
    Storage { reason: String },

    /// Draining a query's rows exceeded the configured bound
    #[error("row scan timed out after {timeout_ms}ms")]
    ScanTimeout { timeout_ms: u64 },

    /// Serialization error
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::ScanTimeout(timeout) => Error::ScanTimeout {
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            },
            other => Error::Storage {
                reason: other.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_scan_timeout_conversion() {
        let err: Error = StorageError::ScanTimeout(Duration::from_millis(1500)).into();
        assert_eq!(err, Error::ScanTimeout { timeout_ms: 1500 });
    }

    #[test]
    fn test_storage_conversion_keeps_message() {
        let err: Error = StorageError::TableNotFound("MetaTable".to_string()).into();
        match err {
            Error::Storage { reason } => assert!(reason.contains("MetaTable")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_error_json_roundtrip() {
        let err = Error::InvalidArgumentCount {
            operation: "create".to_string(),
            expected: 3,
            actual: 2,
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: Error = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::NotInitialized.to_string(), "service not initialized");
        let err = Error::UnknownQuery {
            name: "list".to_string(),
        };
        assert!(err.to_string().contains("'list'"));
    }
}
