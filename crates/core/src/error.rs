//! Error types for the table collaborator
//!
//! This module defines the errors a [`Table`](crate::Table) backend can raise.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for table operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Errors raised by a table backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// A table with this name has already been created
    #[error("Table already exists: {0}")]
    TableExists(String),

    /// No table with this name has been created
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// The column definitions passed to `create_table` are unusable
    #[error("Invalid schema for table {table}: {reason}")]
    InvalidSchema {
        /// Table being created
        table: String,
        /// What is wrong with the definition
        reason: String,
    },

    /// A row does not fit the table's column definitions
    #[error("Row does not match schema of table {table}: {reason}")]
    SchemaMismatch {
        /// Table being written
        table: String,
        /// Arity or type disagreement
        reason: String,
    },

    /// A scan filter names a column that is not a key column
    #[error("Invalid filter on table {table}: {reason}")]
    InvalidFilter {
        /// Table being scanned
        table: String,
        /// Offending column
        reason: String,
    },

    /// The row stream produced neither a row nor a close within the bound
    #[error("Row scan timed out after {0:?}")]
    ScanTimeout(Duration),

    /// I/O error in the backend (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
