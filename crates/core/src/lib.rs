//! Core types and traits for metatag
//!
//! This crate defines the foundational types used throughout the system:
//! - TagRecord: a tag and note attached to a document
//! - Table model: ColumnDefinition, Column, Row, TableSchema, RowStream
//! - Table: the keyed storage collaborator trait
//! - StorageError: errors raised by table backends
//! - TaggerConfig: service configuration loaded from `metatag.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod record;
pub mod table;

pub use config::{ConfigError, TaggerConfig, CONFIG_FILE_NAME};
pub use error::{StorageError, StorageResult};
pub use record::{
    TagRecord, DEFAULT_TABLE_NAME, DOC_COLUMN, INDEX_COLUMN, NOTE_COLUMN, TAG_COLUMN,
};
pub use table::{Column, ColumnDefinition, ColumnType, Row, RowStream, Table, TableSchema};
