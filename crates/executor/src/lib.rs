//! # Metatag Executor
//!
//! The public API for the metatag tagging service.
//!
//! This is the only crate users need to import. It provides:
//! - [`Tagger`] - The service façade: `init`, `invoke("create", ..)`, `query("query", ..)`
//! - [`Command`]/[`Output`] - Typed command interface
//! - [`TagStore`] - Record schema and persistence over a [`Table`] backend
//! - [`IdGenerator`] - Record id generation
//!
//! ## Quick Start
//!
//! ```text
//! use metatag_executor::Tagger;
//!
//! let tagger = Tagger::in_memory();
//! tagger.init(&[])?;
//!
//! let id = tagger.invoke("create", &["doc1".into(), "urgent".into(), "needs review".into()])?;
//! let records = tagger.query("query", &["doc1".into()])?;
//! // records == br#"[{"id":"...","document":"doc1","tag":"urgent","note":"needs review"}]"#
//! ```
//!
//! ## Lifecycle
//!
//! A `Tagger` starts `Uninitialized`. `init` creates the record table and
//! moves it to `Ready`; every other call fails with
//! [`Error::NotInitialized`] until then.

#![warn(missing_docs)]

mod command;
mod error;
mod executor;
mod id;
mod output;
mod store;
mod tagger;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::{Command, CREATE, QUERY};
pub use error::Error;
pub use executor::Executor;
pub use id::{IdGenerator, RandomIdGenerator, SequenceIdGenerator, DEFAULT_ID_LENGTH, ID_ALPHABET};
pub use output::Output;
pub use store::TagStore;
pub use tagger::{Lifecycle, Tagger};

// Re-export core types so users don't need metatag-core directly
pub use metatag_core::{
    Column, ColumnDefinition, ColumnType, ConfigError, Row, RowStream, StorageError, Table,
    TagRecord, TaggerConfig, CONFIG_FILE_NAME, DEFAULT_TABLE_NAME,
};

// Re-export the bundled backend
pub use metatag_storage::MemoryTable;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
