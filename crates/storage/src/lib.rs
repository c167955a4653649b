//! Storage layer for metatag
//!
//! This crate implements the table collaborator:
//! - MemoryTable: BTreeMap-based keyed rows behind a RwLock
//! - Composite-key uniqueness enforced on insert
//! - Key-column scans delivered as a closed [`RowStream`](metatag_core::RowStream)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;

pub use memory::MemoryTable;
