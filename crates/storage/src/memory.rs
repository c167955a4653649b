//! MemoryTable: in-process table backend with BTreeMap and RwLock
//!
//! This module implements the [`Table`] trait using:
//! - `HashMap<String, TableData>` for the set of named tables
//! - `BTreeMap<Vec<Column>, Row>` per table, keyed by the composite key
//! - `parking_lot::RwLock` for thread-safe access
//!
//! # Design Notes
//!
//! - **Uniqueness on insert**: a row whose key columns match an existing row
//!   is refused with `Ok(false)` and nothing is written
//! - **Scans are snapshots**: matching rows are collected under the read lock
//!   and pushed into the stream before the lock is released, then the
//!   producer side is dropped so the stream closes
//! - **Key order delivery**: rows arrive in composite-key order

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use tracing::debug;

use metatag_core::{
    Column, ColumnDefinition, Row, RowStream, StorageError, StorageResult, Table, TableSchema,
};

#[derive(Debug)]
struct TableData {
    schema: TableSchema,
    rows: BTreeMap<Vec<Column>, Row>,
}

/// In-memory table backend
///
/// Thread-safe through `parking_lot::RwLock`. All tables live for the
/// lifetime of the `MemoryTable`.
#[derive(Debug, Default)]
pub struct MemoryTable {
    tables: RwLock<HashMap<String, TableData>>,
}

impl MemoryTable {
    /// Create an empty backend with no tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows stored in `name`, or `None` if the table does not exist
    pub fn row_count(&self, name: &str) -> Option<usize> {
        self.tables.read().get(name).map(|t| t.rows.len())
    }
}

impl Table for MemoryTable {
    fn create_table(&self, name: &str, columns: Vec<ColumnDefinition>) -> StorageResult<()> {
        let schema = TableSchema::new(name, columns)?;
        let mut tables = self.tables.write();
        if tables.contains_key(name) {
            return Err(StorageError::TableExists(name.to_string()));
        }
        debug!(target: "metatag::storage", table = name, columns = schema.columns().len(), "Table created");
        tables.insert(
            name.to_string(),
            TableData {
                schema,
                rows: BTreeMap::new(),
            },
        );
        Ok(())
    }

    fn insert_row(&self, name: &str, row: Row) -> StorageResult<bool> {
        let mut tables = self.tables.write();
        let table = tables
            .get_mut(name)
            .ok_or_else(|| StorageError::TableNotFound(name.to_string()))?;
        table.schema.check_row(&row)?;

        let key = table.schema.key_of(&row);
        if table.rows.contains_key(&key) {
            debug!(target: "metatag::storage", table = name, "Insert refused, key exists");
            return Ok(false);
        }
        table.rows.insert(key, row);
        Ok(true)
    }

    fn get_rows(&self, name: &str, filter: &[(&str, Column)]) -> StorageResult<RowStream> {
        let tables = self.tables.read();
        let table = tables
            .get(name)
            .ok_or_else(|| StorageError::TableNotFound(name.to_string()))?;

        let mut constraints = Vec::with_capacity(filter.len());
        for (column, value) in filter {
            let pos = table
                .schema
                .position(column)
                .filter(|&p| table.schema.columns()[p].key)
                .ok_or_else(|| StorageError::InvalidFilter {
                    table: name.to_string(),
                    reason: format!("'{}' is not a key column", column),
                })?;
            constraints.push((pos, value));
        }

        let (tx, stream) = RowStream::channel();
        let mut matched = 0usize;
        for row in table.rows.values() {
            if constraints
                .iter()
                .all(|(pos, value)| row.columns[*pos] == **value)
            {
                // The receiver is held by `stream`, which outlives this loop.
                let _ = tx.send(row.clone());
                matched += 1;
            }
        }
        debug!(target: "metatag::storage", table = name, matched, "Scan complete");
        Ok(stream)
    }

    fn table_exists(&self, name: &str) -> bool {
        self.tables.read().contains_key(name)
    }
}
