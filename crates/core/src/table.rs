//! Table collaborator abstraction
//!
//! This module defines the [`Table`] trait and the row model it speaks.
//! A table is a named set of typed columns, some of which form the
//! composite key. Backends enforce key uniqueness on insert and serve
//! key-column scans as a [`RowStream`] that closes once every match has
//! been delivered.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, StorageResult};

/// Type of a column's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// UTF-8 string
    String,
    /// Signed 64-bit integer
    Int64,
    /// Boolean
    Bool,
    /// Opaque bytes
    Bytes,
}

/// Declaration of a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name, unique within the table
    pub name: String,
    /// Cell type
    pub column_type: ColumnType,
    /// Whether the column is part of the composite key
    pub key: bool,
}

impl ColumnDefinition {
    /// A string column that is part of the composite key
    pub fn string_key(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::String,
            key: true,
        }
    }

    /// A string column outside the key
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::String,
            key: false,
        }
    }
}

/// A typed cell value
///
/// Ordering is derived so key tuples can be used directly as `BTreeMap` keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Column {
    /// String cell
    String(String),
    /// Integer cell
    Int64(i64),
    /// Boolean cell
    Bool(bool),
    /// Bytes cell
    Bytes(Vec<u8>),
}

impl Column {
    /// Cell type of this value
    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::String(_) => ColumnType::String,
            Column::Int64(_) => ColumnType::Int64,
            Column::Bool(_) => ColumnType::Bool,
            Column::Bytes(_) => ColumnType::Bytes,
        }
    }
}

impl From<String> for Column {
    fn from(s: String) -> Self {
        Column::String(s)
    }
}

impl From<&str> for Column {
    fn from(s: &str) -> Self {
        Column::String(s.to_string())
    }
}

/// A row: one cell per column, in schema order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Cells in schema order
    pub columns: Vec<Column>,
}

impl Row {
    /// Build a row from cells in schema order
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}

/// Validated column layout of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    name: String,
    columns: Vec<ColumnDefinition>,
}

impl TableSchema {
    /// Validate a definition list for `name`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchema` if the list is empty, repeats a column name,
    /// or declares no key column.
    pub fn new(name: &str, columns: Vec<ColumnDefinition>) -> StorageResult<Self> {
        let invalid = |reason: String| StorageError::InvalidSchema {
            table: name.to_string(),
            reason,
        };

        if columns.is_empty() {
            return Err(invalid("no columns defined".to_string()));
        }
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == col.name) {
                return Err(invalid(format!("duplicate column '{}'", col.name)));
            }
        }
        if !columns.iter().any(|c| c.key) {
            return Err(invalid("no key column".to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            columns,
        })
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column definitions in declaration order
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Position of a column by name
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == column)
    }

    /// Check a row's arity and cell types against this schema.
    pub fn check_row(&self, row: &Row) -> StorageResult<()> {
        if row.columns.len() != self.columns.len() {
            return Err(StorageError::SchemaMismatch {
                table: self.name.clone(),
                reason: format!(
                    "expected {} columns, got {}",
                    self.columns.len(),
                    row.columns.len()
                ),
            });
        }
        for (def, cell) in self.columns.iter().zip(&row.columns) {
            if def.column_type != cell.column_type() {
                return Err(StorageError::SchemaMismatch {
                    table: self.name.clone(),
                    reason: format!(
                        "column '{}' expects {:?}, got {:?}",
                        def.name,
                        def.column_type,
                        cell.column_type()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Extract the composite key of a row, in schema order.
    pub fn key_of(&self, row: &Row) -> Vec<Column> {
        self.columns
            .iter()
            .zip(&row.columns)
            .filter(|(def, _)| def.key)
            .map(|(_, cell)| cell.clone())
            .collect()
    }
}

/// Rows delivered by a scan, terminated by the producer closing its end
#[derive(Debug)]
pub struct RowStream {
    rx: Receiver<Row>,
}

impl RowStream {
    /// Create a connected producer/stream pair.
    pub fn channel() -> (Sender<Row>, RowStream) {
        let (tx, rx) = mpsc::channel();
        (tx, RowStream { rx })
    }

    /// Collect every row until the producer closes the stream.
    ///
    /// Rows keep their arrival order. `timeout` bounds the whole drain.
    ///
    /// # Errors
    ///
    /// Returns `ScanTimeout` if the stream is still open when `timeout`
    /// elapses.
    pub fn drain(self, timeout: Duration) -> StorageResult<Vec<Row>> {
        let deadline = Instant::now() + timeout;
        let mut rows = Vec::new();
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(row) => rows.push(row),
                Err(RecvTimeoutError::Disconnected) => return Ok(rows),
                Err(RecvTimeoutError::Timeout) => return Err(StorageError::ScanTimeout(timeout)),
            }
        }
    }
}

/// Keyed row storage the tagging core runs against
///
/// Thread safety: all methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync).
pub trait Table: Send + Sync {
    /// Declare a new table.
    ///
    /// # Errors
    ///
    /// `TableExists` if the name is taken, `InvalidSchema` if the definition
    /// is unusable.
    fn create_table(&self, name: &str, columns: Vec<ColumnDefinition>) -> StorageResult<()>;

    /// Insert a row.
    ///
    /// Returns `Ok(false)` without writing anything when a row with the same
    /// composite key already exists.
    ///
    /// # Errors
    ///
    /// `TableNotFound`, or `SchemaMismatch` if the row does not fit.
    fn insert_row(&self, name: &str, row: Row) -> StorageResult<bool>;

    /// Scan rows whose named key columns equal the given values.
    ///
    /// Unconstrained key columns match anything.
    ///
    /// # Errors
    ///
    /// `TableNotFound`, or `InvalidFilter` if a filter names an unknown or
    /// non-key column.
    fn get_rows(&self, name: &str, filter: &[(&str, Column)]) -> StorageResult<RowStream>;

    /// Whether a table with this name has been created
    fn table_exists(&self, name: &str) -> bool;
}
