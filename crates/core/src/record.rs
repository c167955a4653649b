//! The tag record and its table layout

use serde::{Deserialize, Serialize};

use crate::table::{Column, ColumnDefinition, Row};

/// Default name of the table holding tag records
pub const DEFAULT_TABLE_NAME: &str = "MetaTable";

/// Key column holding the generated record id
pub const INDEX_COLUMN: &str = "Index";
/// Key column holding the document identifier
pub const DOC_COLUMN: &str = "Doc";
/// Key column holding the tag label
pub const TAG_COLUMN: &str = "Tag";
/// Payload column holding the free-text note
pub const NOTE_COLUMN: &str = "Note";

/// One tagging event: a tag and note attached to a document.
///
/// `(id, document, tag)` is the composite key. Records are immutable once
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagRecord {
    /// Generated identifier, unique within the store
    pub id: String,
    /// Identifier of the tagged document
    pub document: String,
    /// Tag label
    pub tag: String,
    /// Free-text note
    pub note: String,
}

impl TagRecord {
    /// Column layout of the record table: three string keys, one string payload.
    pub fn columns() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::string_key(INDEX_COLUMN),
            ColumnDefinition::string_key(DOC_COLUMN),
            ColumnDefinition::string_key(TAG_COLUMN),
            ColumnDefinition::string(NOTE_COLUMN),
        ]
    }

    /// Row form, in column order.
    pub fn to_row(&self) -> Row {
        Row::new(vec![
            Column::String(self.id.clone()),
            Column::String(self.document.clone()),
            Column::String(self.tag.clone()),
            Column::String(self.note.clone()),
        ])
    }

    /// Rebuild a record from a row.
    ///
    /// Returns `None` unless the row holds exactly four string cells.
    pub fn from_row(row: Row) -> Option<Self> {
        let mut cells = row.columns.into_iter().map(|c| match c {
            Column::String(s) => Some(s),
            _ => None,
        });
        let record = TagRecord {
            id: cells.next()??,
            document: cells.next()??,
            tag: cells.next()??,
            note: cells.next()??,
        };
        if cells.next().is_some() {
            return None;
        }
        Some(record)
    }
}
