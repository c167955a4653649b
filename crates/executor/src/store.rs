//! Tag record store.
//!
//! [`TagStore`] owns the record table's schema and is the only writer of
//! records. It talks to the backend exclusively through the
//! [`Table`] trait.
//!
//! The composite key is `(Index, Doc, Tag)`. Because `Index` is freshly
//! generated for every create, two creates with the same document and tag
//! both succeed. `DuplicateRecord` is raised only when the generator repeats
//! an id for the same document and tag, which a random 32-character id makes
//! practically impossible; it is not an "already tagged" guard.

use std::sync::Arc;
use std::time::Duration;

use metatag_core::{Column, ConfigError, Table, TagRecord, TaggerConfig, DOC_COLUMN};
use tracing::debug;

use crate::id::{IdGenerator, RandomIdGenerator};
use crate::{Error, Result};

/// Schema owner and sole writer of tag records.
pub struct TagStore {
    table: Arc<dyn Table>,
    ids: Box<dyn IdGenerator>,
    table_name: String,
    scan_timeout: Duration,
}

impl TagStore {
    /// Store over `table` using the default configuration.
    pub fn new(table: Arc<dyn Table>) -> Self {
        Self::from_valid_config(table, &TaggerConfig::default())
    }

    /// Store over `table` using `config` for the table name, id length and
    /// scan bound.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `config` fails validation.
    pub fn with_config(
        table: Arc<dyn Table>,
        config: &TaggerConfig,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(table, config))
    }

    fn from_valid_config(table: Arc<dyn Table>, config: &TaggerConfig) -> Self {
        Self {
            table,
            ids: Box::new(RandomIdGenerator::new(config.id_length)),
            table_name: config.table_name.clone(),
            scan_timeout: config.scan_timeout(),
        }
    }

    /// Replace the id generator.
    pub fn with_id_generator(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Name of the record table
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Declare the record table: `Index`, `Doc`, `Tag` as string keys and
    /// `Note` as a string payload.
    ///
    /// # Errors
    ///
    /// Returns `Initialization` if the backend refuses the table, including
    /// when it already exists.
    pub fn initialize_schema(&self) -> Result<()> {
        self.table
            .create_table(&self.table_name, TagRecord::columns())
            .map_err(|e| Error::Initialization {
                reason: e.to_string(),
            })
    }

    /// Store a new record and return its generated id.
    ///
    /// # Errors
    ///
    /// `DuplicateRecord` if the backend reports the composite key already
    /// exists; `Storage` for any other backend failure.
    pub fn create(&self, document: String, tag: String, note: String) -> Result<String> {
        let record = TagRecord {
            id: self.ids.generate(),
            document,
            tag,
            note,
        };

        let inserted = self.table.insert_row(&self.table_name, record.to_row())?;
        if !inserted {
            return Err(Error::DuplicateRecord {
                id: record.id,
                document: record.document,
                tag: record.tag,
            });
        }

        debug!(target: "metatag::store", id = %record.id, document = %record.document, tag = %record.tag, "Record created");
        Ok(record.id)
    }

    /// All records tagged on `document`, in the order the backend delivers
    /// them. No matches is an empty list.
    ///
    /// # Errors
    ///
    /// `Storage` if the scan cannot be opened, `ScanTimeout` if the row
    /// stream is not closed within the configured bound, `Internal` if a row
    /// does not have the record shape.
    pub fn query(&self, document: &str) -> Result<Vec<TagRecord>> {
        let stream = self
            .table
            .get_rows(&self.table_name, &[(DOC_COLUMN, Column::from(document))])?;
        let rows = stream.drain(self.scan_timeout)?;

        let records = rows
            .into_iter()
            .map(|row| {
                TagRecord::from_row(row).ok_or_else(|| Error::Internal {
                    reason: format!("malformed row in table {}", self.table_name),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(target: "metatag::store", document, count = records.len(), "Records queried");
        Ok(records)
    }
}
