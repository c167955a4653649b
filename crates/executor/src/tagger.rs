//! Service entry points with an explicit lifecycle.
//!
//! The [`Tagger`] wraps an [`Executor`] and tracks whether the record table
//! has been set up. It exposes the three host-facing calls:
//!
//! - [`Tagger::init`]: create the record table (`Uninitialized` -> `Ready`)
//! - [`Tagger::invoke`]: the write path, recognizes `create`
//! - [`Tagger::query`]: the read path, recognizes `query`
//!
//! `init` is the only way to reach `Ready`, and it always creates the table.
//! A `Tagger` built over a backend that already holds the record table (for
//! example a persistent backend after a host restart) therefore cannot become
//! `Ready`: its `init` fails with `Initialization` and every other call keeps
//! returning `NotInitialized`.
//!
//! # Usage
//!
//! ```ignore
//! use metatag_executor::Tagger;
//!
//! let tagger = Tagger::in_memory();
//! tagger.init(&[])?;
//!
//! let id = tagger.invoke("create", &["doc1".into(), "urgent".into(), "needs review".into()])?;
//! let json = tagger.query("query", &["doc1".into()])?;
//! ```

use std::sync::Arc;

use metatag_core::{ConfigError, Table, TaggerConfig};
use metatag_storage::MemoryTable;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::command::expect_args;
use crate::store::TagStore;
use crate::{Command, Error, Executor, Output, Result};

/// Lifecycle of a [`Tagger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// `init` has not succeeded yet
    Uninitialized,
    /// The record table exists; create and query are accepted
    Ready,
}

/// The tagging service façade.
///
/// Holds no data of its own beyond the lifecycle flag; every record lives in
/// the table backend.
pub struct Tagger {
    executor: Executor,
    state: RwLock<Lifecycle>,
}

impl Tagger {
    /// Service over `table` with the default configuration.
    pub fn new(table: Arc<dyn Table>) -> Self {
        Self::from_store(TagStore::new(table))
    }

    /// Service over `table` with `config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `config` fails validation.
    pub fn with_config(
        table: Arc<dyn Table>,
        config: &TaggerConfig,
    ) -> std::result::Result<Self, ConfigError> {
        Ok(Self::from_store(TagStore::with_config(table, config)?))
    }

    /// Service over a fresh [`MemoryTable`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTable::new()))
    }

    /// Service over a prepared record store.
    pub fn from_store(store: TagStore) -> Self {
        Self {
            executor: Executor::new(Arc::new(store)),
            state: RwLock::new(Lifecycle::Uninitialized),
        }
    }

    /// Current lifecycle state
    pub fn lifecycle(&self) -> Lifecycle {
        *self.state.read()
    }

    /// Whether `init` has succeeded
    pub fn is_ready(&self) -> bool {
        self.lifecycle() == Lifecycle::Ready
    }

    /// Create the record table. Takes no arguments.
    ///
    /// # Errors
    ///
    /// `InvalidArgumentCount` if any argument is given; `Initialization` if
    /// the table cannot be created, including on a second call. A failed call
    /// leaves the state unchanged.
    pub fn init(&self, args: &[String]) -> Result<()> {
        let [] = expect_args::<0>("init", args)?;

        let mut state = self.state.write();
        let store = self.executor.store();
        if let Err(e) = store.initialize_schema() {
            warn!(target: "metatag::tagger", table = store.table_name(), error = %e, "Initialization failed");
            return Err(e);
        }
        *state = Lifecycle::Ready;
        info!(target: "metatag::tagger", table = store.table_name(), "Record table created");
        Ok(())
    }

    /// Write path. Recognizes `create(document, tag, note)` and returns the
    /// generated id as UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// `NotInitialized`, `UnknownOperation`, `InvalidArgumentCount`, or any
    /// error from the record store.
    pub fn invoke(&self, function: &str, args: &[String]) -> Result<Vec<u8>> {
        // Lifecycle is reported ahead of name and arity errors.
        self.ensure_ready()?;
        let cmd = Command::from_invocation(function, args).map_err(|e| {
            warn!(target: "metatag::tagger", function, error = %e, "Invocation rejected");
            e
        })?;
        self.execute(cmd)?.into_payload()
    }

    /// Read path. Recognizes `query(document)` and returns the matching
    /// records as a JSON array.
    ///
    /// # Errors
    ///
    /// `NotInitialized`, `UnknownQuery`, `InvalidArgumentCount`, or any
    /// error from the record store.
    pub fn query(&self, function: &str, args: &[String]) -> Result<Vec<u8>> {
        self.ensure_ready()?;
        let cmd = Command::from_read(function, args).map_err(|e| {
            warn!(target: "metatag::tagger", function, error = %e, "Query rejected");
            e
        })?;
        self.execute(cmd)?.into_payload()
    }

    /// Typed entry point shared by both paths.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        self.ensure_ready()?;
        self.executor.execute(cmd)
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.lifecycle() {
            Lifecycle::Ready => Ok(()),
            Lifecycle::Uninitialized => Err(Error::NotInitialized),
        }
    }
}
