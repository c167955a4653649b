//! The Executor - routes typed commands to the record store.
//!
//! The Executor is a stateless dispatcher: it maps each [`Command`] variant
//! to its [`TagStore`] operation and wraps the result in an [`Output`].
//! Lifecycle checks live one level up, in [`Tagger`](crate::Tagger).

use std::sync::Arc;

use crate::store::TagStore;
use crate::{Command, Output, Result};

/// The command executor.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use metatag_executor::{Command, Executor};
///
/// let executor = Executor::new(store);
///
/// let out = executor.execute(Command::Create {
///     document: "doc1".into(),
///     tag: "urgent".into(),
///     note: "needs review".into(),
/// })?;
/// ```
#[derive(Clone)]
pub struct Executor {
    store: Arc<TagStore>,
}

impl Executor {
    /// Create a new executor over a record store.
    pub fn new(store: Arc<TagStore>) -> Self {
        Self { store }
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        match cmd {
            Command::Create {
                document,
                tag,
                note,
            } => {
                let id = self.store.create(document, tag, note)?;
                Ok(Output::Created { id })
            }
            Command::Query { document } => {
                let records = self.store.query(&document)?;
                Ok(Output::Records(records))
            }
        }
    }

    /// Execute commands in order, one result per command.
    ///
    /// A failing command does not stop the ones after it.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// The record store this executor drives
    pub fn store(&self) -> &Arc<TagStore> {
        &self.store
    }
}
