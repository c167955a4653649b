//! Metatag - tag documents with free-text labels and notes
//!
//! A caller attaches a tag and note to a document identifier; each tagging
//! event gets a generated id. Any caller can list the events on a document.
//!
//! # Quick Start
//!
//! ```ignore
//! use metatag::Tagger;
//!
//! let tagger = Tagger::in_memory();
//! tagger.init(&[])?;
//!
//! let id = tagger.invoke("create", &["doc1".into(), "urgent".into(), "needs review".into()])?;
//! let json = tagger.query("query", &["doc1".into()])?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Tagger`] façade, which checks the
//! lifecycle and hands typed [`Command`]s to the [`Executor`]. Records are
//! persisted through the [`Table`] trait; [`MemoryTable`] is the bundled
//! backend.

// Re-export the public API from metatag-executor
pub use metatag_executor::*;
