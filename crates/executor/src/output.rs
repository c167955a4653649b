//! Output enum for command execution results.
//!
//! Every command produces exactly one output type:
//! `Create` yields `Created`, `Query` yields `Records`.

use metatag_core::TagRecord;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// Id of the record just stored
    Created {
        /// Generated record id
        id: String,
    },

    /// Records matching a query, in backend delivery order
    Records(Vec<TagRecord>),
}

impl Output {
    /// Encode as the byte payload handed back to the host.
    ///
    /// `Created` is the id as UTF-8; `Records` is a JSON array of
    /// `{id, document, tag, note}` objects.
    pub fn into_payload(self) -> Result<Vec<u8>> {
        match self {
            Output::Created { id } => Ok(id.into_bytes()),
            Output::Records(records) => Ok(serde_json::to_vec(&records)?),
        }
    }
}
