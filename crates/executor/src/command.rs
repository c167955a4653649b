//! Command enum defining all tagging operations.
//!
//! Commands are the typed form of an invocation. The write and read entry
//! points each accept an operation name plus positional string arguments;
//! [`Command::from_invocation`] and [`Command::from_read`] turn those into a
//! `Command`, rejecting unknown names and wrong argument counts before any
//! storage is touched.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Operation name recognized by the write path
pub const CREATE: &str = "create";
/// Operation name recognized by the read path
pub const QUERY: &str = "query";

/// A self-contained, serializable tagging operation.
///
/// | Command | Path | Returns |
/// |---------|------|---------|
/// | `Create` | write | `Output::Created` |
/// | `Query` | read | `Output::Records` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Attach `tag` and `note` to `document`.
    /// Returns: `Output::Created`
    Create {
        document: String,
        tag: String,
        note: String,
    },

    /// List every record on `document`.
    /// Returns: `Output::Records`
    Query { document: String },
}

impl Command {
    /// Parse a write-path invocation.
    ///
    /// # Errors
    ///
    /// `UnknownOperation` for any name but `"create"`;
    /// `InvalidArgumentCount` unless exactly three arguments are given.
    pub fn from_invocation(function: &str, args: &[String]) -> Result<Command> {
        match function {
            CREATE => {
                let [document, tag, note] = expect_args::<3>(CREATE, args)?;
                Ok(Command::Create {
                    document,
                    tag,
                    note,
                })
            }
            other => Err(Error::UnknownOperation {
                name: other.to_string(),
            }),
        }
    }

    /// Parse a read-path invocation.
    ///
    /// # Errors
    ///
    /// `UnknownQuery` for any name but `"query"`;
    /// `InvalidArgumentCount` unless exactly one argument is given.
    pub fn from_read(function: &str, args: &[String]) -> Result<Command> {
        match function {
            QUERY => {
                let [document] = expect_args::<1>(QUERY, args)?;
                Ok(Command::Query { document })
            }
            other => Err(Error::UnknownQuery {
                name: other.to_string(),
            }),
        }
    }
}

/// Check the argument count and take owned copies.
pub(crate) fn expect_args<const N: usize>(operation: &str, args: &[String]) -> Result<[String; N]> {
    let fixed: &[String; N] = args
        .try_into()
        .map_err(|_| Error::InvalidArgumentCount {
            operation: operation.to_string(),
            expected: N,
            actual: args.len(),
        })?;
    Ok(fixed.clone())
}
