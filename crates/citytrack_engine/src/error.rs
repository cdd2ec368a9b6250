//! Engine error types.

use derive_more::{Display, Error};

use crate::catalog::EntryId;

/// Errors surfaced by engine operations.
///
/// Both variants are terminal for the triggering request and leave the
/// session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// The id does not reference any catalog entry.
    #[display("no catalog entry with id {id}")]
    UnknownEntry {
        /// Id that failed the lookup.
        id: EntryId,
    },
    /// The decision kind is not a key of the active outcome table.
    #[display("unrecognized decision kind '{kind}'")]
    UnknownDecision {
        /// Kind as submitted.
        kind: String,
    },
}
