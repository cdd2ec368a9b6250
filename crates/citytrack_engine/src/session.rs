//! Session state: score, decision log, and lifecycle flags.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

use crate::catalog::EntryId;

/// One recorded player decision.
///
/// Records are append-only; insertion order is submission order and the
/// log is never reordered or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRecord {
    /// Catalog entry the decision resolves.
    #[serde(rename = "issueId")]
    entry_id: EntryId,
    /// Entry name captured at submission time.
    #[serde(rename = "issueName")]
    entry_name: String,
    /// Decision kind the player chose.
    decision: String,
    /// Point delta this decision applied.
    points: i32,
    /// Capture-time timestamp.
    timestamp: DateTime<Utc>,
}

/// The single mutable record of game progress for the current process
/// lifetime.
///
/// Sessions are replaced wholesale on new-game/reset, never merged. The
/// completed count is derived from the decision log, so it always equals
/// the log length.
#[derive(Debug, Clone, Getters)]
pub struct Session {
    /// Running total. May go negative; no floor or ceiling is enforced.
    score: i32,
    /// Ordered log of every decision this session.
    decisions: Vec<DecisionRecord>,
    /// False once every catalog entry is resolved; irreversible within
    /// the session.
    active: bool,
    /// Distinguishes an explicitly started game from a reset to the
    /// start screen. UI branching only; no gameplay effect.
    started: bool,
}

impl Session {
    /// A zeroed session. `started` marks whether the player explicitly
    /// began a game or was returned to the start screen.
    pub(crate) fn fresh(started: bool) -> Self {
        Self {
            score: 0,
            decisions: Vec::new(),
            active: true,
            started,
        }
    }

    /// Number of resolved entries. Always equals the decision log length.
    pub fn completed_count(&self) -> usize {
        self.decisions.len()
    }

    /// Applies a decision: adds its points, appends the record, and
    /// deactivates the session once `catalog_size` entries are resolved.
    /// Returns the new total score.
    pub(crate) fn record(&mut self, record: DecisionRecord, catalog_size: usize) -> i32 {
        self.score += record.points;
        self.decisions.push(record);
        if self.completed_count() >= catalog_size {
            self.active = false;
        }
        self.score
    }
}
