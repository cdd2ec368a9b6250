//! Decision outcome tables.

use derive_getters::Getters;
use serde::Serialize;

/// A single decision kind and the score delta it applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Outcome {
    /// Decision-kind key as submitted by the client.
    key: String,
    /// Point delta applied to the session score.
    points: i32,
}

/// Ordered mapping from decision-kind key to point delta.
///
/// Exactly one canonical table exists per game variant. Constructive
/// action scores highest, reporting to authorities scores lower, and
/// ignoring scores negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeTable {
    outcomes: Vec<Outcome>,
}

impl OutcomeTable {
    /// Table for the issue-map variant: `fix`, `report`, `ignore`.
    pub fn civic_actions() -> Self {
        Self::from_pairs(&[("fix", 20), ("report", 10), ("ignore", -10)])
    }

    /// Table for the narrative variant: lettered options `A`, `B`, `C`.
    pub fn lettered_options() -> Self {
        Self::from_pairs(&[("A", 20), ("B", 10), ("C", -10)])
    }

    fn from_pairs(pairs: &[(&str, i32)]) -> Self {
        let outcomes = pairs
            .iter()
            .map(|(key, points)| Outcome {
                key: (*key).to_string(),
                points: *points,
            })
            .collect();
        Self { outcomes }
    }

    /// Point delta for `kind`, or `None` when the kind is not in the table.
    pub fn points_for(&self, kind: &str) -> Option<i32> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.key == kind)
            .map(|outcome| outcome.points)
    }

    /// All outcomes in table order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
}
