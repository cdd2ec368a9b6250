//! The game engine: one session state machine parameterized by variant.

use chrono::Utc;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{info, instrument, warn};

use crate::catalog::{Catalog, CatalogEntry, EntryId};
use crate::error::EngineError;
use crate::outcome::OutcomeTable;
use crate::session::{DecisionRecord, Session};

/// Score at or above which the top rating tier is awarded.
pub const RESPONSIBLE_THRESHOLD: i32 = 80;

/// Score at or above which the middle rating tier is awarded.
pub const AWARE_THRESHOLD: i32 = 50;

/// Which catalog and outcome table the engine plays with.
///
/// The two historical backends are two configurations of the same state
/// machine; the variant is fixed at engine construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameVariant {
    /// City map with clickable issues resolved by `fix`/`report`/`ignore`.
    IssueMap,
    /// Scene-by-scene narrative resolved by lettered options `A`/`B`/`C`.
    Narrative,
}

/// Final qualitative rating derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum RatingTier {
    /// Top tier, score 80 and above.
    #[serde(rename = "Responsible Citizen")]
    #[strum(to_string = "Responsible Citizen")]
    Responsible,
    /// Middle tier, score 50 to 79.
    #[serde(rename = "Aware Citizen")]
    #[strum(to_string = "Aware Citizen")]
    Aware,
    /// Bottom tier, score below 50.
    #[serde(rename = "Needs Improvement")]
    #[strum(to_string = "Needs Improvement")]
    NeedsImprovement,
}

impl RatingTier {
    /// Partitions a score into its tier: `>= 80`, `50..80`, `< 50`.
    pub fn for_score(score: i32) -> Self {
        if score >= RESPONSIBLE_THRESHOLD {
            Self::Responsible
        } else if score >= AWARE_THRESHOLD {
            Self::Aware
        } else {
            Self::NeedsImprovement
        }
    }

    /// Player-facing message for this tier.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Responsible => "Excellent civic responsibility!",
            Self::Aware => "Good civic awareness, but can improve!",
            Self::NeedsImprovement => "Keep improving your civic responsibility!",
        }
    }
}

/// Result of a successful decision submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOutcome {
    /// Point delta this decision applied.
    points_earned: i32,
    /// New running total.
    total_score: i32,
    /// Entries resolved so far.
    #[serde(rename = "completedIssues")]
    completed: usize,
    /// Whether the session is still accepting decisions.
    #[serde(rename = "gameActive")]
    active: bool,
    /// Name of the resolved entry.
    #[serde(rename = "issueName")]
    entry_name: String,
    /// Successor entry to present next, when one exists and the session
    /// is still active.
    #[serde(rename = "nextScene", skip_serializing_if = "Option::is_none")]
    next_entry: Option<EntryId>,
}

/// Final result: score, rating tier, message, and the full decision log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct FinalReport {
    /// Total session score.
    score: i32,
    /// Rating tier for the score.
    rating: RatingTier,
    /// Player-facing message for the tier.
    message: String,
    /// Entries resolved this session.
    #[serde(rename = "completedIssues")]
    completed: usize,
    /// Full ordered decision log.
    decisions: Vec<DecisionRecord>,
}

/// A single game session and the static data it plays against.
///
/// Operations execute to completion before the next begins; callers
/// provide exclusive access (the HTTP layer holds the engine behind a
/// mutex).
#[derive(Debug, Clone)]
pub struct GameEngine {
    variant: GameVariant,
    catalog: Catalog,
    outcomes: OutcomeTable,
    session: Session,
}

impl GameEngine {
    /// Creates an engine for `variant` with a fresh, unstarted session.
    #[instrument]
    pub fn new(variant: GameVariant) -> Self {
        let (catalog, outcomes) = match variant {
            GameVariant::IssueMap => (Catalog::city_issues(), OutcomeTable::civic_actions()),
            GameVariant::Narrative => (Catalog::story_scenes(), OutcomeTable::lettered_options()),
        };
        info!(%variant, entries = catalog.len(), "Creating game engine");
        Self {
            variant,
            catalog,
            outcomes,
            session: Session::fresh(false),
        }
    }

    /// The variant this engine was built for.
    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    /// The static catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active outcome table.
    pub fn outcomes(&self) -> &OutcomeTable {
        &self.outcomes
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Looks up a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownEntry`] when `id` is not in the
    /// catalog.
    pub fn entry(&self, id: EntryId) -> Result<&CatalogEntry, EngineError> {
        self.catalog.get(id).ok_or(EngineError::UnknownEntry { id })
    }

    /// Discards the current session and starts a new game.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!(discarded_decisions = self.session.completed_count(), "Starting new game");
        self.session = Session::fresh(true);
    }

    /// Discards the current session and returns to the start screen.
    ///
    /// Identical to [`Self::new_game`] except the session is not marked
    /// as started.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded_decisions = self.session.completed_count(), "Resetting game");
        self.session = Session::fresh(false);
    }

    /// Records a decision for entry `id` and applies its score delta.
    ///
    /// Repeat submissions for the same entry are accepted and appended;
    /// the log is never deduplicated. Clients are expected not to
    /// re-offer resolved entries.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownEntry`] when `id` is not in the
    /// catalog and [`EngineError::UnknownDecision`] when `kind` is not a
    /// key of the active outcome table. The session is untouched on
    /// either error.
    #[instrument(skip(self), fields(variant = %self.variant))]
    pub fn submit_decision(
        &mut self,
        id: EntryId,
        kind: &str,
    ) -> Result<DecisionOutcome, EngineError> {
        let entry_name = self.entry(id)?.name().clone();
        let points = self.outcomes.points_for(kind).ok_or_else(|| {
            warn!(id, kind, "Rejecting unrecognized decision kind");
            EngineError::UnknownDecision {
                kind: kind.to_string(),
            }
        })?;

        let record = DecisionRecord::new(
            id,
            entry_name.clone(),
            kind.to_string(),
            points,
            Utc::now(),
        );
        let total_score = self.session.record(record, self.catalog.len());

        let active = *self.session.active();
        let next_entry = if active {
            self.catalog.get(id + 1).map(|entry| *entry.id())
        } else {
            None
        };

        info!(
            id,
            kind,
            points,
            total_score,
            completed = self.session.completed_count(),
            active,
            "Decision recorded"
        );

        Ok(DecisionOutcome {
            points_earned: points,
            total_score,
            completed: self.session.completed_count(),
            active,
            entry_name,
            next_entry,
        })
    }

    /// Computes the final rating for the current session.
    ///
    /// Pure read, safe to call in any state; semantically meaningful once
    /// the session is no longer active.
    #[instrument(skip(self))]
    pub fn final_report(&self) -> FinalReport {
        let score = *self.session.score();
        let rating = RatingTier::for_score(score);
        FinalReport {
            score,
            rating,
            message: rating.message().to_string(),
            completed: self.session.completed_count(),
            decisions: self.session.decisions().clone(),
        }
    }
}
