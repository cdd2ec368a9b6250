//! CityTrack engine - pure game logic for the civic issue simulator
//!
//! This crate owns everything about the game that is independent of
//! transport: the static catalogs, the decision outcome tables, and the
//! session state machine that records decisions and computes the final
//! rating.
//!
//! # Architecture
//!
//! - **Catalog**: fixed set of civic issues or narrative scenes the player
//!   can resolve, immutable after construction
//! - **Outcome table**: static mapping from decision kind to point delta
//! - **Session**: the single mutable record of game progress, replaced
//!   wholesale on new-game/reset
//! - **Engine**: one state machine parameterized by [`GameVariant`],
//!   which selects the catalog and outcome table at construction
//!
//! # Example
//!
//! ```
//! use citytrack_engine::{GameEngine, GameVariant};
//!
//! let mut engine = GameEngine::new(GameVariant::IssueMap);
//! let outcome = engine.submit_decision(1, "fix").expect("valid decision");
//! assert_eq!(*outcome.points_earned(), 20);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod engine;
mod error;
mod outcome;
mod session;

// Crate-level exports - Catalog types
pub use catalog::{Catalog, CatalogEntry, DecisionOption, EntryId, Presentation};

// Crate-level exports - Engine and result types
pub use engine::{
    AWARE_THRESHOLD, DecisionOutcome, FinalReport, GameEngine, GameVariant, RESPONSIBLE_THRESHOLD,
    RatingTier,
};

// Crate-level exports - Errors
pub use error::EngineError;

// Crate-level exports - Outcome table
pub use outcome::{Outcome, OutcomeTable};

// Crate-level exports - Session state
pub use session::{DecisionRecord, Session};
