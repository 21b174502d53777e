//! # pairs-engine
//!
//! The core of a memory-matching (pairs) game: a board of face-down cards in
//! matched pairs, two reveals per turn, matches stay up, mismatches revert
//! after a display delay, and the round is won when every pair is found.
//! Final scores go to an append-only leaderboard.
//!
//! ## Design Principles
//!
//! 1. **One visual state, one truth**: a card's `VisualState` (`Hidden`,
//!    `Revealed`, `Matched`) alone determines what it shows. There is no
//!    separate orientation or flip attribute for presentation to drift out
//!    of sync with.
//!
//! 2. **Synchronous engine, external clock**: the engine never owns a timer.
//!    Separating `reveal` from `resolve_pending` lets the caller insert the
//!    display delay between the second reveal and the outcome, keeping the
//!    engine deterministic and trivially testable.
//!
//! 3. **Invalid input is not an error**: double-clicks and racing third
//!    reveals are normal user input. The engine signals them without
//!    changing state; the controller swallows them.
//!
//! ## Modules
//!
//! - `engine`: card identity, deterministic dealing, the round state machine
//! - `controller`: input sequencing, cancellable resolve timers, scoring
//! - `leaderboard`: append-only ranked score storage behind a trait

pub mod controller;
pub mod engine;
pub mod leaderboard;

// Re-export commonly used types
pub use crate::engine::{
    Card, CardId, DealError, DealRng, InvalidMove, MatchOutcome, Round, RoundStatus, SymbolId,
    VisualState,
};

pub use crate::controller::{
    submit_final_score, FinalScore, Phase, ResolveTimer, RoundController, SelectOutcome,
    SubmissionResult, TimerOutcome,
};

pub use crate::leaderboard::{
    FileLeaderboard, LeaderboardClient, LeaderboardError, MemoryLeaderboard, ScoreRecord, ScoreRow,
};
