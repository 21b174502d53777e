//! The Round Controller: sequences player input against the engine.
//!
//! The controller enforces the reveal-then-delay-then-resolve protocol over
//! three phases:
//!
//! 1. `AcceptingInput` - reveal requests go to the engine. The first reveal
//!    of a pair stays in this phase; the second moves to `AwaitingResolution`
//!    and hands the caller a [`ResolveTimer`].
//! 2. `AwaitingResolution` - further reveals are ignored (at most two cards
//!    visible at once). After any positive display delay the presentation
//!    layer fires the timer, the pending pair resolves, and play returns to
//!    `AcceptingInput` - or moves to `Complete` when the last pair falls.
//! 3. `Complete` - terminal. The caller computes a [`FinalScore`] and submits
//!    it to the leaderboard collaborator.
//!
//! ## Timer handles
//!
//! The delay itself lives in the presentation layer; the controller only
//! issues cancellable handles. Each [`ResolveTimer`] carries a generation
//! number, and [`RoundController::reset`] bumps the live generation, so a
//! dangling timer from a replaced round can never mutate the new one. At most
//! one timer is live at a time.

pub mod score;

use tracing::debug;

use crate::engine::{CardId, MatchOutcome, Round};
use crate::leaderboard::{LeaderboardClient, LeaderboardError};

pub use score::FinalScore;

/// Controller phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Reveal requests are accepted.
    AcceptingInput,
    /// Two cards are up; waiting on the display delay.
    AwaitingResolution,
    /// The round is won. Terminal.
    Complete,
}

/// Cancellable handle for the display delay.
///
/// Issued when the second card of a pair is revealed. The presentation layer
/// schedules its delay, then passes the handle back via
/// [`RoundController::on_timer`]. A handle from a previous round (or a
/// superseded pair) is stale and is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolveTimer {
    generation: u64,
}

/// What a reveal request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First card of a pair revealed; awaiting the second.
    Revealed,
    /// Second card revealed; fire the timer after the display delay.
    PairRevealed(ResolveTimer),
    /// Redundant or racing input; nothing changed.
    Ignored,
}

/// What firing a timer did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerOutcome {
    /// The pair resolved; play continues.
    Resolved(MatchOutcome),
    /// The pair resolved and the round is won.
    Won(MatchOutcome),
    /// The handle was stale (superseded or from a replaced round); no-op.
    Stale,
}

/// Result of handing a final score to the leaderboard.
#[derive(Debug)]
pub enum SubmissionResult {
    /// The score was persisted.
    Saved,
    /// The collaborator failed; show the score locally without a rank.
    NotSaved(LeaderboardError),
}

/// Drives one [`Round`] in response to player input.
///
/// Owns the round exclusively. The engine's `InvalidMove` signals are
/// swallowed here: they only arise from redundant or racing input, never
/// from a programming or data error.
#[derive(Debug)]
pub struct RoundController {
    round: Round,
    phase: Phase,
    timer_generation: u64,
}

impl RoundController {
    /// Start controlling a freshly dealt round.
    #[must_use]
    pub fn new(round: Round) -> Self {
        Self {
            round,
            phase: Phase::AcceptingInput,
            timer_generation: 0,
        }
    }

    /// The round being driven.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Has the round been won?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Handle a player selecting a card.
    ///
    /// Outside `AcceptingInput`, or on any engine-rejected reveal, the
    /// request is ignored with no user-visible effect.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        if self.phase != Phase::AcceptingInput {
            debug!(card = %id, phase = ?self.phase, "reveal ignored: not accepting input");
            return SelectOutcome::Ignored;
        }

        match self.round.reveal(id) {
            Ok(()) => {
                if self.round.pending().len() == 2 {
                    self.phase = Phase::AwaitingResolution;
                    self.timer_generation += 1;
                    SelectOutcome::PairRevealed(ResolveTimer {
                        generation: self.timer_generation,
                    })
                } else {
                    SelectOutcome::Revealed
                }
            }
            Err(err) => {
                debug!(card = %id, %err, "reveal ignored");
                SelectOutcome::Ignored
            }
        }
    }

    /// Fire a display-delay timer.
    ///
    /// Resolves the pending pair if the handle is current; stale handles are
    /// no-ops, which is what makes round resets safe against dangling timers.
    pub fn on_timer(&mut self, timer: ResolveTimer) -> TimerOutcome {
        if self.phase != Phase::AwaitingResolution || timer.generation != self.timer_generation {
            debug!(generation = timer.generation, "stale resolve timer ignored");
            return TimerOutcome::Stale;
        }

        // Phase discipline guarantees exactly two cards are pending here.
        let Some(outcome) = self.round.resolve_pending() else {
            return TimerOutcome::Stale;
        };
        debug!(?outcome, moves = self.round.move_count(), "pair resolved");

        if self.round.is_won() {
            self.phase = Phase::Complete;
            TimerOutcome::Won(outcome)
        } else {
            self.phase = Phase::AcceptingInput;
            TimerOutcome::Resolved(outcome)
        }
    }

    /// Replace the round and start over.
    ///
    /// Cancels any outstanding timer: handles issued before the reset become
    /// stale and can no longer touch the new round's state.
    pub fn reset(&mut self, round: Round) {
        self.round = round;
        self.phase = Phase::AcceptingInput;
        self.timer_generation += 1;
    }

    /// Compute the final score for a completed round.
    ///
    /// Returns `None` until the round is won. Elapsed wall-clock time is
    /// measured by the caller, which owns the clock.
    #[must_use]
    pub fn final_score(&self, elapsed: std::time::Duration) -> Option<FinalScore> {
        if self.phase == Phase::Complete {
            Some(FinalScore::compute(self.round.move_count(), elapsed))
        } else {
            None
        }
    }
}

/// Hand a final score to the leaderboard collaborator.
///
/// Fire-and-forget from the game's perspective: a failure degrades to a
/// local-only score display and is not retried automatically.
pub fn submit_final_score(
    client: &mut dyn LeaderboardClient,
    player_name: &str,
    score: &FinalScore,
) -> SubmissionResult {
    match client.submit(player_name, score.value) {
        Ok(()) => SubmissionResult::Saved,
        Err(err) => {
            debug!(%err, "score submission failed; showing locally only");
            SubmissionResult::NotSaved(err)
        }
    }
}
