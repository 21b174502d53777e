//! Scoring policy.
//!
//! The core contract only requires that the final score is a deterministic
//! function of moves and elapsed time, strictly monotonic in both, with lower
//! being better (the leaderboard ranks ascending). The exact weighting is a
//! policy choice kept local to this module.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Weight applied to each completed move.
const MOVE_WEIGHT: u32 = 10;

/// A completed round's final score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    /// Completed two-card comparisons.
    pub moves: u32,

    /// Elapsed wall-clock time, whole seconds.
    pub elapsed_secs: u64,

    /// The ranked value. Lower is better.
    pub value: u32,
}

impl FinalScore {
    /// Compute the score for a finished round.
    ///
    /// `value = moves * 10 + elapsed_whole_seconds`, saturating.
    #[must_use]
    pub fn compute(moves: u32, elapsed: Duration) -> Self {
        let elapsed_secs = elapsed.as_secs();
        let time_part = u32::try_from(elapsed_secs).unwrap_or(u32::MAX);
        let value = moves.saturating_mul(MOVE_WEIGHT).saturating_add(time_part);
        Self {
            moves,
            elapsed_secs,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_deterministic() {
        let a = FinalScore::compute(12, Duration::from_secs(45));
        let b = FinalScore::compute(12, Duration::from_secs(45));

        assert_eq!(a, b);
        assert_eq!(a.value, 12 * 10 + 45);
    }

    #[test]
    fn test_more_moves_scores_worse() {
        let fewer = FinalScore::compute(10, Duration::from_secs(30));
        let more = FinalScore::compute(11, Duration::from_secs(30));

        assert!(fewer.value < more.value);
    }

    #[test]
    fn test_more_time_scores_worse() {
        let faster = FinalScore::compute(10, Duration::from_secs(30));
        let slower = FinalScore::compute(10, Duration::from_secs(31));

        assert!(faster.value < slower.value);
    }

    #[test]
    fn test_sub_second_elapsed_ignored() {
        let a = FinalScore::compute(5, Duration::from_millis(900));
        assert_eq!(a.elapsed_secs, 0);
        assert_eq!(a.value, 50);
    }

    #[test]
    fn test_saturation_on_extreme_inputs() {
        let score = FinalScore::compute(u32::MAX, Duration::from_secs(u64::MAX));
        assert_eq!(score.value, u32::MAX);
    }
}
