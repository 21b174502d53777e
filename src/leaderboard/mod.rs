//! The leaderboard collaborator: append-only ranked score storage.
//!
//! The game core treats the leaderboard as an external service behind the
//! [`LeaderboardClient`] trait: insert a row, read the sorted top-N. Lower
//! scores rank higher, consistent with the ascending-score index of the
//! persisted store. Writes are insert-only - there is no update or delete.
//!
//! Two implementations ship with the crate: [`MemoryLeaderboard`] for tests
//! and offline play, and [`FileLeaderboard`] for local persistence.

pub mod file;
pub mod memory;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use file::FileLeaderboard;
pub use memory::MemoryLeaderboard;

/// A leaderboard operation failure.
///
/// Submission failures never crash the round-complete flow - the controller
/// degrades to showing the score locally without a rank.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// Player names must be non-empty.
    #[error("player name must not be empty")]
    EmptyName,

    /// Underlying storage I/O failed.
    #[error("leaderboard storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded.
    #[error("leaderboard codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// One persisted score record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Auto-incremented insertion ID.
    pub id: u64,

    /// Who played. Never empty.
    pub player_name: String,

    /// Final score. Lower is better.
    pub score: u32,

    /// Submission time, seconds since the Unix epoch.
    pub created_at_unix: u64,
}

/// A ranked row as returned by [`LeaderboardClient::fetch_top`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    /// Who played.
    pub player_name: String,

    /// Final score. Lower is better.
    pub score: u32,
}

impl From<&ScoreRecord> for ScoreRow {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            player_name: record.player_name.clone(),
            score: record.score,
        }
    }
}

/// Append-only score store.
///
/// Implementations must order `fetch_top` ascending by score (lower = better)
/// and break ties by insertion order, oldest first.
pub trait LeaderboardClient {
    /// Persist a final score.
    ///
    /// `player_name` must be non-empty. Insert-only.
    fn submit(&mut self, player_name: &str, score: u32) -> Result<(), LeaderboardError>;

    /// Read the top `n` rows, best (lowest) score first.
    fn fetch_top(&self, n: usize) -> Result<Vec<ScoreRow>, LeaderboardError>;
}

/// Sort records into rank order and truncate to `n`.
///
/// Ascending by score, ties by insertion ID ascending.
pub(crate) fn rank_top(records: &[ScoreRecord], n: usize) -> Vec<ScoreRow> {
    let mut sorted: Vec<&ScoreRecord> = records.iter().collect();
    sorted.sort_by_key(|r| (r.score, r.id));
    sorted.into_iter().take(n).map(ScoreRow::from).collect()
}

/// Current wall-clock time as Unix seconds.
pub(crate) fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
