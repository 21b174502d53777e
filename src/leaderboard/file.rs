//! File-backed leaderboard store.
//!
//! Records are serialized with bincode as a single vector. The store is
//! insert-only at the API level; each submit rewrites the file with the new
//! record appended. Good enough for a local score file - a shared deployment
//! would put a real database behind [`LeaderboardClient`] instead.

use std::fs;
use std::path::{Path, PathBuf};

use super::{rank_top, unix_now, LeaderboardClient, LeaderboardError, ScoreRecord, ScoreRow};

/// Leaderboard persisted to a local file.
#[derive(Debug)]
pub struct FileLeaderboard {
    path: PathBuf,
    records: Vec<ScoreRecord>,
    next_id: u64,
}

impl FileLeaderboard {
    /// Open a leaderboard file, creating an empty store if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LeaderboardError> {
        let path = path.as_ref().to_path_buf();
        let records: Vec<ScoreRecord> = if path.exists() {
            let bytes = fs::read(&path)?;
            bincode::deserialize(&bytes)?
        } else {
            Vec::new()
        };
        let next_id = records.iter().map(|r| r.id + 1).max().unwrap_or(0);
        Ok(Self {
            path,
            records,
            next_id,
        })
    }

    /// Total number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Is the leaderboard empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) -> Result<(), LeaderboardError> {
        let bytes = bincode::serialize(&self.records)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl LeaderboardClient for FileLeaderboard {
    fn submit(&mut self, player_name: &str, score: u32) -> Result<(), LeaderboardError> {
        if player_name.is_empty() {
            return Err(LeaderboardError::EmptyName);
        }
        self.records.push(ScoreRecord {
            id: self.next_id,
            player_name: player_name.to_string(),
            score,
            created_at_unix: unix_now(),
        });
        self.next_id += 1;

        if let Err(err) = self.persist() {
            // Keep the in-memory store consistent with what is on disk.
            self.records.pop();
            self.next_id -= 1;
            return Err(err);
        }
        Ok(())
    }

    fn fetch_top(&self, n: usize) -> Result<Vec<ScoreRow>, LeaderboardError> {
        Ok(rank_top(&self.records, n))
    }
}
