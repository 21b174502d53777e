//! In-process leaderboard store.

use super::{rank_top, unix_now, LeaderboardClient, LeaderboardError, ScoreRecord, ScoreRow};

/// Leaderboard held entirely in memory.
///
/// The default collaborator for tests and offline play. Records are kept in
/// insertion order; ranking happens at read time.
#[derive(Clone, Debug, Default)]
pub struct MemoryLeaderboard {
    records: Vec<ScoreRecord>,
    next_id: u64,
}

impl MemoryLeaderboard {
    /// Create an empty leaderboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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
}

impl LeaderboardClient for MemoryLeaderboard {
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
        Ok(())
    }

    fn fetch_top(&self, n: usize) -> Result<Vec<ScoreRow>, LeaderboardError> {
        Ok(rank_top(&self.records, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_and_fetch() {
        let mut board = MemoryLeaderboard::new();
        board.submit("alice", 30).unwrap();
        board.submit("bob", 10).unwrap();

        let rows = board.fetch_top(10).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].player_name, "bob");
        assert_eq!(rows[0].score, 10);
        assert_eq!(rows[1].player_name, "alice");
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut board = MemoryLeaderboard::new();

        assert!(matches!(
            board.submit("", 10),
            Err(LeaderboardError::EmptyName)
        ));
        assert!(board.is_empty());
    }

    #[test]
    fn test_fetch_top_limits() {
        let mut board = MemoryLeaderboard::new();
        for (name, score) in [("a", 3), ("b", 1), ("c", 2)] {
            board.submit(name, score).unwrap();
        }

        let rows = board.fetch_top(2).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].player_name, "b");
        assert_eq!(rows[1].player_name, "c");
    }

    #[test]
    fn test_fetch_top_on_empty_board() {
        let board = MemoryLeaderboard::new();
        assert!(board.fetch_top(5).unwrap().is_empty());
    }
}
