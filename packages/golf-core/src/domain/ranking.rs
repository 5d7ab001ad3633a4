//! Tie-aware leaderboard ranking.

use serde::{Deserialize, Serialize};

use crate::domain::types::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    /// Lower is better (strokes).
    Ascending,
    /// Higher is better (points).
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: PlayerId,
    pub score: i32,
    /// 1-based standard competition rank: ties share a position, the next
    /// entry's position is 1 + the number of strictly better entries.
    pub position: u32,
}

/// Rank `(player, score)` pairs. Ties keep the input order.
pub fn rank(scores: Vec<(PlayerId, i32)>, order: RankOrder) -> Vec<LeaderboardEntry> {
    let mut sorted = scores;
    match order {
        RankOrder::Ascending => sorted.sort_by_key(|(_, s)| *s),
        RankOrder::Descending => sorted.sort_by_key(|(_, s)| std::cmp::Reverse(*s)),
    }

    let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(sorted.len());
    for (i, (player, score)) in sorted.into_iter().enumerate() {
        let position = match entries.last() {
            Some(prev) if prev.score == score => prev.position,
            _ => (i + 1) as u32,
        };
        entries.push(LeaderboardEntry {
            player,
            score,
            position,
        });
    }
    entries
}
