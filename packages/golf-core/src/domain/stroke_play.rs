//! Stroke play: gross/net totals and the leaderboard.

use serde::{Deserialize, Serialize};

use crate::domain::ranking::{rank, LeaderboardEntry, RankOrder};
use crate::domain::types::{CoreRoundData, HoleNumber, PlayerId};

/// Per-hole cap applied to net scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaxScoreRule {
    DoubleBogey,
    TripleBogey,
    ParPlus { value: i32 },
    Fixed { value: i32 },
}

impl MaxScoreRule {
    pub fn clamp(&self, score: i32, par: i32) -> i32 {
        let cap = match *self {
            MaxScoreRule::DoubleBogey => par + 2,
            MaxScoreRule::TripleBogey => par + 3,
            MaxScoreRule::ParPlus { value } => par + value,
            MaxScoreRule::Fixed { value } => value,
        };
        score.min(cap)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrokePlayConfig {
    pub use_net: bool,
    pub max_score_rule: Option<MaxScoreRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleScore {
    pub hole: HoleNumber,
    pub gross: i32,
    pub net: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTotals {
    pub player: PlayerId,
    pub gross_total: i32,
    pub net_total: i32,
    pub holes_played: u8,
    pub holes: Vec<HoleScore>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokePlayResult {
    /// Totals in the caller's player order.
    pub players: Vec<PlayerTotals>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl StrokePlayResult {
    pub fn totals_for(&self, player: &str) -> Option<&PlayerTotals> {
        self.players.iter().find(|t| t.player == player)
    }
}

fn player_totals(data: &CoreRoundData, player: &str, config: &StrokePlayConfig) -> PlayerTotals {
    let mut holes = Vec::with_capacity(data.hole_count() as usize);
    let mut gross_total = 0;
    let mut net_total = 0;
    let mut holes_played = 0u8;

    for hole in data.course.hole_numbers() {
        let gross = data.gross(player, hole);
        let mut net = data.score(player, hole, config.use_net);
        if let Some(rule) = &config.max_score_rule {
            net = rule.clamp(net, data.course.par(hole));
        }
        if gross > 0 {
            holes_played += 1;
        }
        gross_total += gross;
        net_total += net;
        holes.push(HoleScore { hole, gross, net });
    }

    PlayerTotals {
        player: player.to_string(),
        gross_total,
        net_total,
        holes_played,
        holes,
    }
}

pub fn compute_stroke_play(data: &CoreRoundData, config: &StrokePlayConfig) -> StrokePlayResult {
    let players: Vec<PlayerTotals> = data
        .players
        .iter()
        .map(|p| player_totals(data, p, config))
        .collect();

    let ranked_scores = players
        .iter()
        .map(|t| {
            let score = if config.use_net {
                t.net_total
            } else {
                t.gross_total
            };
            (t.player.clone(), score)
        })
        .collect();

    StrokePlayResult {
        leaderboard: rank(ranked_scores, RankOrder::Ascending),
        players,
    }
}
