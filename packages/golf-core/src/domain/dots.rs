//! Dots: achievement points per hole, settled pairwise.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ranking::{rank, LeaderboardEntry, RankOrder};
use crate::domain::types::{push_payable, CoreRoundData, HoleDetail, HoleNumber, Payable, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DotsConfig {
    pub fairway: i32,
    pub green_in_regulation: i32,
    pub one_putt: i32,
    pub birdie: i32,
    /// Awarded instead of `birdie` for eagle or better.
    pub eagle: i32,
    /// Subtracted for double bogey or worse.
    pub double_bogey_penalty: i32,
    pub wager_per_dot: u64,
}

impl Default for DotsConfig {
    fn default() -> Self {
        Self {
            fairway: 1,
            green_in_regulation: 1,
            one_putt: 1,
            birdie: 2,
            eagle: 4,
            double_bogey_penalty: 1,
            wager_per_dot: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dot {
    Fairway,
    GreenInRegulation,
    OnePutt,
    Birdie,
    EagleOrBetter,
    DoubleBogeyOrWorse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotsHole {
    pub hole: HoleNumber,
    pub dots: Vec<Dot>,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDots {
    pub player: PlayerId,
    pub total: i32,
    pub holes: Vec<DotsHole>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotsResult {
    pub players: Vec<PlayerDots>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub payables: Vec<Payable>,
}

impl DotsResult {
    pub fn totals(&self) -> BTreeMap<&str, i32> {
        self.players
            .iter()
            .map(|p| (p.player.as_str(), p.total))
            .collect()
    }
}

impl DotsConfig {
    fn value(&self, dot: Dot) -> i32 {
        match dot {
            Dot::Fairway => self.fairway,
            Dot::GreenInRegulation => self.green_in_regulation,
            Dot::OnePutt => self.one_putt,
            Dot::Birdie => self.birdie,
            Dot::EagleOrBetter => self.eagle,
            Dot::DoubleBogeyOrWorse => self.double_bogey_penalty.saturating_neg(),
        }
    }
}

/// Recorded GIR, or derived from putts when only those were recorded.
fn green_in_regulation(detail: &HoleDetail, strokes: i32, par: i32) -> bool {
    match (detail.green_in_regulation, detail.putts) {
        (Some(gir), _) => gir,
        (None, Some(putts)) => strokes - i32::from(putts) <= par - 2,
        (None, None) => false,
    }
}

/// Dots earned on one hole, gross strokes against par.
pub fn hole_dots(detail: &HoleDetail, strokes: i32, par: i32) -> Vec<Dot> {
    let mut dots = Vec::new();
    if detail.fairway_hit == Some(true) {
        dots.push(Dot::Fairway);
    }
    if green_in_regulation(detail, strokes, par) {
        dots.push(Dot::GreenInRegulation);
    }
    if detail.putts == Some(1) {
        dots.push(Dot::OnePutt);
    }
    if strokes <= par - 2 {
        dots.push(Dot::EagleOrBetter);
    } else if strokes == par - 1 {
        dots.push(Dot::Birdie);
    } else if strokes >= par + 2 {
        dots.push(Dot::DoubleBogeyOrWorse);
    }
    dots
}

fn player_dots(data: &CoreRoundData, player: &str, config: &DotsConfig) -> PlayerDots {
    let holes: Vec<DotsHole> = data
        .course
        .hole_numbers()
        .filter(|&h| data.is_played(player, h))
        .map(|hole| {
            let dots = hole_dots(
                &data.detail(player, hole),
                data.gross(player, hole),
                data.course.par(hole),
            );
            let points = dots
                .iter()
                .fold(0i32, |acc, &d| acc.saturating_add(config.value(d)));
            DotsHole { hole, dots, points }
        })
        .collect();

    PlayerDots {
        player: player.to_string(),
        total: holes.iter().fold(0i32, |acc, h| acc.saturating_add(h.points)),
        holes,
    }
}

pub fn compute_dots(data: &CoreRoundData, config: &DotsConfig) -> Result<DotsResult, DomainError> {
    let players: Vec<PlayerDots> = data
        .players
        .iter()
        .map(|p| player_dots(data, p, config))
        .collect();

    let mut payables = Vec::new();
    for (i, a) in players.iter().enumerate() {
        for b in &players[i + 1..] {
            let diff = i64::from(a.total) - i64::from(b.total);
            let (from, to) = if diff < 0 { (a, b) } else { (b, a) };
            let amount = diff
                .unsigned_abs()
                .checked_mul(config.wager_per_dot)
                .ok_or_else(|| {
                    DomainError::validation(
                        ValidationKind::InvalidConfig,
                        format!(
                            "dots payment {} vs {} overflows at {} per dot",
                            to.player, from.player, config.wager_per_dot
                        ),
                    )
                })?;
            push_payable(
                &mut payables,
                Payable::new(
                    from.player.clone(),
                    to.player.clone(),
                    amount,
                    format!("dots {} vs {}", to.total, from.total),
                ),
            );
        }
    }

    let leaderboard = rank(
        players.iter().map(|p| (p.player.clone(), p.total)).collect(),
        RankOrder::Descending,
    );

    Ok(DotsResult {
        players,
        leaderboard,
        payables,
    })
}
