//! Sixes: three six-hole best-ball segments with rotating partners.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::domain::types::{CoreRoundData, HoleNumber, PlayerId};
use crate::errors::domain::DomainError;

pub const SEGMENTS: [RangeInclusive<HoleNumber>; 3] = [1..=6, 7..=12, 13..=18];

/// Partner pairings by player index for 3 and 4 players; every pair partners once.
const ROTATION_THREE: [([usize; 2], [usize; 1]); 3] = [([0, 1], [2]), ([0, 2], [1]), ([1, 2], [0])];
const ROTATION_FOUR: [([usize; 2], [usize; 2]); 3] =
    [([0, 1], [2, 3]), ([0, 2], [1, 3]), ([0, 3], [1, 2])];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SixesConfig {
    pub use_net: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SixesSegment {
    pub index: u8,
    pub first_hole: HoleNumber,
    pub last_hole: HoleNumber,
    pub team_a: Vec<PlayerId>,
    pub team_b: Vec<PlayerId>,
    pub score_a: i32,
    pub score_b: i32,
    /// `None` when the segment was halved.
    pub winner: Option<Side>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SixesResult {
    pub segments: Vec<SixesSegment>,
    pub points: BTreeMap<PlayerId, u32>,
    /// Every player tied for the most points.
    pub winners: Vec<PlayerId>,
}

fn pick(players: &[PlayerId], idx: &[usize]) -> Vec<PlayerId> {
    idx.iter().map(|&i| players[i].clone()).collect()
}

/// Teams for segment `segment` (0-based).
pub fn teams_for_segment(players: &[PlayerId], segment: usize) -> (Vec<PlayerId>, Vec<PlayerId>) {
    match players.len() {
        3 => {
            let (a, b) = ROTATION_THREE[segment % 3];
            (pick(players, &a), pick(players, &b))
        }
        4 => {
            let (a, b) = ROTATION_FOUR[segment % 3];
            (pick(players, &a), pick(players, &b))
        }
        n => {
            let mut rotated = players.to_vec();
            rotated.rotate_left(segment % n.max(1));
            let team_b = rotated.split_off(n / 2);
            (rotated, team_b)
        }
    }
}

/// Sum over the holes of the lowest recorded score on the team.
fn best_ball(
    data: &CoreRoundData,
    team: &[PlayerId],
    holes: RangeInclusive<HoleNumber>,
    use_net: bool,
) -> i32 {
    holes
        .map(|hole| {
            team.iter()
                .filter(|p| data.is_played(p, hole))
                .map(|p| data.score(p, hole, use_net))
                .min()
                .unwrap_or(0)
        })
        .sum()
}

pub fn compute_sixes(data: &CoreRoundData, config: &SixesConfig) -> Result<SixesResult, DomainError> {
    if data.players.len() < 3 {
        return Err(DomainError::player_count(format!(
            "sixes requires at least 3 players, got {}",
            data.players.len()
        )));
    }

    let mut points: BTreeMap<PlayerId, u32> =
        data.players.iter().map(|p| (p.clone(), 0)).collect();
    let mut segments = Vec::with_capacity(SEGMENTS.len());

    for (i, holes) in SEGMENTS.iter().enumerate() {
        let (team_a, team_b) = teams_for_segment(&data.players, i);
        let score_a = best_ball(data, &team_a, holes.clone(), config.use_net);
        let score_b = best_ball(data, &team_b, holes.clone(), config.use_net);

        let winner = match score_a.cmp(&score_b) {
            std::cmp::Ordering::Less => Some(Side::A),
            std::cmp::Ordering::Greater => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        };
        let winning_team = match winner {
            Some(Side::A) => team_a.as_slice(),
            Some(Side::B) => team_b.as_slice(),
            None => &[],
        };
        for p in winning_team {
            *points.entry(p.clone()).or_default() += 1;
        }

        segments.push(SixesSegment {
            index: i as u8,
            first_hole: *holes.start(),
            last_hole: *holes.end(),
            team_a,
            team_b,
            score_a,
            score_b,
            winner,
        });
    }

    let best = points.values().copied().max().unwrap_or(0);
    let winners = data
        .players
        .iter()
        .filter(|p| points.get(*p) == Some(&best))
        .cloned()
        .collect();

    Ok(SixesResult {
        segments,
        points,
        winners,
    })
}
