//! Two-player match play.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::types::{CoreRoundData, HoleNumber, PlayerId};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchPlayConfig {
    pub use_net: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player: PlayerId,
    pub holes_won: u8,
    pub holes_lost: u8,
    pub holes_tied: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHole {
    pub hole: HoleNumber,
    pub scores: [i32; 2],
    /// `None` when the hole was halved.
    pub winner: Option<PlayerId>,
}

/// Point at which the match became mathematically decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub hole: HoleNumber,
    pub margin: u8,
    pub holes_remaining: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPlayResult {
    pub records: [MatchRecord; 2],
    pub holes: Vec<MatchHole>,
    pub winner: Option<PlayerId>,
    /// Final absolute difference in holes won.
    pub margin: u8,
    /// Set when the match was decided with holes still to play.
    pub decided: Option<Decision>,
    pub summary: String,
}

/// Match state at an intermediate hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningMatchStatus {
    pub leader: Option<PlayerId>,
    pub margin: u8,
    pub through_hole: HoleNumber,
    pub holes_remaining: u8,
    /// Leader cannot be caught, or no holes remain.
    pub is_complete: bool,
    /// Leader is up by exactly the number of holes remaining.
    pub dormie: bool,
}

fn require_two_players(data: &CoreRoundData) -> Result<[&str; 2], DomainError> {
    match data.players.as_slice() {
        [a, b] => Ok([a.as_str(), b.as_str()]),
        other => Err(DomainError::player_count(format!(
            "match play requires exactly 2 players, got {}",
            other.len()
        ))),
    }
}

struct Tally {
    won: [u8; 2],
    tied: u8,
}

impl Tally {
    fn contested(&self) -> u8 {
        self.won[0] + self.won[1] + self.tied
    }

    /// Holes not yet contested, including skipped holes before the current one.
    fn remaining(&self, total_holes: HoleNumber) -> u8 {
        total_holes.saturating_sub(self.contested())
    }

    fn margin(&self) -> u8 {
        self.won[0].abs_diff(self.won[1])
    }

    fn leader(&self) -> Option<usize> {
        match self.won[0].cmp(&self.won[1]) {
            std::cmp::Ordering::Greater => Some(0),
            std::cmp::Ordering::Less => Some(1),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Walk the contested holes up to and including `through`, feeding each to `on_hole`.
fn play_holes(
    data: &CoreRoundData,
    players: [&str; 2],
    config: &MatchPlayConfig,
    through: HoleNumber,
    mut on_hole: impl FnMut(HoleNumber, [i32; 2], Option<usize>, &Tally),
) -> Tally {
    let mut tally = Tally {
        won: [0, 0],
        tied: 0,
    };
    for hole in data.course.hole_numbers().take_while(|&h| h <= through) {
        // A hole counts only once both players have a score on it.
        if !players.iter().all(|p| data.is_played(p, hole)) {
            continue;
        }
        let scores = [
            data.score(players[0], hole, config.use_net),
            data.score(players[1], hole, config.use_net),
        ];
        let winner = match scores[0].cmp(&scores[1]) {
            std::cmp::Ordering::Less => Some(0),
            std::cmp::Ordering::Greater => Some(1),
            std::cmp::Ordering::Equal => None,
        };
        match winner {
            Some(i) => tally.won[i] += 1,
            None => tally.tied += 1,
        }
        on_hole(hole, scores, winner, &tally);
    }
    tally
}

pub fn compute_match_play(
    data: &CoreRoundData,
    config: &MatchPlayConfig,
) -> Result<MatchPlayResult, DomainError> {
    let players = require_two_players(data)?;
    let total_holes = data.hole_count();

    let mut holes = Vec::new();
    let mut decided: Option<(usize, Decision)> = None;

    let tally = play_holes(data, players, config, total_holes, |hole, scores, winner, tally| {
        holes.push(MatchHole {
            hole,
            scores,
            winner: winner.map(|i| players[i].to_string()),
        });
        let remaining = tally.remaining(total_holes);
        if decided.is_none() && remaining > 0 && tally.margin() > remaining {
            if let Some(leader) = tally.leader() {
                decided = Some((
                    leader,
                    Decision {
                        hole,
                        margin: tally.margin(),
                        holes_remaining: remaining,
                    },
                ));
            }
        }
    });

    let records = [
        MatchRecord {
            player: players[0].to_string(),
            holes_won: tally.won[0],
            holes_lost: tally.won[1],
            holes_tied: tally.tied,
        },
        MatchRecord {
            player: players[1].to_string(),
            holes_won: tally.won[1],
            holes_lost: tally.won[0],
            holes_tied: tally.tied,
        },
    ];

    let winner = tally.leader().map(|i| players[i].to_string());
    let summary = match (&decided, &winner) {
        (Some((leader, d)), _) => format!(
            "{} wins {} & {}",
            players[*leader], d.margin, d.holes_remaining
        ),
        (None, Some(w)) => format!("{w} wins {} up", tally.margin()),
        (None, None) => "Match tied".to_string(),
    };
    debug!(%summary, "match play complete");

    Ok(MatchPlayResult {
        records,
        holes,
        winner,
        margin: tally.margin(),
        decided: decided.map(|(_, d)| d),
        summary,
    })
}

/// Status of the match after `through_hole` with the same early-decision rule as the final result.
pub fn match_status_through(
    data: &CoreRoundData,
    config: &MatchPlayConfig,
    through_hole: HoleNumber,
) -> Result<RunningMatchStatus, DomainError> {
    let players = require_two_players(data)?;
    let total_holes = data.hole_count();
    let through = through_hole.min(total_holes);

    let tally = play_holes(data, players, config, through, |_, _, _, _| {});
    let margin = tally.margin();
    let holes_remaining = tally.remaining(total_holes);

    Ok(RunningMatchStatus {
        leader: tally.leader().map(|i| players[i].to_string()),
        margin,
        through_hole: through,
        holes_remaining,
        is_complete: holes_remaining == 0 || margin > holes_remaining,
        dormie: holes_remaining > 0 && margin == holes_remaining,
    })
}
