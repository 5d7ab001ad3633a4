//! Nassau: front nine, back nine and overall as three independent bets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::types::{push_payable, CoreRoundData, HoleNumber, Payable, PlayerId};
use crate::domain::wager::WagerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NassauSegment {
    Front,
    Back,
    Overall,
}

impl NassauSegment {
    pub const ALL: [NassauSegment; 3] = [Self::Front, Self::Back, Self::Overall];

    /// Inclusive hole range for this segment on a course of `hole_count` holes.
    pub fn holes(&self, hole_count: u8) -> std::ops::RangeInclusive<HoleNumber> {
        let half = hole_count / 2;
        match self {
            NassauSegment::Front => 1..=half,
            NassauSegment::Back => (half + 1)..=hole_count,
            NassauSegment::Overall => 1..=hole_count,
        }
    }
}

impl fmt::Display for NassauSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NassauSegment::Front => "front",
            NassauSegment::Back => "back",
            NassauSegment::Overall => "overall",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NassauSegmentResult {
    pub segment: NassauSegment,
    pub totals: Vec<(PlayerId, i32)>,
    /// `None` is a push.
    pub winner: Option<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NassauResult {
    pub segments: Vec<NassauSegmentResult>,
    pub payables: Vec<Payable>,
}

/// Unique lowest total, or `None` on a tie for low.
pub(crate) fn unique_low<'a>(totals: impl IntoIterator<Item = (&'a str, i32)>) -> Option<&'a str> {
    let mut best: Option<(&str, i32)> = None;
    let mut tied = false;
    for (player, score) in totals {
        match best {
            Some((_, low)) if score == low => tied = true,
            Some((_, low)) if score > low => {}
            _ => {
                best = Some((player, score));
                tied = false;
            }
        }
    }
    if tied {
        None
    } else {
        best.map(|(p, _)| p)
    }
}

pub fn compute_nassau(data: &CoreRoundData, config: &WagerConfig) -> NassauResult {
    let hole_count = data.hole_count();
    let mut segments = Vec::with_capacity(3);
    let mut payables = Vec::new();

    for segment in NassauSegment::ALL {
        let totals: Vec<(PlayerId, i32)> = data
            .players
            .iter()
            .map(|p| {
                let total = segment
                    .holes(hole_count)
                    .map(|h| data.score(p, h, config.use_net))
                    .sum();
                (p.clone(), total)
            })
            .collect();

        let winner = unique_low(totals.iter().map(|(p, t)| (p.as_str(), *t))).map(str::to_string);

        if let Some(w) = &winner {
            for loser in data.players.iter().filter(|p| *p != w) {
                push_payable(
                    &mut payables,
                    Payable::new(
                        loser.clone(),
                        w.clone(),
                        config.unit_sats,
                        format!("nassau {segment}"),
                    ),
                );
            }
        }

        segments.push(NassauSegmentResult {
            segment,
            totals,
            winner,
        });
    }

    NassauResult { segments, payables }
}
