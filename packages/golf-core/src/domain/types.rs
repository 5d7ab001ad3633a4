//! Core round data shared by every engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::handicap::allocate_pops;

pub type PlayerId = String;
pub type HoleNumber = u8;

/// Stroke/putt map keyed by player then hole.
pub type PerHole<T> = BTreeMap<PlayerId, BTreeMap<HoleNumber, T>>;

pub const REGULATION_HOLES: u8 = 18;
pub const DEFAULT_PAR: i32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    pub number: HoleNumber,
    pub par: u8,
    /// Difficulty rank, 1 = hardest.
    pub stroke_index: u8,
}

impl Hole {
    pub fn new(number: HoleNumber, par: u8, stroke_index: u8) -> Self {
        Self {
            number,
            par,
            stroke_index,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub holes: BTreeMap<HoleNumber, Hole>,
}

impl Course {
    /// Build a course from per-hole pars and stroke indices, numbering holes from 1.
    pub fn from_pars_and_indices(pars: &[u8], stroke_indices: &[u8]) -> Self {
        let holes = pars
            .iter()
            .zip(stroke_indices)
            .enumerate()
            .map(|(i, (&par, &si))| {
                let number = (i + 1) as HoleNumber;
                (number, Hole::new(number, par, si))
            })
            .collect();
        Self { holes }
    }

    /// Par for a hole; unknown holes default to 4.
    pub fn par(&self, hole: HoleNumber) -> i32 {
        self.holes
            .get(&hole)
            .map(|h| i32::from(h.par))
            .filter(|&p| p > 0)
            .unwrap_or(DEFAULT_PAR)
    }

    /// Stroke index for a hole; unknown holes default to the hole number.
    pub fn stroke_index(&self, hole: HoleNumber) -> u8 {
        self.holes
            .get(&hole)
            .map(|h| h.stroke_index)
            .filter(|&si| si > 0)
            .unwrap_or(hole)
    }

    /// Number of holes in the round. A course without hole data is treated as 18 holes.
    pub fn hole_count(&self) -> u8 {
        let defined = self.holes.keys().copied().max().unwrap_or(0);
        if defined == 0 {
            REGULATION_HOLES
        } else {
            defined
        }
    }

    pub fn hole_numbers(&self) -> impl Iterator<Item = HoleNumber> {
        1..=self.hole_count()
    }
}

/// Optional per-shot detail for a hole. Absent fields mean "not recorded".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub putts: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fairway_hit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green_in_regulation: Option<bool>,
}

impl HoleDetail {
    pub fn with_putts(putts: u8) -> Self {
        Self {
            putts: Some(putts),
            ..Self::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.putts.is_some() && self.fairway_hit.is_some() && self.green_in_regulation.is_some()
    }
}

/// Immutable snapshot of one round, rebuilt by the caller whenever a score is entered.
///
/// A hole without a recorded stroke count is unplayed and scores 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreRoundData {
    pub players: Vec<PlayerId>,
    #[serde(default)]
    pub strokes: PerHole<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pops: Option<PerHole<i32>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: PerHole<HoleDetail>,
    #[serde(default)]
    pub course: Course,
}

impl CoreRoundData {
    pub fn new(players: Vec<PlayerId>, course: Course) -> Self {
        Self {
            players,
            course,
            ..Self::default()
        }
    }

    /// Record a gross score, returning the extended snapshot.
    pub fn with_strokes(mut self, player: &str, strokes: &[u32]) -> Self {
        let row = self.strokes.entry(player.to_string()).or_default();
        for (i, &s) in strokes.iter().enumerate() {
            if s > 0 {
                row.insert((i + 1) as HoleNumber, s);
            }
        }
        self
    }

    /// Replace the pops map with the canonical allocation for each player's handicap.
    pub fn with_handicaps(mut self, handicaps: &BTreeMap<PlayerId, f64>) -> Self {
        let pops = handicaps
            .iter()
            .map(|(player, &hcp)| (player.clone(), allocate_pops(hcp, &self.course)))
            .collect();
        self.pops = Some(pops);
        self
    }

    pub fn gross(&self, player: &str, hole: HoleNumber) -> i32 {
        self.strokes
            .get(player)
            .and_then(|row| row.get(&hole))
            .map(|&s| s as i32)
            .unwrap_or(0)
    }

    pub fn pops(&self, player: &str, hole: HoleNumber) -> i32 {
        self.pops
            .as_ref()
            .and_then(|p| p.get(player))
            .and_then(|row| row.get(&hole))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_played(&self, player: &str, hole: HoleNumber) -> bool {
        self.gross(player, hole) > 0
    }

    /// Gross score, or gross minus pops when `use_net` is set. Unplayed holes score 0.
    pub fn score(&self, player: &str, hole: HoleNumber, use_net: bool) -> i32 {
        let gross = self.gross(player, hole);
        if gross == 0 || !use_net {
            return gross;
        }
        gross - self.pops(player, hole)
    }

    pub fn detail(&self, player: &str, hole: HoleNumber) -> HoleDetail {
        self.details
            .get(player)
            .and_then(|row| row.get(&hole))
            .copied()
            .unwrap_or_default()
    }

    /// True when every player in the round has a recorded score on the hole.
    pub fn all_played(&self, hole: HoleNumber) -> bool {
        self.players.iter().all(|p| self.is_played(p, hole))
    }

    pub fn hole_count(&self) -> u8 {
        self.course.hole_count()
    }
}

/// One payment obligation, in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payable {
    pub from: PlayerId,
    pub to: PlayerId,
    pub amount: u64,
    pub memo: String,
}

impl Payable {
    pub fn new(
        from: impl Into<PlayerId>,
        to: impl Into<PlayerId>,
        amount: u64,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
            memo: memo.into(),
        }
    }
}

/// Push a payable unless it is empty or self-directed.
pub(crate) fn push_payable(ledger: &mut Vec<Payable>, payable: Payable) {
    if payable.amount > 0 && payable.from != payable.to {
        ledger.push(payable);
    }
}
