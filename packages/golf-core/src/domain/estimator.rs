//! Shot-detail estimation for rounds recorded without putts or fairways.
//!
//! Estimation is never performed by the engines. Callers that want Dots or
//! Snake results on a strokes-only scorecard fill the gaps up front with
//! [`fill_missing_details`], so every engine stays a deterministic function
//! of its snapshot.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::types::{CoreRoundData, Hole, HoleDetail};

/// Source of fabricated per-hole detail.
pub trait ShotEstimator {
    fn estimate(&mut self, player: &str, hole: &Hole, strokes: u32) -> HoleDetail;
}

/// Seedable estimator; the same seed always produces the same details.
pub struct SeededEstimator {
    rng: ChaCha8Rng,
}

impl SeededEstimator {
    /// Share of tee shots that find the fairway on par 4s and 5s.
    const FAIRWAY_RATE: f64 = 0.55;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn putts(&mut self, strokes: u32) -> u8 {
        if strokes <= 1 {
            return 0;
        }
        // Roughly 1 in 5 one-putts and 1 in 8 three-putts.
        let roll: f64 = self.rng.random();
        let putts = if roll < 0.20 {
            1
        } else if roll < 0.875 {
            2
        } else {
            3
        };
        putts.min(strokes - 1) as u8
    }
}

impl ShotEstimator for SeededEstimator {
    fn estimate(&mut self, _player: &str, hole: &Hole, strokes: u32) -> HoleDetail {
        let putts = self.putts(strokes);
        let fairway_hit = if hole.par >= 4 {
            self.rng.random_bool(Self::FAIRWAY_RATE)
        } else {
            false
        };
        let green_in_regulation = (strokes as i32) - i32::from(putts) <= i32::from(hole.par) - 2;
        HoleDetail {
            putts: Some(putts),
            fairway_hit: Some(fairway_hit),
            green_in_regulation: Some(green_in_regulation),
        }
    }
}

/// Return a copy of `data` with unrecorded detail fields of played holes estimated.
///
/// Recorded values are kept as-is.
pub fn fill_missing_details(data: &CoreRoundData, estimator: &mut dyn ShotEstimator) -> CoreRoundData {
    let mut filled = data.clone();
    for player in &data.players {
        for hole_no in data.course.hole_numbers() {
            let strokes = data.gross(player, hole_no);
            if strokes == 0 {
                continue;
            }
            let recorded = data.detail(player, hole_no);
            if recorded.is_complete() {
                continue;
            }
            let hole = data.course.holes.get(&hole_no).cloned().unwrap_or_else(|| {
                Hole::new(
                    hole_no,
                    data.course.par(hole_no) as u8,
                    data.course.stroke_index(hole_no),
                )
            });
            let guess = estimator.estimate(player, &hole, strokes as u32);
            let merged = HoleDetail {
                putts: recorded.putts.or(guess.putts),
                fairway_hit: recorded.fairway_hit.or(guess.fairway_hit),
                green_in_regulation: recorded.green_in_regulation.or(guess.green_in_regulation),
            };
            filled
                .details
                .entry(player.clone())
                .or_default()
                .insert(hole_no, merged);
        }
    }
    filled
}
