//! Handicap stroke ("pops") allocation.
//!
//! This is the only place pops are computed; every caller that needs
//! per-hole strokes goes through [`allocate_pops`].

use std::collections::BTreeMap;

use crate::domain::types::{Course, HoleNumber};

/// Strokes distributed per full cycle through the stroke-index table.
pub const STROKE_CYCLE: u32 = 18;

/// Course handicap as a whole number of strokes. Fractions truncate, negatives clamp to 0.
pub fn whole_handicap(handicap: f64) -> u32 {
    if !handicap.is_finite() || handicap <= 0.0 {
        return 0;
    }
    handicap.trunc() as u32
}

/// Strokes received on a single hole of the given stroke index.
pub fn pops_for_stroke_index(handicap: u32, stroke_index: u8) -> i32 {
    let base = handicap / STROKE_CYCLE;
    let extra = u32::from(u32::from(stroke_index) <= handicap % STROKE_CYCLE);
    (base + extra) as i32
}

/// Allocate handicap strokes across every hole of the course.
///
/// `pops[h] = floor(H / 18) + (1 if stroke_index(h) <= H mod 18)`.
pub fn allocate_pops(handicap: f64, course: &Course) -> BTreeMap<HoleNumber, i32> {
    let hcp = whole_handicap(handicap);
    course
        .hole_numbers()
        .map(|hole| (hole, pops_for_stroke_index(hcp, course.stroke_index(hole))))
        .collect()
}
