//! Reference round used by tests and the simulator's demo mode.

use std::collections::BTreeMap;

use crate::domain::types::{Course, CoreRoundData, PlayerId};

pub const REFERENCE_PARS: [u8; 18] = [4, 5, 3, 4, 4, 4, 3, 5, 4, 4, 4, 3, 5, 4, 4, 3, 4, 5];
pub const REFERENCE_STROKE_INDEX: [u8; 18] =
    [7, 1, 17, 3, 11, 5, 15, 9, 13, 8, 2, 16, 4, 12, 6, 18, 10, 14];

/// Gross 73, course handicap 4.
pub const ALICE_STROKES: [u32; 18] = [4, 6, 3, 4, 5, 4, 2, 5, 4, 4, 4, 3, 5, 4, 4, 3, 4, 5];
/// Gross 93, course handicap 10.
pub const BOB_STROKES: [u32; 18] = [5, 6, 4, 5, 5, 5, 4, 6, 5, 5, 6, 4, 6, 5, 5, 4, 5, 8];
/// Gross 58, scratch.
pub const CAROL_STROKES: [u32; 18] = [3, 4, 3, 3, 3, 3, 3, 4, 3, 3, 3, 3, 4, 3, 3, 3, 3, 4];

pub fn reference_course() -> Course {
    Course::from_pars_and_indices(&REFERENCE_PARS, &REFERENCE_STROKE_INDEX)
}

pub fn reference_handicaps() -> BTreeMap<PlayerId, f64> {
    BTreeMap::from([
        ("alice".to_string(), 4.0),
        ("bob".to_string(), 10.0),
        ("carol".to_string(), 0.0),
    ])
}

/// Three-player round with pops already allocated from [`reference_handicaps`].
pub fn reference_round() -> CoreRoundData {
    CoreRoundData::new(
        vec!["alice".into(), "bob".into(), "carol".into()],
        reference_course(),
    )
    .with_strokes("alice", &ALICE_STROKES)
    .with_strokes("bob", &BOB_STROKES)
    .with_strokes("carol", &CAROL_STROKES)
    .with_handicaps(&reference_handicaps())
}
