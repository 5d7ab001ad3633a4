// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::fixtures::reference_course;
use crate::domain::types::{CoreRoundData, Payable, PlayerId};

pub const NAMES: [&str; 6] = ["ann", "ben", "cat", "dan", "eve", "fay"];

/// Generate a PlayerId from a small fixed pool so payables collide often.
pub fn player_id() -> impl Strategy<Value = PlayerId> {
    (0..NAMES.len()).prop_map(|i| NAMES[i].to_string())
}

/// Generate a single payable; self-payments and zero amounts included on purpose.
pub fn payable() -> impl Strategy<Value = Payable> {
    (player_id(), player_id(), 0u64..=5_000).prop_map(|(from, to, amount)| Payable {
        from,
        to,
        amount,
        memo: "gen".into(),
    })
}

pub fn ledger() -> impl Strategy<Value = Vec<Payable>> {
    prop::collection::vec(payable(), 0..40)
}

/// Gross score for one hole: mostly realistic, occasionally unplayed (0).
pub fn hole_strokes() -> impl Strategy<Value = u32> {
    prop_oneof![
        1 => Just(0u32),
        9 => 2u32..=9u32,
    ]
}

/// A full 18-hole round on the reference course for `count` players.
pub fn round(count: usize) -> impl Strategy<Value = CoreRoundData> {
    prop::collection::vec(prop::collection::vec(hole_strokes(), 18), count).prop_map(
        move |cards| {
            let players: Vec<PlayerId> = NAMES[..count].iter().map(|s| s.to_string()).collect();
            let mut data = CoreRoundData::new(players.clone(), reference_course());
            for (player, card) in players.iter().zip(&cards) {
                data = data.with_strokes(player, card);
            }
            data
        },
    )
}

/// Like [`round`] but every hole has a score.
pub fn complete_round(count: usize) -> impl Strategy<Value = CoreRoundData> {
    prop::collection::vec(prop::collection::vec(2u32..=9u32, 18), count).prop_map(move |cards| {
        let players: Vec<PlayerId> = NAMES[..count].iter().map(|s| s.to_string()).collect();
        let mut data = CoreRoundData::new(players.clone(), reference_course());
        for (player, card) in players.iter().zip(&cards) {
            data = data.with_strokes(player, card);
        }
        data
    })
}

/// Fixed round on the reference course from literal scorecards.
pub fn round_with(cards: &[(&str, &[u32])]) -> CoreRoundData {
    let players = cards.iter().map(|(p, _)| p.to_string()).collect();
    cards
        .iter()
        .fold(CoreRoundData::new(players, reference_course()), |data, (p, card)| {
            data.with_strokes(p, card)
        })
}
