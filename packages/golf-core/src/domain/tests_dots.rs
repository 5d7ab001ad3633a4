use crate::domain::dots::{compute_dots, hole_dots, Dot, DotsConfig};
use crate::domain::test_gens::round_with;
use crate::domain::types::{CoreRoundData, HoleDetail};
use crate::errors::domain::ValidationKind;

fn with_detail(mut data: CoreRoundData, player: &str, hole: u8, detail: HoleDetail) -> CoreRoundData {
    data.details
        .entry(player.to_string())
        .or_default()
        .insert(hole, detail);
    data
}

#[test]
fn hole_dots_by_score_type() {
    let none = HoleDetail::default();
    assert_eq!(hole_dots(&none, 3, 4), vec![Dot::Birdie]);
    assert_eq!(hole_dots(&none, 2, 4), vec![Dot::EagleOrBetter]);
    assert_eq!(hole_dots(&none, 1, 4), vec![Dot::EagleOrBetter]);
    assert_eq!(hole_dots(&none, 4, 4), Vec::<Dot>::new());
    assert_eq!(hole_dots(&none, 5, 4), Vec::<Dot>::new());
    assert_eq!(hole_dots(&none, 6, 4), vec![Dot::DoubleBogeyOrWorse]);
}

#[test]
fn gir_derived_from_putts_when_not_recorded() {
    // 4 strokes with 2 putts on a par 4: on in 2.
    let putts_only = HoleDetail::with_putts(2);
    assert_eq!(hole_dots(&putts_only, 4, 4), vec![Dot::GreenInRegulation]);

    // Recorded GIR wins over the derivation.
    let recorded = HoleDetail {
        green_in_regulation: Some(false),
        ..HoleDetail::with_putts(2)
    };
    assert!(hole_dots(&recorded, 4, 4).is_empty());
}

#[test]
fn full_house_on_one_hole() {
    let detail = HoleDetail {
        putts: Some(1),
        fairway_hit: Some(true),
        green_in_regulation: Some(true),
    };
    assert_eq!(
        hole_dots(&detail, 3, 4),
        vec![Dot::Fairway, Dot::GreenInRegulation, Dot::OnePutt, Dot::Birdie]
    );
}

#[test]
fn totals_leaderboard_and_pairwise_wagers() {
    // Hole 1 is par 4. ann birdies (2), ben pars (0), cat doubles (-1).
    let data = round_with(&[("ann", &[3]), ("ben", &[4]), ("cat", &[6])]);
    let cfg = DotsConfig {
        wager_per_dot: 5,
        ..DotsConfig::default()
    };
    let result = compute_dots(&data, &cfg).expect("dots settle");

    let totals = result.totals();
    assert_eq!(totals["ann"], 2);
    assert_eq!(totals["ben"], 0);
    assert_eq!(totals["cat"], -1);

    let board: Vec<(&str, u32)> = result
        .leaderboard
        .iter()
        .map(|e| (e.player.as_str(), e.position))
        .collect();
    assert_eq!(board, vec![("ann", 1), ("ben", 2), ("cat", 3)]);

    let pays: Vec<(&str, &str, u64)> = result
        .payables
        .iter()
        .map(|p| (p.from.as_str(), p.to.as_str(), p.amount))
        .collect();
    assert_eq!(
        pays,
        vec![("ben", "ann", 10), ("cat", "ann", 15), ("cat", "ben", 5)]
    );
}

#[test]
fn equal_dots_owe_nothing_and_share_rank() {
    let data = round_with(&[("ann", &[3]), ("ben", &[3])]);
    let result = compute_dots(&data, &DotsConfig::default()).expect("dots settle");
    assert!(result.payables.is_empty());
    assert!(result.leaderboard.iter().all(|e| e.position == 1));
}

#[test]
fn unplayed_holes_contribute_nothing() {
    let data = round_with(&[("ann", &[4]), ("ben", &[])]);
    let data = with_detail(
        data,
        "ben",
        1,
        HoleDetail {
            putts: Some(1),
            fairway_hit: Some(true),
            green_in_regulation: Some(true),
        },
    );
    let result = compute_dots(&data, &DotsConfig::default()).expect("dots settle");
    assert_eq!(result.totals()["ben"], 0);
    assert!(result.players[1].holes.is_empty());
}

#[test]
fn custom_point_values() {
    let data = round_with(&[("ann", &[6])]);
    let cfg = DotsConfig {
        double_bogey_penalty: 3,
        ..DotsConfig::default()
    };
    assert_eq!(compute_dots(&data, &cfg).expect("dots settle").totals()["ann"], -3);
}

#[test]
fn overflowing_wager_is_rejected() {
    let data = round_with(&[("ann", &[3]), ("ben", &[4])]);
    let cfg = DotsConfig {
        wager_per_dot: u64::MAX,
        ..DotsConfig::default()
    };
    let err = compute_dots(&data, &cfg).unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::InvalidConfig);

    let one_dot = DotsConfig {
        birdie: 1,
        wager_per_dot: u64::MAX,
        ..DotsConfig::default()
    };
    let result = compute_dots(&data, &one_dot).expect("single dot fits");
    assert_eq!(result.payables[0].amount, u64::MAX);
}
