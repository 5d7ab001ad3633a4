use crate::domain::netting::net_balances;
use crate::domain::payout::SplitPolicy;
use crate::domain::skins::{compute_skins, SkinOutcome};
use crate::domain::test_gens::round_with;
use crate::domain::wager::WagerConfig;
use crate::errors::domain::ValidationKind;

const EVEN: [u32; 18] = [4; 18];

#[test]
fn all_ties_produce_no_payables() {
    let data = round_with(&[("ann", &EVEN), ("ben", &EVEN), ("cat", &EVEN)]);
    let result = compute_skins(&data, &WagerConfig::with_unit(10)).expect("ok");
    assert!(result.payables.is_empty());
    assert_eq!(result.unresolved_carry, 18);
    assert!(result.skins_won.values().all(|&s| s == 0));
}

#[test]
fn win_after_two_ties_pays_three_skins() {
    let mut ann = EVEN;
    ann[2] = 3;
    let data = round_with(&[("ann", &ann), ("ben", &EVEN), ("cat", &EVEN)]);
    let result = compute_skins(&data, &WagerConfig::with_unit(10)).expect("ok");

    assert_eq!(result.holes[0].outcome, SkinOutcome::Carried { carry: 2 });
    assert_eq!(result.holes[1].outcome, SkinOutcome::Carried { carry: 3 });
    assert_eq!(
        result.holes[2].outcome,
        SkinOutcome::Won {
            player: "ann".into(),
            skins: 3,
            pot: 30
        }
    );
    let to_ann: u64 = result
        .payables
        .iter()
        .filter(|p| p.to == "ann")
        .map(|p| p.amount)
        .sum();
    assert_eq!(to_ann, 30);
    assert_eq!(result.skins_won["ann"], 3);
    // Holes 4-18 all tie and stay carried.
    assert_eq!(result.unresolved_carry, 15);
}

#[test]
fn uneven_pot_split_follows_policy() {
    let mut ann = EVEN;
    ann[0] = 3;
    let data = round_with(&[("ann", &ann), ("ben", &EVEN), ("cat", &EVEN)]);

    let exact = compute_skins(&data, &WagerConfig::with_unit(25)).expect("ok");
    let amounts: Vec<u64> = exact.payables.iter().map(|p| p.amount).collect();
    assert_eq!(amounts, vec![13, 12]);

    let floor = WagerConfig {
        split_policy: SplitPolicy::Floor,
        ..WagerConfig::with_unit(25)
    };
    let floored = compute_skins(&data, &floor).expect("ok");
    let amounts: Vec<u64> = floored.payables.iter().map(|p| p.amount).collect();
    assert_eq!(amounts, vec![12, 12]);
}

#[test]
fn carry_cap_voids_pot() {
    // Holes 1-3 tie, hole 4 won by ben.
    let mut ben = EVEN;
    ben[3] = 3;
    let data = round_with(&[("ann", &EVEN), ("ben", &ben)]);
    let cfg = WagerConfig {
        carry_cap: Some(2),
        ..WagerConfig::with_unit(10)
    };
    let result = compute_skins(&data, &cfg).expect("ok");

    assert_eq!(result.holes[0].outcome, SkinOutcome::Carried { carry: 2 });
    assert_eq!(result.holes[1].outcome, SkinOutcome::Voided { skins: 2 });
    assert_eq!(result.holes[2].outcome, SkinOutcome::Carried { carry: 2 });
    assert_eq!(
        result.holes[3].outcome,
        SkinOutcome::Won {
            player: "ben".into(),
            skins: 2,
            pot: 20
        }
    );
    assert_eq!(net_balances(&result.payables)["ben"], 20);
}

#[test]
fn zero_carry_cap_is_rejected() {
    let data = round_with(&[("ann", &EVEN), ("ben", &EVEN)]);
    let cfg = WagerConfig {
        carry_cap: Some(0),
        ..WagerConfig::default()
    };
    let err = compute_skins(&data, &cfg).unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::InvalidConfig);
}

#[test]
fn incomplete_holes_are_skipped_without_touching_carry() {
    // Hole 1 tie, hole 2 missing for ben, hole 3 won by ann with 2 skins.
    let data = round_with(&[("ann", &[4, 4, 3]), ("ben", &[4, 0, 4])]);
    let result = compute_skins(&data, &WagerConfig::with_unit(5)).expect("ok");
    assert_eq!(result.holes[1].outcome, SkinOutcome::Skipped);
    assert_eq!(
        result.holes[2].outcome,
        SkinOutcome::Won {
            player: "ann".into(),
            skins: 2,
            pot: 10
        }
    );
    assert_eq!(result.payables.len(), 1);
    assert_eq!(result.payables[0].from, "ben");
}

#[test]
fn carried_pot_that_overflows_is_rejected() {
    let mut ann = EVEN;
    ann[1] = 3;
    let data = round_with(&[("ann", &ann), ("ben", &EVEN)]);

    // One skin at the maximum unit fits; two carried skins do not.
    let mut first_hole = ann;
    first_hole[0] = 3;
    let single = round_with(&[("ann", &first_hole), ("ben", &EVEN)]);
    let result = compute_skins(&single, &WagerConfig::with_unit(u64::MAX)).expect("one skin fits");
    assert_eq!(result.payables[0].amount, u64::MAX);

    let err = compute_skins(&data, &WagerConfig::with_unit(u64::MAX)).unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::InvalidConfig);
}
