//! Property tests for the scoring engines.

use proptest::prelude::*;

use crate::domain::match_play::{compute_match_play, MatchPlayConfig};
use crate::domain::skins::compute_skins;
use crate::domain::stroke_play::{compute_stroke_play, StrokePlayConfig};
use crate::domain::test_gens;
use crate::domain::wager::WagerConfig;

proptest! {
    #![proptest_config(golf_test_support::proptest_prelude::proptest_config())]

    /// Property: gross total is the sum of per-hole gross scores.
    #[test]
    fn prop_gross_total_is_sum(data in (2usize..=5).prop_flat_map(test_gens::round)) {
        let result = compute_stroke_play(&data, &StrokePlayConfig::default());
        for totals in &result.players {
            let sum: i32 = totals.holes.iter().map(|h| h.gross).sum();
            prop_assert_eq!(totals.gross_total, sum);
        }
    }

    /// Property: leaderboard is non-decreasing with competition positions.
    #[test]
    fn prop_leaderboard_sorted_with_competition_rank(
        data in (2usize..=6).prop_flat_map(test_gens::round),
        use_net in any::<bool>(),
    ) {
        let result = compute_stroke_play(&data, &StrokePlayConfig { use_net, max_score_rule: None });
        let board = &result.leaderboard;
        for pair in board.windows(2) {
            prop_assert!(pair[0].score <= pair[1].score);
        }
        for entry in board {
            let better = board.iter().filter(|e| e.score < entry.score).count() as u32;
            prop_assert_eq!(entry.position, better + 1);
        }
    }

    /// Property: in a complete match every hole is won, lost or tied, and records mirror.
    #[test]
    fn prop_match_records_mirror(data in test_gens::complete_round(2), use_net in any::<bool>()) {
        let result = compute_match_play(&data, &MatchPlayConfig { use_net })
            .expect("two players");
        let [a, b] = &result.records;
        prop_assert_eq!(a.holes_won + a.holes_lost + a.holes_tied, 18);
        prop_assert_eq!(a.holes_won, b.holes_lost);
        prop_assert_eq!(a.holes_lost, b.holes_won);
        prop_assert_eq!(a.holes_tied, b.holes_tied);
    }

    /// Property: skins pay out exactly carry * unit on every won hole.
    #[test]
    fn prop_skins_pot_fully_paid(data in (2usize..=5).prop_flat_map(test_gens::complete_round), unit in 1u64..=500) {
        let result = compute_skins(&data, &WagerConfig::with_unit(unit)).expect("valid config");
        let paid: u64 = result.payables.iter().map(|p| p.amount).sum();
        let won: u64 = result.skins_won.values().map(|&s| u64::from(s) * unit).sum();
        prop_assert_eq!(paid, won);
    }
}
