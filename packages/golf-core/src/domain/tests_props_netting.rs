//! Property tests for ledger netting.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use crate::domain::netting::{net, net_balances};
use crate::domain::test_gens;
use crate::domain::types::PlayerId;

fn nonzero(balances: BTreeMap<PlayerId, i128>) -> BTreeMap<PlayerId, i128> {
    balances.into_iter().filter(|(_, b)| *b != 0).collect()
}

proptest! {
    #![proptest_config(golf_test_support::proptest_prelude::proptest_config())]

    /// Property: balances always sum to zero.
    #[test]
    fn prop_balances_sum_to_zero(ledger in test_gens::ledger()) {
        prop_assert_eq!(net_balances(&ledger).values().sum::<i128>(), 0);
    }

    /// Property: netting conserves each player's net position.
    #[test]
    fn prop_netting_conserves_balances(ledger in test_gens::ledger()) {
        let transfers = net(&ledger);
        prop_assert_eq!(
            nonzero(net_balances(&transfers)),
            nonzero(net_balances(&ledger))
        );
    }

    /// Property: at most (nonzero parties - 1) transfers, all positive, none self-directed.
    #[test]
    fn prop_netting_is_compact(ledger in test_gens::ledger()) {
        let parties = nonzero(net_balances(&ledger)).len();
        let transfers = net(&ledger);
        prop_assert!(transfers.len() <= parties.saturating_sub(1),
            "{} transfers for {} parties", transfers.len(), parties);
        for t in &transfers {
            prop_assert!(t.amount > 0);
            prop_assert_ne!(&t.from, &t.to);
        }
    }

    /// Property: a player only ever pays or receives in the netted ledger, never both.
    #[test]
    fn prop_no_player_both_pays_and_receives(ledger in test_gens::ledger()) {
        let transfers = net(&ledger);
        let payers: BTreeSet<&str> = transfers.iter().map(|t| t.from.as_str()).collect();
        let payees: BTreeSet<&str> = transfers.iter().map(|t| t.to.as_str()).collect();
        prop_assert!(payers.is_disjoint(&payees));
    }

    /// Property: netting an already-netted ledger changes nothing but may reorder.
    #[test]
    fn prop_netting_is_stable(ledger in test_gens::ledger()) {
        let once = net(&ledger);
        let twice = net(&once);
        prop_assert_eq!(nonzero(net_balances(&once)), nonzero(net_balances(&twice)));
        prop_assert_eq!(once.len(), twice.len());
    }
}

mod examples {
    use crate::domain::netting::{net, net_balances, NET_MEMO};
    use crate::domain::types::Payable;

    fn p(from: &str, to: &str, amount: u64) -> Payable {
        Payable::new(from, to, amount, "test")
    }

    #[test]
    fn triangle_collapses_to_nothing() {
        let ledger = vec![p("a", "b", 10), p("b", "c", 10), p("c", "a", 10)];
        assert!(net(&ledger).is_empty());
    }

    #[test]
    fn chain_collapses_to_single_transfer() {
        let ledger = vec![p("a", "b", 30), p("b", "c", 30)];
        let out = net(&ledger);
        assert_eq!(out, vec![Payable::new("a", "c", 30, NET_MEMO)]);
    }

    #[test]
    fn largest_debtor_pays_largest_creditor_first() {
        // a: -70, b: -30, c: +60, d: +40
        let ledger = vec![p("a", "c", 60), p("a", "d", 10), p("b", "d", 30)];
        let out = net(&ledger);
        let summary: Vec<(&str, &str, u64)> = out
            .iter()
            .map(|t| (t.from.as_str(), t.to.as_str(), t.amount))
            .collect();
        assert_eq!(summary, vec![("a", "c", 60), ("b", "d", 30), ("a", "d", 10)]);
    }

    #[test]
    fn ties_break_by_player_id() {
        let ledger = vec![p("z", "y", 5), p("b", "a", 5)];
        let out = net(&ledger);
        assert_eq!(out[0].from, "b");
        assert_eq!(out[0].to, "a");
        assert_eq!(out[1].from, "z");
    }

    #[test]
    fn amounts_beyond_i64_keep_their_sign() {
        let ledger = vec![p("a", "b", u64::MAX), p("c", "b", 1)];
        let balances = net_balances(&ledger);
        assert_eq!(balances["a"], -i128::from(u64::MAX));
        assert_eq!(balances["b"], i128::from(u64::MAX) + 1);

        let out = net(&ledger);
        assert_eq!(out[0], Payable::new("a", "b", u64::MAX, NET_MEMO));
        assert_eq!(out[1], Payable::new("c", "b", 1, NET_MEMO));
    }

    #[test]
    fn balance_past_u64_is_paid_in_chunks() {
        let ledger = vec![p("a", "b", u64::MAX), p("a", "b", 2)];
        let out = net(&ledger);
        let amounts: Vec<u64> = out.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![u64::MAX, 2]);
        assert!(out.iter().all(|t| t.from == "a" && t.to == "b"));
    }

    #[test]
    fn ignores_zero_and_self_payables() {
        let ledger = vec![p("a", "a", 50), p("a", "b", 0)];
        assert!(net(&ledger).is_empty());
    }
}
