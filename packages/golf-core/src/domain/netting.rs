//! Debt netting: collapse a round's combined ledger into settling transfers.
//!
//! Call [`net`] once over the union of every ledger for a round. Netting a
//! partial ledger and then netting the remainder separately does not give
//! the same transfers.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};

use tracing::debug;

use crate::domain::types::{Payable, PlayerId};

pub const NET_MEMO: &str = "net settlement";

/// Signed balance in sats. Wide enough that any `u64` payable fits with its sign.
pub type Balance = i128;

/// Signed balance per party: received minus paid. Always sums to zero.
pub fn net_balances(payables: &[Payable]) -> BTreeMap<PlayerId, Balance> {
    let mut balances: BTreeMap<PlayerId, Balance> = BTreeMap::new();
    for p in payables.iter().filter(|p| p.amount > 0 && p.from != p.to) {
        let amount = Balance::from(p.amount);
        *balances.entry(p.to.clone()).or_default() += amount;
        *balances.entry(p.from.clone()).or_default() -= amount;
    }
    debug_assert_eq!(balances.values().sum::<Balance>(), 0);
    balances
}

/// Heap entry: larger magnitude first, then lower player id.
#[derive(Debug, PartialEq, Eq)]
struct Outstanding {
    amount: u128,
    player: Reverse<PlayerId>,
}

impl Ord for Outstanding {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount
            .cmp(&other.amount)
            .then_with(|| self.player.cmp(&other.player))
    }
}

impl PartialOrd for Outstanding {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Consolidate payables into at most (parties with nonzero balance − 1) transfers.
///
/// Each step matches the largest debtor with the largest creditor and moves
/// `min(credit, debt)`; whichever side reaches zero leaves its heap. A balance
/// beyond `u64::MAX` is paid in more than one transfer.
pub fn net(payables: &[Payable]) -> Vec<Payable> {
    let mut creditors = BinaryHeap::new();
    let mut debtors = BinaryHeap::new();
    for (player, balance) in net_balances(payables) {
        let entry = Outstanding {
            amount: balance.unsigned_abs(),
            player: Reverse(player),
        };
        match balance.cmp(&0) {
            Ordering::Greater => creditors.push(entry),
            Ordering::Less => debtors.push(entry),
            Ordering::Equal => {}
        }
    }

    let mut transfers = Vec::new();
    while let (Some(mut credit), Some(mut debt)) = (creditors.pop(), debtors.pop()) {
        let amount = credit.amount.min(debt.amount).min(u128::from(u64::MAX));
        transfers.push(Payable::new(
            debt.player.0.clone(),
            credit.player.0.clone(),
            u64::try_from(amount).unwrap_or(u64::MAX),
            NET_MEMO,
        ));
        credit.amount -= amount;
        debt.amount -= amount;
        if credit.amount > 0 {
            creditors.push(credit);
        }
        if debt.amount > 0 {
            debtors.push(debt);
        }
    }

    debug!(
        input = payables.len(),
        transfers = transfers.len(),
        "ledger netted"
    );
    transfers
}
