//! Integer pot splitting.

use serde::{Deserialize, Serialize};

/// How a pot that does not divide evenly is handed out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Every share is `amount / parts`; the remainder is dropped.
    Floor,
    /// The first `amount % parts` shares carry one extra unit so shares sum to `amount`.
    #[default]
    DistributeRemainder,
}

/// Split `amount` into `parts` integer shares, in recipient order.
pub fn split_evenly(amount: u64, parts: usize, policy: SplitPolicy) -> Vec<u64> {
    if parts == 0 {
        return Vec::new();
    }
    let n = parts as u64;
    let base = amount / n;
    let remainder = amount % n;
    (0..n)
        .map(|i| match policy {
            SplitPolicy::Floor => base,
            SplitPolicy::DistributeRemainder => base + u64::from(i < remainder),
        })
        .collect()
}
