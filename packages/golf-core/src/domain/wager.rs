use serde::{Deserialize, Serialize};

use crate::domain::payout::SplitPolicy;

/// Settings shared by the Nassau and Skins processors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WagerConfig {
    pub use_net: bool,
    /// Stake per match (Nassau) or per skin (Skins).
    pub unit_sats: u64,
    /// Skins only: largest number of skins a carried pot may hold before it is voided.
    pub carry_cap: Option<u32>,
    /// Skins only: how a pot that does not divide among the losers is split.
    pub split_policy: SplitPolicy,
}

impl Default for WagerConfig {
    fn default() -> Self {
        Self {
            use_net: false,
            unit_sats: 100,
            carry_cap: None,
            split_policy: SplitPolicy::default(),
        }
    }
}

impl WagerConfig {
    pub fn with_unit(unit_sats: u64) -> Self {
        Self {
            unit_sats,
            ..Self::default()
        }
    }
}
