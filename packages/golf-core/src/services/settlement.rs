//! Round settlement: run every configured game, merge ledgers, net once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::domain::game_mode::{compute, GameConfig, GameResult};
use crate::domain::netting::{net, net_balances, Balance};
use crate::domain::types::{CoreRoundData, Payable, PlayerId};
use crate::errors::domain::DomainError;

/// Caller-owned ledger that accumulates payables until the round completes.
///
/// [`RoundLedger::settle`] consumes the ledger, so a round can only be netted once.
#[derive(Debug, Clone, Default)]
pub struct RoundLedger {
    payables: Vec<Payable>,
}

impl RoundLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &GameResult) {
        self.payables.extend_from_slice(result.payables());
    }

    pub fn payables(&self) -> &[Payable] {
        &self.payables
    }

    pub fn is_empty(&self) -> bool {
        self.payables.is_empty()
    }

    pub fn settle(self) -> Settlement {
        let balances = net_balances(&self.payables);
        let transfers = net(&self.payables);
        Settlement {
            ledger: self.payables,
            balances,
            transfers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Every payable the games produced, in game order.
    pub ledger: Vec<Payable>,
    pub balances: BTreeMap<PlayerId, Balance>,
    /// Netted transfers that settle `balances`.
    pub transfers: Vec<Payable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSettlement {
    pub results: Vec<GameResult>,
    pub settlement: Settlement,
}

/// Run each game over the snapshot and net the combined ledger.
///
/// A validation error from any game aborts the whole settlement unchanged.
pub fn settle_round(
    data: &CoreRoundData,
    games: &[GameConfig],
) -> Result<RoundSettlement, DomainError> {
    let span = info_span!("settle_round", players = data.players.len(), games = games.len());
    let _guard = span.enter();

    let mut ledger = RoundLedger::new();
    let mut results = Vec::with_capacity(games.len());
    for game in games {
        let result = compute(data, game)?;
        debug!(
            mode = %game.mode(),
            payables = result.payables().len(),
            "game computed"
        );
        ledger.record(&result);
        results.push(result);
    }

    let settlement = ledger.settle();
    info!(
        ledger = settlement.ledger.len(),
        transfers = settlement.transfers.len(),
        "round settled"
    );

    Ok(RoundSettlement {
        results,
        settlement,
    })
}
