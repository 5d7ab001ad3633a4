//! Snake: whoever three-putted last holds the snake and pays the penalty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::payout::{split_evenly, SplitPolicy};
use crate::domain::types::{push_payable, CoreRoundData, HoleNumber, Payable, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

/// Recipient id for a penalty paid into the group pot.
pub const POT_RECIPIENT: &str = "pot";

const DEFAULT_PUTT_THRESHOLD: u8 = 3;

/// Who takes the snake when several players three-putt the same hole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnakeTieBreak {
    /// Last qualifying player in the round's player order.
    #[default]
    LastInOrder,
    /// First qualifying player in the round's player order.
    FirstInOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnakeConfig {
    pub putt_threshold: u8,
    pub penalty_amount: u64,
    pub distribute_to_group: bool,
    pub tie_break: SnakeTieBreak,
    pub split_policy: SplitPolicy,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            putt_threshold: DEFAULT_PUTT_THRESHOLD,
            penalty_amount: 0,
            distribute_to_group: false,
            tie_break: SnakeTieBreak::default(),
            split_policy: SplitPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakePass {
    pub hole: HoleNumber,
    pub player: PlayerId,
    pub putts: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeResult {
    pub holder: Option<PlayerId>,
    pub three_putts: BTreeMap<PlayerId, u32>,
    /// Count of qualifying putting holes across all players.
    pub passes: u32,
    pub history: Vec<SnakePass>,
    pub payables: Vec<Payable>,
}

/// Fails when the group pot is the recipient and a player already uses its id.
pub fn compute_snake(data: &CoreRoundData, config: &SnakeConfig) -> Result<SnakeResult, DomainError> {
    if config.distribute_to_group && data.players.iter().any(|p| p == POT_RECIPIENT) {
        return Err(DomainError::validation(
            ValidationKind::InvalidConfig,
            format!("player id {POT_RECIPIENT:?} is reserved for the snake group pot"),
        ));
    }

    let mut holder: Option<PlayerId> = None;
    let mut three_putts: BTreeMap<PlayerId, u32> =
        data.players.iter().map(|p| (p.clone(), 0)).collect();
    let mut passes = 0u32;
    let mut history = Vec::new();

    for hole in data.course.hole_numbers() {
        let mut hole_holder: Option<&PlayerId> = None;
        for player in &data.players {
            let Some(putts) = data.detail(player, hole).putts else {
                continue;
            };
            if putts < config.putt_threshold {
                continue;
            }
            *three_putts.entry(player.clone()).or_default() += 1;
            passes += 1;
            history.push(SnakePass {
                hole,
                player: player.clone(),
                putts,
            });
            hole_holder = match (config.tie_break, hole_holder) {
                (SnakeTieBreak::FirstInOrder, Some(first)) => Some(first),
                _ => Some(player),
            };
        }
        if let Some(p) = hole_holder {
            trace!(hole, player = %p, "snake passed");
            holder = Some(p.clone());
        }
    }

    let mut payables = Vec::new();
    if let Some(h) = holder.as_ref().filter(|_| config.penalty_amount > 0) {
        if config.distribute_to_group {
            push_payable(
                &mut payables,
                Payable::new(h.clone(), POT_RECIPIENT, config.penalty_amount, "snake penalty"),
            );
        } else {
            let others: Vec<&PlayerId> = data.players.iter().filter(|p| *p != h).collect();
            let shares = split_evenly(config.penalty_amount, others.len(), config.split_policy);
            for (to, share) in others.into_iter().zip(shares) {
                push_payable(
                    &mut payables,
                    Payable::new(h.clone(), to.clone(), share, "snake penalty"),
                );
            }
        }
    }

    Ok(SnakeResult {
        holder,
        three_putts,
        passes,
        history,
        payables,
    })
}
