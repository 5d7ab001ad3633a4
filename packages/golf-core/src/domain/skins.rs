//! Skins with carryover.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::nassau::unique_low;
use crate::domain::payout::split_evenly;
use crate::domain::types::{push_payable, CoreRoundData, HoleNumber, Payable, PlayerId};
use crate::domain::wager::WagerConfig;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SkinOutcome {
    Won {
        player: PlayerId,
        skins: u32,
        pot: u64,
    },
    /// Tied; `carry` skins now ride on the next hole.
    Carried { carry: u32 },
    /// Tied with the pot at the carry cap; the pot is discarded.
    Voided { skins: u32 },
    /// Not every player has a score on this hole yet.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinHole {
    pub hole: HoleNumber,
    pub outcome: SkinOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinsResult {
    pub holes: Vec<SkinHole>,
    pub skins_won: BTreeMap<PlayerId, u32>,
    /// Skins still carried when the round ran out of holes; never paid.
    pub unresolved_carry: u32,
    pub payables: Vec<Payable>,
}

pub fn compute_skins(data: &CoreRoundData, config: &WagerConfig) -> Result<SkinsResult, DomainError> {
    if config.carry_cap == Some(0) {
        return Err(DomainError::validation(
            ValidationKind::InvalidConfig,
            "skins carry cap must be at least 1",
        ));
    }

    let mut carry: u32 = 1;
    let mut holes = Vec::with_capacity(data.hole_count() as usize);
    let mut skins_won: BTreeMap<PlayerId, u32> =
        data.players.iter().map(|p| (p.clone(), 0)).collect();
    let mut payables = Vec::new();

    for hole in data.course.hole_numbers() {
        if data.players.len() < 2 || !data.all_played(hole) {
            holes.push(SkinHole {
                hole,
                outcome: SkinOutcome::Skipped,
            });
            continue;
        }

        let scores = data
            .players
            .iter()
            .map(|p| (p.as_str(), data.score(p, hole, config.use_net)));

        let outcome = match unique_low(scores) {
            Some(winner) => {
                let pot = u64::from(carry).checked_mul(config.unit_sats).ok_or_else(|| {
                    DomainError::validation(
                        ValidationKind::InvalidConfig,
                        format!("skins pot on hole {hole} overflows: {carry} x {}", config.unit_sats),
                    )
                })?;
                let losers: Vec<&PlayerId> = data.players.iter().filter(|p| *p != winner).collect();
                let shares = split_evenly(pot, losers.len(), config.split_policy);
                for (loser, share) in losers.into_iter().zip(shares) {
                    push_payable(
                        &mut payables,
                        Payable::new(
                            loser.clone(),
                            winner,
                            share,
                            format!("skins hole {hole} ({carry} skins)"),
                        ),
                    );
                }
                *skins_won.entry(winner.to_string()).or_default() += carry;
                let outcome = SkinOutcome::Won {
                    player: winner.to_string(),
                    skins: carry,
                    pot,
                };
                carry = 1;
                outcome
            }
            None => match config.carry_cap {
                Some(cap) if carry >= cap => {
                    trace!(hole, skins = carry, "skins pot voided at carry cap");
                    let outcome = SkinOutcome::Voided { skins: carry };
                    carry = 1;
                    outcome
                }
                _ => {
                    carry += 1;
                    SkinOutcome::Carried { carry }
                }
            },
        };
        holes.push(SkinHole { hole, outcome });
    }

    // The carry counter sits at 1 when nothing is riding.
    let unresolved_carry = carry - 1;

    Ok(SkinsResult {
        holes,
        skins_won,
        unresolved_carry,
        payables,
    })
}
