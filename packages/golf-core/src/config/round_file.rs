//! JSON description of a round and the games played on it.
//!
//! ```json
//! {
//!   "round": { "players": ["ann", "ben"], "strokes": {...}, "course": {...} },
//!   "handicaps": { "ann": 8.4, "ben": 12 },
//!   "games": [ { "mode": "skins", "unitSats": 50 }, { "mode": "match_play", "useNet": true } ],
//!   "estimatorSeed": 42
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::domain::estimator::{fill_missing_details, SeededEstimator};
use crate::domain::game_mode::GameConfig;
use crate::domain::types::{CoreRoundData, PlayerId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundFile {
    pub round: CoreRoundData,
    /// Course handicaps; when present they replace any pops in `round`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handicaps: Option<BTreeMap<PlayerId, f64>>,
    #[serde(default)]
    pub games: Vec<GameConfig>,
    /// Seed for estimating missing putts/fairways; no estimation when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimator_seed: Option<u64>,
}

impl RoundFile {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let file: Self = serde_json::from_str(s)?;
        file.validate()?;
        Ok(file)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.round.players.is_empty() {
            return Err(ConfigError::Invalid {
                message: "round has no players".into(),
            });
        }
        let mut seen = std::collections::BTreeSet::new();
        if let Some(dup) = self.round.players.iter().find(|p| !seen.insert(p.as_str())) {
            return Err(ConfigError::Invalid {
                message: format!("player {dup} listed twice"),
            });
        }
        if let Some(unknown) = self
            .round
            .strokes
            .keys()
            .find(|p| !self.round.players.contains(*p))
        {
            return Err(ConfigError::Invalid {
                message: format!("strokes recorded for unknown player {unknown}"),
            });
        }
        Ok(())
    }

    /// Snapshot the engines run on: handicaps allocated, missing details estimated.
    pub fn to_round(&self) -> CoreRoundData {
        let mut round = self.round.clone();
        if let Some(handicaps) = &self.handicaps {
            round = round.with_handicaps(handicaps);
        }
        if let Some(seed) = self.estimator_seed {
            round = fill_missing_details(&round, &mut SeededEstimator::new(seed));
        }
        round
    }
}
