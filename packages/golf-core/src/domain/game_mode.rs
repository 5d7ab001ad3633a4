//! Closed set of game formats and the single dispatcher over them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::dots::{compute_dots, DotsConfig, DotsResult};
use crate::domain::match_play::{compute_match_play, MatchPlayConfig, MatchPlayResult};
use crate::domain::nassau::{compute_nassau, NassauResult};
use crate::domain::sixes::{compute_sixes, SixesConfig, SixesResult};
use crate::domain::skins::{compute_skins, SkinsResult};
use crate::domain::snake::{compute_snake, SnakeConfig, SnakeResult};
use crate::domain::stroke_play::{compute_stroke_play, StrokePlayConfig, StrokePlayResult};
use crate::domain::types::{CoreRoundData, Payable};
use crate::domain::wager::WagerConfig;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    StrokePlay,
    MatchPlay,
    Skins,
    Nassau,
    Dots,
    Snake,
    Sixes,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameMode::StrokePlay => "stroke play",
            GameMode::MatchPlay => "match play",
            GameMode::Skins => "skins",
            GameMode::Nassau => "nassau",
            GameMode::Dots => "dots",
            GameMode::Snake => "snake",
            GameMode::Sixes => "sixes",
        };
        write!(f, "{s}")
    }
}

/// A game to run over a round, with that game's settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GameConfig {
    StrokePlay(StrokePlayConfig),
    MatchPlay(MatchPlayConfig),
    Skins(WagerConfig),
    Nassau(WagerConfig),
    Dots(DotsConfig),
    Snake(SnakeConfig),
    Sixes(SixesConfig),
}

impl GameConfig {
    pub fn mode(&self) -> GameMode {
        match self {
            GameConfig::StrokePlay(_) => GameMode::StrokePlay,
            GameConfig::MatchPlay(_) => GameMode::MatchPlay,
            GameConfig::Skins(_) => GameMode::Skins,
            GameConfig::Nassau(_) => GameMode::Nassau,
            GameConfig::Dots(_) => GameMode::Dots,
            GameConfig::Snake(_) => GameMode::Snake,
            GameConfig::Sixes(_) => GameMode::Sixes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GameResult {
    StrokePlay(StrokePlayResult),
    MatchPlay(MatchPlayResult),
    Skins(SkinsResult),
    Nassau(NassauResult),
    Dots(DotsResult),
    Snake(SnakeResult),
    Sixes(SixesResult),
}

impl GameResult {
    pub fn mode(&self) -> GameMode {
        match self {
            GameResult::StrokePlay(_) => GameMode::StrokePlay,
            GameResult::MatchPlay(_) => GameMode::MatchPlay,
            GameResult::Skins(_) => GameMode::Skins,
            GameResult::Nassau(_) => GameMode::Nassau,
            GameResult::Dots(_) => GameMode::Dots,
            GameResult::Snake(_) => GameMode::Snake,
            GameResult::Sixes(_) => GameMode::Sixes,
        }
    }

    /// Payment obligations produced by this game; empty for pure scoring formats.
    pub fn payables(&self) -> &[Payable] {
        match self {
            GameResult::Skins(r) => &r.payables,
            GameResult::Nassau(r) => &r.payables,
            GameResult::Dots(r) => &r.payables,
            GameResult::Snake(r) => &r.payables,
            GameResult::StrokePlay(_) | GameResult::MatchPlay(_) | GameResult::Sixes(_) => &[],
        }
    }
}

/// Run one game over a round snapshot.
pub fn compute(data: &CoreRoundData, config: &GameConfig) -> Result<GameResult, DomainError> {
    Ok(match config {
        GameConfig::StrokePlay(c) => GameResult::StrokePlay(compute_stroke_play(data, c)),
        GameConfig::MatchPlay(c) => GameResult::MatchPlay(compute_match_play(data, c)?),
        GameConfig::Skins(c) => GameResult::Skins(compute_skins(data, c)?),
        GameConfig::Nassau(c) => GameResult::Nassau(compute_nassau(data, c)),
        GameConfig::Dots(c) => GameResult::Dots(compute_dots(data, c)?),
        GameConfig::Snake(c) => GameResult::Snake(compute_snake(data, c)?),
        GameConfig::Sixes(c) => GameResult::Sixes(compute_sixes(data, c)?),
    })
}
