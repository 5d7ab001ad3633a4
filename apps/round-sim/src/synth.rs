//! Random scorecards for exploring the engines without recorded rounds.

use std::collections::BTreeMap;

use golf_core::domain::fixtures::reference_course;
use golf_core::domain::game_mode::GameConfig;
use golf_core::domain::match_play::MatchPlayConfig;
use golf_core::domain::snake::SnakeConfig;
use golf_core::domain::stroke_play::StrokePlayConfig;
use golf_core::domain::{fill_missing_details, CoreRoundData, PlayerId, SeededEstimator, WagerConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates rounds on the reference course; one seed gives one sequence of rounds.
pub struct RoundSynthesizer {
    rng: StdRng,
    players: Vec<PlayerId>,
    handicaps: BTreeMap<PlayerId, f64>,
}

impl RoundSynthesizer {
    pub fn new(seed: u64, player_count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let players: Vec<PlayerId> = (1..=player_count).map(|i| format!("player{i}")).collect();
        let handicaps = players
            .iter()
            .map(|p| (p.clone(), f64::from(rng.random_range(0u8..=28))))
            .collect();
        Self {
            rng,
            players,
            handicaps,
        }
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// One round: each hole is par plus a spread that widens with handicap.
    pub fn next_round(&mut self) -> CoreRoundData {
        let course = reference_course();
        let mut data = CoreRoundData::new(self.players.clone(), course.clone());
        for player in &self.players {
            let hcp = self.handicaps.get(player).copied().unwrap_or(0.0);
            let spread = 1 + (hcp / 9.0) as i32;
            let card: Vec<u32> = course
                .hole_numbers()
                .map(|h| {
                    let over = self.rng.random_range(-1..=spread);
                    (course.par(h) + over).max(1) as u32
                })
                .collect();
            data = data.with_strokes(player, &card);
        }
        let data = data.with_handicaps(&self.handicaps);
        let detail_seed = self.rng.random::<u64>();
        fill_missing_details(&data, &mut SeededEstimator::new(detail_seed))
    }
}

/// Every game that accepts this many players.
pub fn default_games(player_count: usize) -> Vec<GameConfig> {
    let mut games = vec![
        GameConfig::StrokePlay(StrokePlayConfig {
            use_net: true,
            max_score_rule: None,
        }),
        GameConfig::Skins(WagerConfig {
            use_net: true,
            ..WagerConfig::with_unit(100)
        }),
        GameConfig::Nassau(WagerConfig {
            use_net: true,
            ..WagerConfig::with_unit(500)
        }),
        GameConfig::Dots(Default::default()),
        GameConfig::Snake(SnakeConfig {
            penalty_amount: 300,
            ..SnakeConfig::default()
        }),
    ];
    if player_count == 2 {
        games.push(GameConfig::MatchPlay(MatchPlayConfig { use_net: true }));
    }
    if player_count >= 3 {
        games.push(GameConfig::Sixes(Default::default()));
    }
    games
}
