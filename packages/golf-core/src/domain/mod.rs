//! Domain layer: pure scoring and settlement logic.

pub mod dots;
pub mod estimator;
pub mod fixtures;
pub mod game_mode;
pub mod handicap;
pub mod match_play;
pub mod nassau;
pub mod netting;
pub mod payout;
pub mod ranking;
pub mod sixes;
pub mod skins;
pub mod snake;
pub mod stroke_play;
pub mod types;
pub mod wager;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_dots;
#[cfg(test)]
mod tests_props_netting;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_skins;

// Re-exports for ergonomics
pub use estimator::{fill_missing_details, SeededEstimator, ShotEstimator};
pub use game_mode::{compute, GameConfig, GameMode, GameResult};
pub use handicap::allocate_pops;
pub use netting::{net, net_balances, Balance};
pub use payout::SplitPolicy;
pub use ranking::LeaderboardEntry;
pub use types::{Course, CoreRoundData, Hole, HoleDetail, HoleNumber, Payable, PlayerId};
pub use wager::WagerConfig;
