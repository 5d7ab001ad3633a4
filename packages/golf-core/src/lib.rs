#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

// Re-exports for public API
pub use config::{ConfigError, RoundFile};
pub use domain::{compute, net, CoreRoundData, GameConfig, GameMode, GameResult, Payable};
pub use errors::DomainError;
pub use services::settlement::{settle_round, RoundLedger, RoundSettlement, Settlement};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    golf_test_support::logging::init();
}
