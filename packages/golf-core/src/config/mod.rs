//! Round-file configuration.

pub mod round_file;

pub use round_file::RoundFile;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read round file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse round file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid round file: {message}")]
    Invalid { message: String },
}
