//! Error types for ndcg-core.
//!
//! Scoring and alignment never fail. Errors come from configuration,
//! random sampling parameters and ranking text supplied by a driver.

use thiserror::Error;

/// Error type for ranking evaluation.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration could not be loaded or extracted.
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(#[source] Box<figment::Error>),

    /// Requested more distinct items than the value range holds.
    #[error("Cannot sample {length} distinct items from 0..{max_value}")]
    InvalidSample {
        /// Requested ranking length.
        length: usize,
        /// Exclusive upper bound of the item values.
        max_value: u64,
    },

    /// Configuration could not be rendered as TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Ranking text could not be parsed.
    #[error("Invalid ranking: {0}")]
    InvalidRanking(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

/// Result type alias for ranking evaluation operations.
pub type Result<T> = std::result::Result<T, Error>;
