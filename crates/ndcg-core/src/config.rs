//! Layered configuration for evaluation runs.
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults
//! 2. TOML file (`ndcg.toml` in the working directory, or an explicit path)
//! 3. Environment variables prefixed `NDCG_` (`__` separates nested keys,
//!    e.g. `NDCG_RANDOM__SEED=7`)

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ndcg.toml";
/// Environment variable prefix.
pub const ENV_PREFIX: &str = "NDCG_";
/// Decimal places used when printing scores.
pub const DEFAULT_PRECISION: usize = 4;
/// Upper bound on printed decimal places (f64 round-trip precision).
pub const MAX_PRECISION: usize = 17;

/// How evaluation results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable report.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!("unknown output format: {other}"))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Parameters for random ranking generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Items per generated ranking.
    pub length: usize,
    /// Items are drawn from `0..max_value`.
    pub max_value: u64,
    /// Fixed seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            length: 5,
            max_value: 10,
            seed: None,
        }
    }
}

/// Evaluation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Cutoff rank. `None` scores the full predicted ranking.
    pub k: Option<usize>,
    /// Decimal places for printed scores.
    pub precision: usize,
    /// Output format.
    pub format: OutputFormat,
    /// Random ranking generation.
    pub random: RandomConfig,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            k: None,
            precision: DEFAULT_PRECISION,
            format: OutputFormat::Text,
            random: RandomConfig::default(),
        }
    }
}

impl EvalConfig {
    /// Builds the layered figment without extracting it.
    ///
    /// With `path == None` the default file is used if present.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extracts a configuration from `figment`.
    ///
    /// Values are not validated here; callers apply their own overrides
    /// first and then call [`EvalConfig::validate`].
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    /// Loads defaults, file and environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        }
        let config = Self::from_figment(&Self::figment(path))?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Renders the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks settings shared by every command.
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(Error::Config(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

impl RandomConfig {
    /// Checks that `length` distinct items fit in `0..max_value`.
    pub fn validate(&self) -> Result<()> {
        if u64::try_from(self.length).unwrap_or(u64::MAX) > self.max_value {
            return Err(Error::InvalidSample {
                length: self.length,
                max_value: self.max_value,
            });
        }
        Ok(())
    }
}

/// Parses a comma-separated ranking of item identifiers.
///
/// Tokens are trimmed. Blank input is an empty ranking; a blank token
/// between commas is rejected.
///
/// ```rust
/// use ndcg_core::config::parse_ranking;
///
/// assert_eq!(parse_ranking("a, b,c").unwrap(), vec!["a", "b", "c"]);
/// assert!(parse_ranking("").unwrap().is_empty());
/// assert!(parse_ranking("a,,b").is_err());
/// ```
pub fn parse_ranking(text: &str) -> Result<Vec<String>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            if token.is_empty() {
                Err(Error::InvalidRanking(format!(
                    "empty item at position {} in {text:?}",
                    position + 1
                )))
            } else {
                Ok(token.to_string())
            }
        })
        .collect()
}
