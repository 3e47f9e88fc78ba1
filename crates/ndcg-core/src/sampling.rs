//! Random ranking generation for ad hoc metric checks.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::config::RandomConfig;
use crate::error::{Error, Result};
use crate::evaluation::{evaluate, Evaluation};

/// Draws rankings of distinct integer items.
#[derive(Debug, Clone)]
pub struct RankingSampler {
    rng: StdRng,
}

impl RankingSampler {
    /// Creates a sampler seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic sampler.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        tracing::trace!(seed, "seeding ranking sampler");
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Builds a sampler from configuration, honouring a fixed seed.
    #[must_use]
    pub fn from_config(config: &RandomConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Draws `length` distinct values from `0..max_value` in random order.
    pub fn sample_ranking(&mut self, length: usize, max_value: u64) -> Result<Vec<u64>> {
        let invalid = || Error::InvalidSample { length, max_value };

        let population = usize::try_from(max_value).map_err(|_| invalid())?;
        if length > population {
            return Err(invalid());
        }

        Ok(index::sample(&mut self.rng, population, length)
            .into_iter()
            .map(|i| i as u64)
            .collect())
    }

    /// Draws a predicted and an ideal ranking and evaluates them.
    ///
    /// `k == None` scores the full predicted ranking.
    pub fn random_evaluation(
        &mut self,
        length: usize,
        max_value: u64,
        k: Option<usize>,
    ) -> Result<Evaluation> {
        let predicted = self.sample_ranking(length, max_value)?;
        let ideal = self.sample_ranking(length, max_value)?;
        Ok(evaluate(&predicted, &ideal, k))
    }
}
