use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{NnError, Result};

/// Seed and range used to draw initial weights.
///
/// The default (seed 0, range `[-1, 1]`) makes every freshly built network
/// with the same shape bit-identical, so training runs are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightInitConfig {
    pub seed: u64,
    pub min: f64,
    pub max: f64,
}

impl Default for WeightInitConfig {
    fn default() -> Self {
        WeightInitConfig { seed: 0, min: -1.0, max: 1.0 }
    }
}

impl WeightInitConfig {
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        WeightInitConfig { seed, min, max }
    }

    /// Fails when the range is empty or has a non-finite bound.
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(NnError::InvalidConfiguration(format!(
                "weight range bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(NnError::InvalidConfiguration(format!(
                "weight range min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Deterministic source of uniformly distributed initial weights.
pub struct WeightInitializer {
    rng: ChaCha8Rng,
    range: Uniform<f64>,
}

impl WeightInitializer {
    pub fn new(config: &WeightInitConfig) -> Result<WeightInitializer> {
        config.validate()?;
        Ok(WeightInitializer {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            range: Uniform::new_inclusive(config.min, config.max),
        })
    }

    /// Draws one scalar from `[min, max]`.
    pub fn next_weight(&mut self) -> f64 {
        self.range.sample(&mut self.rng)
    }

    /// Draws `count` scalars in sequence.
    pub fn weights(&mut self, count: usize) -> Vec<f64> {
        self.range.sample_iter(&mut self.rng).take(count).collect()
    }
}
