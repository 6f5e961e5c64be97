//! Seeded, configurable source of finite doubles.

use serde::{Deserialize, Serialize};

use super::Strategy;
use crate::Result;

/// Seed used when a configuration leaves it out.
pub const DEFAULT_SEED: u64 = 1;

/// Sampler configuration.
///
/// Both fields are optional when deserializing:
///
/// ```json
/// { "seed": 42, "strategy": "resample" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplerConfig {
    pub seed: u64,
    pub strategy: Strategy,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED, strategy: Strategy::default() }
    }
}

impl SamplerConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Owns one splitmix64 state word and yields finite doubles forever.
///
/// Not shared: give each thread its own sampler, seeded differently.
#[derive(Debug, Clone)]
pub struct FloatSampler {
    state: u64,
    strategy: Strategy,
}

impl FloatSampler {
    pub fn new(seed: u64, strategy: Strategy) -> Self {
        tracing::debug!(seed, %strategy, "float sampler created");
        Self { state: seed, strategy }
    }

    pub fn from_config(config: &SamplerConfig) -> Self {
        Self::new(config.seed, config.strategy)
    }

    /// Next finite double.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.strategy.draw(&mut self.state)
    }

    /// Next raw splitmix64 output, sharing the same state.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        super::splitmix_step(&mut self.state)
    }

    /// Current state word. Seeding a new sampler with it continues the
    /// sequence from here.
    pub fn state(&self) -> u64 {
        self.state
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Default for FloatSampler {
    fn default() -> Self {
        Self::from_config(&SamplerConfig::default())
    }
}

impl Iterator for FloatSampler {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for FloatSampler {}
