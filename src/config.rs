//! Optimizer configuration.

use serde::Deserialize;

/// Average speed used when neither the request nor its tasks carry one.
pub const DEFAULT_SPEED_KMH: f64 = 45.0;

/// Task count from which the search is spread over the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 8;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Fallback average speed in km/h.
    pub default_speed_kmh: f64,
    /// Minimum number of tasks before permutations are evaluated in parallel.
    pub parallel_threshold: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            default_speed_kmh: DEFAULT_SPEED_KMH,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl OptimizerConfig {
    pub fn new(default_speed_kmh: f64) -> Self {
        Self {
            default_speed_kmh,
            ..Self::default()
        }
    }

    /// Disables parallel evaluation regardless of task count.
    pub fn sequential(mut self) -> Self {
        self.parallel_threshold = usize::MAX;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
