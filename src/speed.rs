//! Travel speed resolution.

use crate::config::OptimizerConfig;
use crate::models::{RoutingRequest, Task};
use crate::traits::SpeedResolver;

/// Where leg speeds come from for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedPolicy {
    /// Every task carries its own speed; a leg uses its destination's.
    PerTask,
    /// One speed for every leg.
    Uniform(f64),
}

impl SpeedPolicy {
    /// Resolves the policy for a request.
    ///
    /// Per-task speeds are all-or-nothing: a single task without one makes the
    /// whole request fall back to the request speed, then the configured
    /// default. A request without tasks resolves to `Uniform`.
    pub fn resolve(request: &RoutingRequest, config: &OptimizerConfig) -> Self {
        let all_tasks_have_speed =
            !request.tasks.is_empty() && request.tasks.iter().all(|task| task.speed_kmh.is_some());

        if all_tasks_have_speed {
            SpeedPolicy::PerTask
        } else {
            SpeedPolicy::Uniform(request.speed_kmh.unwrap_or(config.default_speed_kmh))
        }
    }
}

impl SpeedResolver for SpeedPolicy {
    fn speed_kmh(&self, task: &Task) -> f64 {
        match *self {
            // NaN is rejected downstream like any other invalid speed.
            SpeedPolicy::PerTask => task.speed_kmh.unwrap_or(f64::NAN),
            SpeedPolicy::Uniform(speed) => speed,
        }
    }
}
