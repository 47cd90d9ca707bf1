//! Seams of the optimizer.
//!
//! The search only needs two things from the outside world: how far apart two
//! points are, and how fast the vehicle travels towards a given task.

use crate::error::Result;
use crate::models::{GeoPoint, Task};

/// Distance between two points, in meters.
///
/// Implementations must be deterministic; the search evaluates the same pair
/// many times and expects identical answers.
pub trait DistanceMetric {
    fn distance_meters(&self, from: GeoPoint, to: GeoPoint) -> Result<f64>;
}

/// Travel speed (km/h) on the leg that arrives at `task`.
pub trait SpeedResolver {
    fn speed_kmh(&self, task: &Task) -> f64;
}

impl<F> SpeedResolver for F
where
    F: Fn(&Task) -> f64,
{
    fn speed_kmh(&self, task: &Task) -> f64 {
        self(task)
    }
}
