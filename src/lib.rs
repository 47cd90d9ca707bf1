//! route-optimizer core
//!
//! Exact single-vehicle route optimization: every visiting order of a small
//! task set is evaluated against great-circle travel time, and the fastest
//! order is turned into a time-stamped schedule.

pub mod api;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod haversine;
pub mod models;
pub mod permutation;
pub mod schedule;
pub mod solver;
pub mod speed;
pub mod traits;

pub use config::OptimizerConfig;
pub use error::{Result, RouteError};
pub use models::{GeoPoint, OptimizedRoute, RoutingRequest, ScheduledStop, Task};
pub use solver::{optimize, optimize_with};
