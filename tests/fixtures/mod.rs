//! Test fixtures for route-optimizer.
//!
//! Provides:
//! - Real Brussels locations
//! - A request builder and an independent brute-force reference

#![allow(dead_code)]

pub mod brussels_locations;

pub use brussels_locations::*;

use route_optimizer::haversine::distance_meters;
use route_optimizer::{GeoPoint, RoutingRequest, Task};

/// Builder for requests with sensible defaults.
pub struct RequestBuilder {
    request: RoutingRequest,
}

impl RequestBuilder {
    pub fn new(home: GeoPoint) -> Self {
        Self {
            request: RoutingRequest::new(0, home, Vec::new()),
        }
    }

    pub fn departure(mut self, epoch_seconds: i64) -> Self {
        self.request.departure = epoch_seconds;
        self
    }

    pub fn speed(mut self, speed_kmh: f64) -> Self {
        self.request.speed_kmh = Some(speed_kmh);
        self
    }

    pub fn task(mut self, task: Task) -> Self {
        self.request.tasks.push(task);
        self
    }

    pub fn build(self) -> RoutingRequest {
        self.request
    }
}

/// Travel minutes of visiting `order` (task ids) at a uniform speed,
/// computed without any of the crate's search machinery.
pub fn reference_travel_minutes(home: GeoPoint, tasks: &[Task], order: &[u64], speed_kmh: f64) -> f64 {
    let mut prev = home;
    let mut total = 0.0;
    for id in order {
        let task = tasks.iter().find(|task| task.id == *id).expect("task in order");
        let meters = distance_meters(prev, task.location).expect("finite coordinates");
        total += meters / 1000.0 / speed_kmh * 60.0;
        prev = task.location;
    }
    total
}

/// Every ordering of `ids`, built by swapping rather than the crate's generator.
pub fn all_orders(ids: &[u64]) -> Vec<Vec<u64>> {
    if ids.len() <= 1 {
        return vec![ids.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..ids.len() {
        let mut rest = ids.to_vec();
        let head = rest.swap_remove(i);
        for mut tail in all_orders(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}
