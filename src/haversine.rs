//! Great-circle distance on a spherical earth.
//!
//! Straight-line distance ignores roads, which is fine for ranking visiting
//! orders against each other.

use crate::error::{Result, RouteError};
use crate::models::GeoPoint;
use crate::traits::DistanceMetric;

/// Mean earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance_meters(&self, from: GeoPoint, to: GeoPoint) -> Result<f64> {
        distance_meters(from, to)
    }
}

/// Great-circle distance between two points in meters.
///
/// Range is not checked: a latitude of 91 is computed like any other value.
/// Only non-finite coordinates are rejected.
pub fn distance_meters(from: GeoPoint, to: GeoPoint) -> Result<f64> {
    for point in [from, to] {
        if !point.is_finite() {
            return Err(RouteError::MalformedGeometry {
                latitude: point.latitude,
                longitude: point.longitude,
            });
        }
    }

    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let c = 2.0 * a.min(1.0).sqrt().asin();

    Ok(EARTH_RADIUS_M * c)
}
