//! Real Brussels locations for realistic test fixtures.
//!
//! Coordinates taken from OpenStreetMap.

use route_optimizer::{GeoPoint, Task};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// A task at this location.
    pub fn task(&self, id: u64, duration_minutes: f64) -> Task {
        Task::new(id, self.point(), duration_minutes)
    }
}

pub const HOME: Location = Location::new("Gare du Midi", 50.8357, 4.3361);

pub const LANDMARKS: &[Location] = &[
    Location::new("Grand-Place", 50.8467, 4.3525),
    Location::new("Atomium", 50.8949, 4.3415),
    Location::new("Parc du Cinquantenaire", 50.8404, 4.3926),
    Location::new("Manneken Pis", 50.8450, 4.3500),
    Location::new("Basilique de Koekelberg", 50.8668, 4.3172),
    Location::new("Place Flagey", 50.8275, 4.3724),
    Location::new("Abbaye de la Cambre", 50.8133, 4.3768),
    Location::new("Gare du Nord", 50.8603, 4.3617),
];
