//! Domain types for routing requests and optimized routes.

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self { latitude, longitude }
    }
}

/// A single job to visit.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Identifier, unique within a request (>= 1).
    pub id: u64,
    pub location: GeoPoint,
    /// Time spent on site, in minutes.
    pub duration_minutes: f64,
    /// Travel speed override for legs arriving at this task.
    pub speed_kmh: Option<f64>,
}

impl Task {
    pub fn new(id: u64, location: impl Into<GeoPoint>, duration_minutes: f64) -> Self {
        Self {
            id,
            location: location.into(),
            duration_minutes,
            speed_kmh: None,
        }
    }

    pub fn with_speed(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = Some(speed_kmh);
        self
    }
}

/// Everything needed to plan one round trip from home.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingRequest {
    /// Departure from home (unix timestamp, seconds).
    pub departure: i64,
    pub home: GeoPoint,
    /// Tasks to visit; their order carries no meaning beyond tie-breaking.
    pub tasks: Vec<Task>,
    /// Request-wide speed in km/h.
    pub speed_kmh: Option<f64>,
}

impl RoutingRequest {
    pub fn new(departure: i64, home: impl Into<GeoPoint>, tasks: Vec<Task>) -> Self {
        Self {
            departure,
            home: home.into(),
            tasks,
            speed_kmh: None,
        }
    }

    pub fn with_speed(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = Some(speed_kmh);
        self
    }
}

/// One entry of the final schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledStop {
    /// Position in the schedule, starting at 1 for the home departure.
    pub id: u64,
    /// The visited task, or `None` for the home departure.
    pub task_id: Option<u64>,
    /// Arrival (unix timestamp, seconds).
    pub starts_at: i64,
    /// Departure (unix timestamp, seconds).
    pub ends_at: i64,
    pub location: GeoPoint,
}

/// The fastest visiting order, laid out on the clock.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedRoute {
    /// Minutes from leaving home to finishing the last task.
    pub total_time_minutes: i64,
    pub schedule: Vec<ScheduledStop>,
}

impl OptimizedRoute {
    /// Task ids in visiting order.
    pub fn task_order(&self) -> Vec<u64> {
        self.schedule.iter().filter_map(|stop| stop.task_id).collect()
    }
}
