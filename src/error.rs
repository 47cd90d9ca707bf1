//! Errors raised by the optimizer core.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("malformed geometry: ({latitude}, {longitude}) is not a finite coordinate")]
    MalformedGeometry { latitude: f64, longitude: f64 },

    #[error("invalid speed {speed_kmh} km/h resolved for task {task_id}")]
    InvalidSpeed { task_id: u64, speed_kmh: f64 },

    #[error("invalid duration {minutes} min for task {task_id}")]
    InvalidDuration { task_id: u64, minutes: f64 },

    #[error("schedule time overflows at task {task_id}")]
    ScheduleOverflow { task_id: u64 },

    #[error("invalid departure time: {0:?}")]
    InvalidDepartureTime(String),
}

pub type Result<T, E = RouteError> = std::result::Result<T, E>;
