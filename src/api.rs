//! JSON payloads exchanged with the HTTP layer.
//!
//! Field names follow the public contract (`departureTime`, `startsAt`, ...).
//! Only shape is handled here; range and presence rules belong to the caller's
//! schema validation.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::models::{GeoPoint, OptimizedRoute, RoutingRequest, ScheduledStop, Task};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for GeoPoint {
    fn from(point: LatLng) -> Self {
        GeoPoint::new(point.lat, point.lng)
    }
}

impl From<GeoPoint> for LatLng {
    fn from(point: GeoPoint) -> Self {
        Self {
            lat: point.latitude,
            lng: point.longitude,
        }
    }
}

/// Unix timestamp in seconds, sent either as a string or as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Seconds(i64),
    Text(String),
}

impl Timestamp {
    pub fn to_seconds(&self) -> Result<i64, RouteError> {
        match self {
            Timestamp::Seconds(seconds) => Ok(*seconds),
            Timestamp::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| RouteError::InvalidDepartureTime(text.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPayload {
    pub id: u64,
    pub lat: f64,
    pub lng: f64,
    /// Minutes on site.
    pub duration: f64,
    /// km/h
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRequestPayload {
    pub departure_time: Timestamp,
    pub home: LatLng,
    pub tasks: Vec<TaskPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl TryFrom<RoutingRequestPayload> for RoutingRequest {
    type Error = RouteError;

    fn try_from(payload: RoutingRequestPayload) -> Result<Self, Self::Error> {
        let tasks = payload
            .tasks
            .into_iter()
            .map(|task| Task {
                id: task.id,
                location: GeoPoint::new(task.lat, task.lng),
                duration_minutes: task.duration,
                speed_kmh: task.speed,
            })
            .collect();

        Ok(RoutingRequest {
            departure: payload.departure_time.to_seconds()?,
            home: payload.home.into(),
            tasks,
            speed_kmh: payload.speed,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledStopPayload {
    pub id: u64,
    pub starts_at: i64,
    pub ends_at: i64,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
}

impl From<ScheduledStop> for ScheduledStopPayload {
    fn from(stop: ScheduledStop) -> Self {
        Self {
            id: stop.id,
            starts_at: stop.starts_at,
            ends_at: stop.ends_at,
            lat: stop.location.latitude,
            lng: stop.location.longitude,
            task_id: stop.task_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRoutePayload {
    /// Minutes.
    pub total_time: i64,
    pub schedule: Vec<ScheduledStopPayload>,
}

impl From<OptimizedRoute> for OptimizedRoutePayload {
    fn from(route: OptimizedRoute) -> Self {
        Self {
            total_time: route.total_time_minutes,
            schedule: route.schedule.into_iter().map(Into::into).collect(),
        }
    }
}
