//! Lays the winning visiting order out on the clock.

use crate::error::{Result, RouteError};
use crate::evaluator::EvaluatedRoute;
use crate::models::{GeoPoint, OptimizedRoute, ScheduledStop};

/// Converts minutes to whole seconds, rounding half away from zero.
///
/// Returns `None` when the result does not fit an `i64`.
fn minutes_to_seconds(minutes: f64) -> Option<i64> {
    let seconds = (minutes * 60.0).round();
    // i64::MAX as f64 is 2^63, one past the largest representable value.
    if seconds.is_finite() && seconds >= i64::MIN as f64 && seconds < i64::MAX as f64 {
        Some(seconds as i64)
    } else {
        None
    }
}

fn advance(clock: i64, minutes: f64, task_id: u64) -> Result<i64> {
    minutes_to_seconds(minutes)
        .and_then(|seconds| clock.checked_add(seconds))
        .ok_or(RouteError::ScheduleOverflow { task_id })
}

/// Builds the schedule for `route`, leaving home at `departure`.
///
/// The clock advances by the rounded travel time to reach each task, then by
/// its rounded on-site duration. Rounding happens at every step, so the stops
/// carry whole seconds throughout. The schedule ends when the last task is
/// done; the drive back home is not part of it.
pub fn build_schedule(departure: i64, home: GeoPoint, route: &EvaluatedRoute<'_>) -> Result<OptimizedRoute> {
    let mut schedule = Vec::with_capacity(route.ordering.len() + 1);
    schedule.push(ScheduledStop {
        id: 1,
        task_id: None,
        starts_at: departure,
        ends_at: departure,
        location: home,
    });

    let mut clock = departure;
    for (position, (task, travel_minutes)) in route
        .ordering
        .iter()
        .zip(&route.leg_durations_minutes)
        .enumerate()
    {
        if !task.duration_minutes.is_finite() || task.duration_minutes < 0.0 {
            return Err(RouteError::InvalidDuration {
                task_id: task.id,
                minutes: task.duration_minutes,
            });
        }

        clock = advance(clock, *travel_minutes, task.id)?;
        let starts_at = clock;
        clock = advance(clock, task.duration_minutes, task.id)?;

        schedule.push(ScheduledStop {
            id: position as u64 + 2,
            task_id: Some(task.id),
            starts_at,
            ends_at: clock,
            location: task.location,
        });
    }

    // Widened: a far-past departure and a far-future clock can span more than i64.
    let elapsed = i128::from(clock) - i128::from(departure);
    let total_time_minutes = (elapsed as f64 / 60.0).round() as i64;

    Ok(OptimizedRoute {
        total_time_minutes,
        schedule,
    })
}
