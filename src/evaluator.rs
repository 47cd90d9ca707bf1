//! Travel time of a visiting order.
//!
//! A route starts at home and visits tasks in the given order. Each leg takes
//! `meters / (km/h * 1000 / 60)` minutes at the speed resolved for the task it
//! arrives at. Time spent on site is not part of the total; the schedule adds
//! it later.

use crate::error::{Result, RouteError};
use crate::models::{GeoPoint, Task};
use crate::traits::{DistanceMetric, SpeedResolver};

/// One visiting order with its leg durations.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedRoute<'a> {
    pub ordering: Vec<&'a Task>,
    /// Minutes per leg; leg `i` arrives at `ordering[i]`.
    pub leg_durations_minutes: Vec<f64>,
    pub total_duration_minutes: f64,
}

impl EvaluatedRoute<'_> {
    /// The route with nothing to visit.
    pub fn empty() -> Self {
        Self {
            ordering: Vec::new(),
            leg_durations_minutes: Vec::new(),
            total_duration_minutes: 0.0,
        }
    }
}

/// Minutes needed to cover `distance_m` meters at `speed_kmh`.
pub fn leg_minutes(distance_m: f64, speed_kmh: f64) -> f64 {
    distance_m / (speed_kmh * 1000.0 / 60.0)
}

fn resolved_speed<S: SpeedResolver + ?Sized>(speeds: &S, task: &Task) -> Result<f64> {
    let speed_kmh = speeds.speed_kmh(task);
    if speed_kmh.is_finite() && speed_kmh > 0.0 {
        Ok(speed_kmh)
    } else {
        Err(RouteError::InvalidSpeed {
            task_id: task.id,
            speed_kmh,
        })
    }
}

/// Minutes of the leg from `from` to `task`. Every leg, direct or tabled, is
/// computed here.
fn leg_to<M, S>(from: GeoPoint, task: &Task, metric: &M, speeds: &S) -> Result<f64>
where
    M: DistanceMetric + ?Sized,
    S: SpeedResolver + ?Sized,
{
    let speed_kmh = resolved_speed(speeds, task)?;
    let meters = metric.distance_meters(from, task.location)?;
    Ok(leg_minutes(meters, speed_kmh))
}

fn sum_legs(legs: &[f64]) -> f64 {
    legs.iter().fold(0.0, |acc, leg| acc + leg)
}

/// Evaluates one visiting order directly against the metric.
///
/// An empty ordering has no legs and a zero total.
pub fn evaluate<'a, M, S>(
    home: GeoPoint,
    ordering: &[&'a Task],
    metric: &M,
    speeds: &S,
) -> Result<EvaluatedRoute<'a>>
where
    M: DistanceMetric + ?Sized,
    S: SpeedResolver + ?Sized,
{
    let mut legs = Vec::with_capacity(ordering.len());
    let mut prev = home;

    for task in ordering {
        legs.push(leg_to(prev, task, metric, speeds)?);
        prev = task.location;
    }

    Ok(EvaluatedRoute {
        ordering: ordering.to_vec(),
        total_duration_minutes: sum_legs(&legs),
        leg_durations_minutes: legs,
    })
}

/// Precomputed leg durations between home and every task.
///
/// Index 0 is home, index `i + 1` is `tasks[i]`. Entries go through the same
/// leg computation as [`evaluate`], so a table total equals the direct total
/// of the same order bit for bit.
#[derive(Debug, Clone)]
pub struct LegTable {
    minutes: Vec<f64>,
    size: usize,
}

impl LegTable {
    pub fn build<M, S>(home: GeoPoint, tasks: &[Task], metric: &M, speeds: &S) -> Result<Self>
    where
        M: DistanceMetric + ?Sized,
        S: SpeedResolver + ?Sized,
    {
        let size = tasks.len() + 1;
        let mut minutes = vec![0.0; size * size];

        let points: Vec<GeoPoint> = std::iter::once(home)
            .chain(tasks.iter().map(|task| task.location))
            .collect();

        for (to_task, task) in tasks.iter().enumerate() {
            let to = to_task + 1;
            for (from, point) in points.iter().enumerate() {
                if from == to {
                    continue;
                }
                minutes[from * size + to] = leg_to(*point, task, metric, speeds)?;
            }
        }

        Ok(Self { minutes, size })
    }

    /// Number of tasks covered by the table.
    pub fn task_count(&self) -> usize {
        self.size - 1
    }

    /// Minutes from node `from` to node `to` (0 = home, `i + 1` = task `i`).
    pub fn leg(&self, from: usize, to: usize) -> f64 {
        self.minutes[from * self.size + to]
    }

    /// Total travel minutes of `ordering`, given as task indices.
    pub fn total_minutes(&self, ordering: &[usize]) -> f64 {
        debug_assert!(ordering.len() <= self.task_count());
        let mut prev = 0;
        let mut total = 0.0;
        for &task in ordering {
            total += self.leg(prev, task + 1);
            prev = task + 1;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haversine::{EARTH_RADIUS_M, Haversine};

    const SPEED: f64 = 60.0;

    fn uniform(_: &Task) -> f64 {
        SPEED
    }

    fn tasks() -> Vec<Task> {
        vec![
            Task::new(1, (0.0, 1.0), 10.0),
            Task::new(2, (1.0, 1.0), 20.0),
            Task::new(3, (1.0, 0.0), 5.0),
        ]
    }

    #[test]
    fn test_leg_minutes() {
        // 10 km at 40 km/h = 15 minutes
        assert!((leg_minutes(10_000.0, 40.0) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_first_leg_starts_at_home() {
        let tasks = tasks();
        let route = evaluate(GeoPoint::new(0.0, 0.0), &[&tasks[0]], &Haversine, &uniform).unwrap();

        let meters = EARTH_RADIUS_M * 1.0_f64.to_radians();
        let expected = meters / (SPEED * 1000.0 / 60.0);
        assert_eq!(route.leg_durations_minutes.len(), 1);
        assert!((route.total_duration_minutes - expected).abs() < 1e-9);
    }

    #[test]
    fn test_total_is_sum_of_legs_and_excludes_task_durations() {
        let tasks = tasks();
        let ordering: Vec<&Task> = tasks.iter().collect();
        let route = evaluate(GeoPoint::new(0.0, 0.0), &ordering, &Haversine, &uniform).unwrap();

        assert_eq!(route.leg_durations_minutes.len(), 3);
        let sum: f64 = route.leg_durations_minutes.iter().sum();
        assert!((route.total_duration_minutes - sum).abs() < 1e-12);
        // Three legs of roughly one degree each at 60 km/h: ~111 minutes apiece.
        assert!(route.total_duration_minutes > 300.0 && route.total_duration_minutes < 350.0);
    }

    #[test]
    fn test_empty_ordering_has_zero_total() {
        let route = evaluate(GeoPoint::new(0.0, 0.0), &[], &Haversine, &uniform).unwrap();
        assert_eq!(route, EvaluatedRoute::empty());
    }

    #[test]
    fn test_speed_of_destination_task_is_used() {
        let slow = Task::new(1, (0.0, 1.0), 10.0).with_speed(30.0);
        let fast = Task::new(2, (0.0, 2.0), 10.0).with_speed(60.0);
        let per_task = |task: &Task| task.speed_kmh.unwrap_or(f64::NAN);

        let route = evaluate(GeoPoint::new(0.0, 0.0), &[&slow, &fast], &Haversine, &per_task).unwrap();
        let legs = &route.leg_durations_minutes;
        // Same distance, the slower leg takes twice as long.
        assert!((legs[0] - 2.0 * legs[1]).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_speed_is_rejected() {
        let tasks = tasks();
        let zero = |_: &Task| 0.0;
        let err = evaluate(GeoPoint::new(0.0, 0.0), &[&tasks[1]], &Haversine, &zero).unwrap_err();
        assert_eq!(
            err,
            RouteError::InvalidSpeed {
                task_id: 2,
                speed_kmh: 0.0
            }
        );
    }

    #[test]
    fn test_malformed_home_propagates() {
        let tasks = tasks();
        let err = evaluate(GeoPoint::new(f64::NAN, 0.0), &[&tasks[0]], &Haversine, &uniform).unwrap_err();
        assert!(matches!(err, RouteError::MalformedGeometry { .. }));
    }

    #[test]
    fn test_table_matches_direct_evaluation() {
        let tasks = tasks();
        let home = GeoPoint::new(0.0, 0.0);
        let table = LegTable::build(home, &tasks, &Haversine, &uniform).unwrap();
        assert_eq!(table.task_count(), 3);

        for ordering in [[0, 1, 2], [2, 0, 1], [1, 2, 0]] {
            let refs: Vec<&Task> = ordering.iter().map(|&i| &tasks[i]).collect();
            let direct = evaluate(home, &refs, &Haversine, &uniform).unwrap();

            assert_eq!(table.total_minutes(&ordering), direct.total_duration_minutes);
            for (i, leg) in direct.leg_durations_minutes.iter().enumerate() {
                let from = if i == 0 { 0 } else { ordering[i - 1] + 1 };
                assert_eq!(table.leg(from, ordering[i] + 1), *leg);
            }
        }
    }

    #[test]
    fn test_table_build_rejects_malformed_task() {
        let tasks = vec![Task::new(1, (0.0, f64::INFINITY), 10.0)];
        let result = LegTable::build(GeoPoint::new(0.0, 0.0), &tasks, &Haversine, &uniform);
        assert!(matches!(result, Err(RouteError::MalformedGeometry { .. })));
    }
}
