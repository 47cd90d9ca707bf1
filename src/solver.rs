//! Exact route search.
//!
//! Every visiting order is evaluated and the fastest one wins, so the result is
//! optimal by construction. The cost is `O(n! * n)`: this is meant for a
//! handful of tasks (single digits to low teens), not as a general TSP solver.
//! Callers are expected to bound the task count or the time spent.

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::{debug, instrument, trace, warn};

use crate::config::OptimizerConfig;
use crate::error::Result;
use crate::evaluator::{EvaluatedRoute, LegTable, evaluate};
use crate::haversine::Haversine;
use crate::models::{GeoPoint, OptimizedRoute, RoutingRequest, Task};
use crate::permutation::{for_each_permutation, permutation_count};
use crate::schedule::build_schedule;
use crate::speed::SpeedPolicy;
use crate::traits::{DistanceMetric, SpeedResolver};

/// Task count above which the search gets noticeably slow.
const LARGE_SEARCH_TASKS: usize = 10;

#[derive(Debug, Clone)]
struct Candidate {
    ordering: Vec<usize>,
    total: f64,
}

/// Plans the fastest round from `request.home` through every task using
/// great-circle distances.
pub fn optimize(request: &RoutingRequest, config: &OptimizerConfig) -> Result<OptimizedRoute> {
    optimize_with(request, config, &Haversine)
}

/// Same as [`optimize`] with a caller-supplied distance metric.
#[instrument(skip_all, fields(tasks = request.tasks.len(), departure = request.departure))]
pub fn optimize_with<M>(request: &RoutingRequest, config: &OptimizerConfig, metric: &M) -> Result<OptimizedRoute>
where
    M: DistanceMetric + ?Sized,
{
    if request.tasks.is_empty() {
        debug!("no tasks, schedule is the home departure only");
        return build_schedule(request.departure, request.home, &EvaluatedRoute::empty());
    }

    let speeds = SpeedPolicy::resolve(request, config);
    debug!(policy = ?speeds, "optimizing route");

    let best = select_best(request.home, &request.tasks, metric, &speeds, config)?;
    let route = build_schedule(request.departure, request.home, &best)?;

    debug!(
        travel_minutes = best.total_duration_minutes,
        total_time_minutes = route.total_time_minutes,
        "route optimized"
    );
    Ok(route)
}

/// Evaluates every ordering of `tasks` and returns the one with the least
/// travel time.
///
/// Candidates are compared through a [`LegTable`]; the winner is then
/// re-evaluated directly, which yields the same legs and total.
///
/// Ties go to the ordering enumerated first (see [`crate::permutation`]),
/// whether or not the search runs in parallel.
pub fn select_best<'a, M, S>(
    home: GeoPoint,
    tasks: &'a [Task],
    metric: &M,
    speeds: &S,
    config: &OptimizerConfig,
) -> Result<EvaluatedRoute<'a>>
where
    M: DistanceMetric + ?Sized,
    S: SpeedResolver + ?Sized,
{
    if tasks.is_empty() {
        return Ok(EvaluatedRoute::empty());
    }

    let table = LegTable::build(home, tasks, metric, speeds)?;
    let indices: Vec<usize> = (0..tasks.len()).collect();
    let parallel = tasks.len() >= config.parallel_threshold;

    if tasks.len() > LARGE_SEARCH_TASKS {
        warn!(tasks = tasks.len(), "exhaustive search over a large task set");
    }
    debug!(
        tasks = tasks.len(),
        permutations = ?permutation_count(tasks.len()),
        parallel,
        "searching visiting orders"
    );

    let best = if parallel {
        search_parallel(&table, &indices)
    } else {
        scan(&table, &indices, None)
    };

    let Some(best) = best else {
        return Ok(EvaluatedRoute::empty());
    };

    debug!(total = best.total, ordering = ?best.ordering, "best visiting order");
    let ordering: Vec<&Task> = best.ordering.iter().map(|&task| &tasks[task]).collect();
    evaluate(home, &ordering, metric, speeds)
}

/// Left-to-right minimum over every ordering of `items`, each optionally
/// preceded by `first`. Only a strictly smaller total replaces the current best.
fn scan(table: &LegTable, items: &[usize], first: Option<usize>) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    let mut ordering = Vec::with_capacity(items.len() + 1);

    for_each_permutation(items, |tail| {
        ordering.clear();
        ordering.extend(first);
        ordering.extend_from_slice(tail);

        let total = table.total_minutes(&ordering);
        if best.as_ref().is_none_or(|current| total.total_cmp(&current.total).is_lt()) {
            trace!(total, ordering = ?ordering, "improved");
            best = Some(Candidate {
                ordering: ordering.clone(),
                total,
            });
        }
    });

    best
}

/// One branch per leading task; branches are scanned concurrently and reduced
/// by `(total, branch)`, which reproduces the sequential tie-break.
fn search_parallel(table: &LegTable, indices: &[usize]) -> Option<Candidate> {
    indices
        .par_iter()
        .filter_map(|&first| {
            let rest: Vec<usize> = indices.iter().copied().filter(|&i| i != first).collect();
            scan(table, &rest, Some(first)).map(|candidate| (first, candidate))
        })
        .reduce_with(|a, b| match b.1.total.total_cmp(&a.1.total).then(b.0.cmp(&a.0)) {
            Ordering::Less => b,
            _ => a,
        })
        .map(|(_, candidate)| candidate)
}
