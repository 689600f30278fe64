//! Aggregate views over a set of tasks.

use super::{SharedTask, Status};
use std::collections::BTreeMap;

/// Returns the `(min, max)` makespan for `tasks`.
///
/// The minimum assumes unlimited agents working fully in parallel (the
/// largest single cost); the maximum assumes fully sequential execution
/// (the sum of costs). An empty set yields `(0, 0)`.
///
/// # Panics
///
/// Panics if any task is mutably borrowed while the boundaries are computed.
#[must_use]
pub fn makespan_boundaries(tasks: &[SharedTask]) -> (u64, u64) {
    makespan_of_costs(tasks.iter().map(|task| task.borrow().cost()))
}

/// Returns the `(min, max)` makespan for a sequence of task costs.
#[must_use]
pub fn makespan_of_costs(costs: impl IntoIterator<Item = u64>) -> (u64, u64) {
    costs
        .into_iter()
        .fold((0, 0), |(longest, total), cost| {
            (longest.max(cost), total.saturating_add(cost))
        })
}

/// Counts tasks per status.
///
/// Only statuses present in `tasks` appear in the result.
///
/// # Panics
///
/// Panics if any task is mutably borrowed while the statuses are counted.
#[must_use]
pub fn track_statuses(tasks: &[SharedTask]) -> BTreeMap<Status, usize> {
    tally_statuses(tasks.iter().map(|task| task.borrow().status()))
}

/// Counts occurrences of each status in a sequence.
#[must_use]
pub fn tally_statuses(statuses: impl IntoIterator<Item = Status>) -> BTreeMap<Status, usize> {
    let mut counts = BTreeMap::new();
    for status in statuses {
        *counts.entry(status).or_insert(0) += 1;
    }
    counts
}
