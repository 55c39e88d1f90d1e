//! Cost functions: `g` (paid so far), `h` (remaining estimate), `f = g + h`.
//!
//! The heuristic is a trait so the driver can run plain uniform-cost search
//! (`ZeroHeuristic`) against the default estimate for cross-checking.

use wraith_kernel::carrier::ghost::Ghost;

use crate::state::SearchState;

/// Remaining-cost estimate for a state.
///
/// Implementations must never overestimate the cheapest remaining cost, or
/// the first solution found is no longer guaranteed optimal.
pub trait Heuristic {
    /// Lower bound on the cost still needed to clear every ghost.
    fn estimate(&self, state: &SearchState) -> u64;

    /// Stable name recorded in traces and reports.
    fn name(&self) -> &'static str;
}

/// `h` = the largest `remaining_cost` of any live ghost.
///
/// Every token of that ghost must be cleared by a distinct emission costing
/// at least the token's weight (the catalog guarantees the wildcard is the
/// heaviest token), so this never overestimates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxRemainingCost;

impl Heuristic for MaxRemainingCost {
    fn estimate(&self, state: &SearchState) -> u64 {
        h(state)
    }

    fn name(&self) -> &'static str {
        "max_remaining_cost"
    }
}

/// `h` = 0 everywhere: uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _state: &SearchState) -> u64 {
        0
    }

    fn name(&self) -> &'static str {
        "zero"
    }
}

/// Actual cost of the steps taken so far.
#[must_use]
pub fn g(state: &SearchState) -> u64 {
    state.steps().iter().map(|t| t.weight()).sum()
}

/// Max remaining cost over the live ghosts; 0 for a solved state.
#[must_use]
pub fn h(state: &SearchState) -> u64 {
    state
        .ghosts()
        .map(Ghost::remaining_cost)
        .max()
        .unwrap_or(0)
}

/// `g(state) + heuristic(state)`: the frontier ranking key.
#[must_use]
pub fn f(state: &SearchState, heuristic: &dyn Heuristic) -> u64 {
    g(state).saturating_add(heuristic.estimate(state))
}
