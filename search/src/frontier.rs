//! Best-first frontier ordered by `(f_cost, insertion_order)`.
//!
//! No content dedup and no closed set: two entries with the same ghosts
//! reached by different steps are kept side by side.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::cost::{f, Heuristic};
use crate::state::SearchState;

/// The frontier ordering key: lower `f_cost` first, then older insertion.
///
/// `insertion_order` is unique per frontier, so the order is total and the
/// states themselves are never compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub insertion_order: u64,
}

/// A frontier entry wrapping a state with its ordering key.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop the
/// smallest key first.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    state: SearchState,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Pending states, most promising first.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_insertion_order: u64,
    high_water: u64,
}

impl Frontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank `state` by `f` under `heuristic` and insert it.
    ///
    /// Returns the key assigned to the new entry.
    pub fn add(&mut self, state: SearchState, heuristic: &dyn Heuristic) -> FrontierKey {
        let f_cost = f(&state, heuristic);
        self.push(state, f_cost)
    }

    /// Insert `state` with a precomputed `f_cost`.
    pub fn push(&mut self, state: SearchState, f_cost: u64) -> FrontierKey {
        let key = FrontierKey {
            f_cost,
            insertion_order: self.next_insertion_order,
        };
        self.next_insertion_order += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            state,
        });
        self.high_water = self.high_water.max(self.heap.len() as u64);
        key
    }

    /// Remove the entry with the smallest `(f_cost, insertion_order)`.
    pub fn pop_most_promising(&mut self) -> Option<(FrontierKey, SearchState)> {
        self.heap.pop().map(|e| (e.key.0, e.state))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Insertion order the next entry will receive (= entries ever added).
    #[must_use]
    pub fn next_insertion_order(&self) -> u64 {
        self.next_insertion_order
    }
}
