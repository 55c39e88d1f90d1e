//! `SearchTrace`: expansion-event log.
//!
//! The ordered list of [`ExpandEvent`]s is the record of every decision the
//! driver made. Two runs over the same input produce equal traces.

use crate::frontier::FrontierKey;

/// The complete expansion log of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTrace {
    /// Ordered expansion events.
    pub expansions: Vec<ExpandEvent>,
    /// Aggregate metadata.
    pub metadata: TraceMetadata,
}

/// One frontier pop followed by expansion of the popped state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Total order of expansions.
    pub expansion_order: u64,
    /// Remaining symbols of each ghost in the expanded state, in set order.
    pub ghosts: Vec<String>,
    /// Frontier key at pop time.
    pub pop_key: FrontierKey,
    /// Cost paid to reach the expanded state.
    pub g_cost: u64,
    /// Candidates in processing order. Ends early when a solution is returned.
    pub candidates: Vec<CandidateRecord>,
}

/// A candidate token and what happened to its successor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub token: char,
    pub outcome: CandidateOutcome,
}

/// Outcome of one successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// Not a solution; inserted into the frontier.
    Enqueued { key: FrontierKey },
    /// A solution returned immediately.
    Solution { cost: u64 },
    /// A solution costing more than the popped key's `f_cost`; inserted so
    /// that cheaper pending states are expanded first.
    DeferredSolution { key: FrontierKey },
}

/// Why the driver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// Every ghost was cleared.
    Solved { cost: u64, depth: u64 },
    /// The frontier ran dry without a solution.
    FrontierExhausted,
    /// `SearchPolicy::max_expansions` was reached.
    ExpansionBudgetExceeded,
}

/// Aggregate counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceMetadata {
    pub heuristic: String,
    pub candidate_rule: String,
    pub termination: TerminationReason,
    pub total_expansions: u64,
    /// Successor states built, including any returned solution.
    pub total_states_generated: u64,
    pub frontier_high_water: u64,
}

impl TerminationReason {
    /// Stable name used in logs and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solved { .. } => "solved",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}
