//! Search entry point and expansion loop.

use wraith_kernel::carrier::ghost::Ghost;

use crate::cost::{g, Heuristic};
use crate::error::SearchError;
use crate::frontier::{Frontier, FrontierKey};
use crate::policy::SearchPolicy;
use crate::state::SearchState;
use crate::trace::{
    CandidateOutcome, CandidateRecord, ExpandEvent, SearchTrace, TerminationReason, TraceMetadata,
};

/// Result of a search execution.
///
/// Always carries the complete trace. No solution is a normal outcome, not
/// an error; check [`SearchResult::is_solved`] or [`SearchResult::termination`].
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The solved state (if found). Its `steps` are the emitted tokens.
    pub solution: Option<SearchState>,
    /// The complete audit trail.
    pub trace: SearchTrace,
}

impl SearchResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Why the search stopped.
    #[must_use]
    pub fn termination(&self) -> TerminationReason {
        self.trace.metadata.termination
    }

    /// Total cost of the solution's steps.
    #[must_use]
    pub fn cost(&self) -> Option<u64> {
        self.solution.as_ref().map(g)
    }

    /// Emitted symbols of the solution.
    #[must_use]
    pub fn steps(&self) -> Option<Vec<char>> {
        self.solution.as_ref().map(SearchState::step_symbols)
    }
}

/// Counters carried from the loop into the trace metadata.
struct Tally<'a> {
    heuristic: &'a dyn Heuristic,
    policy: &'a SearchPolicy,
    expansions: Vec<ExpandEvent>,
    states_generated: u64,
}

impl Tally<'_> {
    fn finish(
        self,
        solution: Option<SearchState>,
        termination: TerminationReason,
        frontier: &Frontier,
    ) -> SearchResult {
        let total_expansions = self.expansions.len() as u64;
        tracing::info!(
            termination = termination.as_str(),
            expansions = total_expansions,
            states_generated = self.states_generated,
            frontier_high_water = frontier.high_water(),
            cost = ?solution.as_ref().map(g),
            "search finished"
        );
        SearchResult {
            solution,
            trace: SearchTrace {
                expansions: self.expansions,
                metadata: TraceMetadata {
                    heuristic: self.heuristic.name().to_string(),
                    candidate_rule: self.policy.candidate_rule.as_str().to_string(),
                    termination,
                    total_expansions,
                    total_states_generated: self.states_generated,
                    frontier_high_water: frontier.high_water(),
                },
            },
        }
    }
}

fn solved(state: &SearchState) -> TerminationReason {
    TerminationReason::Solved {
        cost: g(state),
        depth: state.depth() as u64,
    }
}

/// Run best-first search from `root`.
///
/// Pops the state with the smallest `(f, insertion_order)`, expands it over
/// the policy's candidate tokens, and returns the first solution whose cost
/// does not exceed the popped key's `f_cost`. With an admissible heuristic
/// that solution is optimal: no pending state can lead to anything cheaper.
/// A solution that costs more is enqueued at `f = g` instead and returned
/// once it is the most promising entry.
///
/// Which case applies depends on the heuristic. Under `MaxRemainingCost`
/// with front-token candidates, a solving token weighs no more than `h` of
/// its parent, so solutions are returned on the spot. Under
/// `ZeroHeuristic` the popped `f_cost` is just `g`, every solution costs
/// more, and each one is deferred and returned when popped.
///
/// A root with no live ghosts is returned as-is without touching the
/// frontier.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures. Every runtime termination, including an exhausted
/// frontier, returns `Ok`.
pub fn search(
    root: SearchState,
    heuristic: &dyn Heuristic,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    policy.validate()?;

    let mut frontier = Frontier::new();
    let mut tally = Tally {
        heuristic,
        policy,
        expansions: Vec::new(),
        states_generated: 0,
    };

    if root.is_solution() {
        let termination = solved(&root);
        return Ok(tally.finish(Some(root), termination, &frontier));
    }

    tracing::debug!(
        ghosts = root.ghosts().len(),
        heuristic = heuristic.name(),
        candidate_rule = policy.candidate_rule.as_str(),
        "search started"
    );
    frontier.add(root, heuristic);

    loop {
        // Unreachable with a non-empty root: every live state has at least
        // one candidate, and each non-solution successor is enqueued.
        let Some((pop_key, current)) = frontier.pop_most_promising() else {
            return Ok(tally.finish(None, TerminationReason::FrontierExhausted, &frontier));
        };

        // Only deferred solutions reach the frontier.
        if current.is_solution() {
            let termination = solved(&current);
            return Ok(tally.finish(Some(current), termination, &frontier));
        }

        let expansion_order = tally.expansions.len() as u64;
        if policy.max_expansions.is_some_and(|max| expansion_order >= max) {
            return Ok(tally.finish(
                None,
                TerminationReason::ExpansionBudgetExceeded,
                &frontier,
            ));
        }

        let (event, found) = expand_one(&current, pop_key, expansion_order, &mut frontier, &mut tally);
        tracing::debug!(
            expansion = expansion_order,
            f_cost = pop_key.f_cost,
            g_cost = event.g_cost,
            depth = current.depth(),
            ghosts = current.ghosts().len(),
            candidates = event.candidates.len(),
            frontier = frontier.len(),
            "expanded state"
        );
        tally.expansions.push(event);

        if let Some(solution) = found {
            let termination = solved(&solution);
            return Ok(tally.finish(Some(solution), termination, &frontier));
        }
    }
}

/// Expand `current`, feeding non-solutions into the frontier.
///
/// Stops at the first successor that can be returned directly; siblings
/// after it are never built.
fn expand_one(
    current: &SearchState,
    pop_key: FrontierKey,
    expansion_order: u64,
    frontier: &mut Frontier,
    tally: &mut Tally<'_>,
) -> (ExpandEvent, Option<SearchState>) {
    let mut candidates = Vec::new();
    let mut found = None;

    for token in current.candidate_tokens(tally.policy.candidate_rule) {
        let successor = current.successor(token);
        tally.states_generated += 1;

        let outcome = if successor.is_solution() {
            let cost = g(&successor);
            if cost <= pop_key.f_cost {
                found = Some(successor);
                CandidateOutcome::Solution { cost }
            } else {
                CandidateOutcome::DeferredSolution {
                    key: frontier.add(successor, tally.heuristic),
                }
            }
        } else {
            CandidateOutcome::Enqueued {
                key: frontier.add(successor, tally.heuristic),
            }
        };
        candidates.push(CandidateRecord {
            token: token.symbol(),
            outcome,
        });

        if found.is_some() {
            break;
        }
    }

    let event = ExpandEvent {
        expansion_order,
        ghosts: current.ghosts().map(Ghost::symbols).collect(),
        pop_key,
        g_cost: g(current),
        candidates,
    };
    (event, found)
}
