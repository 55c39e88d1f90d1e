//! Run reports: what a solved (or unsolved) puzzle looks like to a user.

use serde::Serialize;

use wraith_search::search::SearchResult;
use wraith_search::trace::TerminationReason;

/// Summary of one puzzle run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Emitted symbols of the optimal solution, `None` when unsolved.
    pub steps: Option<Vec<char>>,
    /// Total weight of `steps`.
    pub cost: Option<u64>,
    pub termination: String,
    pub heuristic: String,
    pub candidate_rule: String,
    pub expansions: u64,
    pub states_generated: u64,
    pub frontier_high_water: u64,
}

impl RunReport {
    /// Summarize `result`.
    #[must_use]
    pub fn from_result(result: &SearchResult) -> Self {
        let metadata = &result.trace.metadata;
        Self {
            steps: result.steps(),
            cost: result.cost(),
            termination: metadata.termination.as_str().to_string(),
            heuristic: metadata.heuristic.clone(),
            candidate_rule: metadata.candidate_rule.clone(),
            expansions: metadata.total_expansions,
            states_generated: metadata.total_states_generated,
            frontier_high_water: metadata.frontier_high_water,
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.steps.is_some()
    }

    /// Human-readable result.
    ///
    /// ```text
    /// optimal steps: ['v', '-', '^', '%', '-']
    /// minimal cost: 9
    /// ```
    #[must_use]
    pub fn render_text(&self) -> String {
        match (&self.steps, self.cost) {
            (Some(steps), Some(cost)) => {
                format!("optimal steps: {steps:?}\nminimal cost: {cost}\n")
            }
            _ if self.termination == TerminationReason::ExpansionBudgetExceeded.as_str() => {
                format!(
                    "no solution (expansion budget exhausted after {} expansions)\n",
                    self.expansions
                )
            }
            _ => "no solution\n".to_string(),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
