//! Harness runner: puzzle spec in, run report out.
//!
//! # Pipeline
//!
//! ```text
//! PuzzleSpec::build() → search() → RunReport
//! ```

use thiserror::Error;

use wraith_search::cost::{Heuristic, MaxRemainingCost, ZeroHeuristic};
use wraith_search::error::SearchError;
use wraith_search::policy::{CandidateRule, SearchPolicy};
use wraith_search::search::{search, SearchResult};

use crate::puzzle::{Puzzle, PuzzleError, PuzzleSpec};
use crate::report::RunReport;

/// Error during a harness run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Which heuristic ranks the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum HeuristicKind {
    /// Largest remaining cost of any ghost.
    #[default]
    MaxRemaining,
    /// No estimate (uniform-cost search).
    Zero,
}

impl HeuristicKind {
    #[must_use]
    pub fn heuristic(self) -> &'static dyn Heuristic {
        match self {
            Self::MaxRemaining => &MaxRemainingCost,
            Self::Zero => &ZeroHeuristic,
        }
    }
}

/// Knobs for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    pub heuristic: HeuristicKind,
    /// Also branch on the wildcard when no ghost expects it.
    pub wildcard_candidates: bool,
    pub max_expansions: Option<u64>,
}

impl RunOptions {
    /// Search policy for `puzzle` under these options.
    #[must_use]
    pub fn policy_for(&self, puzzle: &Puzzle) -> SearchPolicy {
        let candidate_rule = if self.wildcard_candidates {
            CandidateRule::FrontTokensWithWildcard {
                wildcard: puzzle.catalog.wildcard(),
            }
        } else {
            CandidateRule::FrontTokens
        };
        SearchPolicy {
            candidate_rule,
            max_expansions: self.max_expansions,
        }
    }
}

/// Search a built puzzle.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the derived policy fails validation.
pub fn solve(puzzle: &Puzzle, options: &RunOptions) -> Result<SearchResult, RunError> {
    let policy = options.policy_for(puzzle);
    Ok(search(
        puzzle.root_state(),
        options.heuristic.heuristic(),
        &policy,
    )?)
}

/// Build, search and summarize `spec`.
///
/// # Errors
///
/// Returns [`RunError`] if the puzzle does not build or the policy is
/// invalid. An unsolvable puzzle is not an error.
pub fn run_puzzle(spec: &PuzzleSpec, options: &RunOptions) -> Result<RunReport, RunError> {
    let puzzle = spec.build()?;
    tracing::info!(
        ghosts = puzzle.ghosts.len(),
        tokens = puzzle.catalog.len(),
        heuristic = ?options.heuristic,
        wildcard_candidates = options.wildcard_candidates,
        "running puzzle"
    );

    let result = solve(&puzzle, options)?;
    Ok(RunReport::from_result(&result))
}
