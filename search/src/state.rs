//! Search state: the live ghosts plus the tokens emitted to reach them.

use std::collections::BTreeSet;

use wraith_kernel::carrier::catalog::Token;
use wraith_kernel::carrier::ghost::Ghost;

use crate::policy::CandidateRule;

/// An immutable snapshot of the search.
///
/// Holds only non-cleared ghosts, collapsed by content. Successors are built
/// from copies; a state is never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    ghosts: BTreeSet<Ghost>,
    steps: Vec<Token>,
}

impl SearchState {
    /// Root state for `ghosts`. Cleared ghosts are dropped and duplicates
    /// collapsed.
    #[must_use]
    pub fn new(ghosts: impl IntoIterator<Item = Ghost>) -> Self {
        Self {
            ghosts: ghosts.into_iter().filter(|g| !g.cleared()).collect(),
            steps: Vec::new(),
        }
    }

    /// Whether every ghost has been cleared.
    #[must_use]
    pub fn is_solution(&self) -> bool {
        self.ghosts.is_empty()
    }

    /// Live ghosts in content order.
    pub fn ghosts(&self) -> impl ExactSizeIterator<Item = &Ghost> {
        self.ghosts.iter()
    }

    /// Tokens emitted so far, in order.
    #[must_use]
    pub fn steps(&self) -> &[Token] {
        &self.steps
    }

    /// Emitted symbols, in order.
    #[must_use]
    pub fn step_symbols(&self) -> Vec<char> {
        self.steps.iter().map(|t| t.symbol()).collect()
    }

    /// Number of emitted tokens.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// Distinct tokens worth emitting from this state, in symbol order.
    ///
    /// Always the front token of every live ghost. Any other non-wildcard
    /// token changes nothing. Never empty unless the state is a solution,
    /// and every candidate advances at least one ghost.
    #[must_use]
    pub fn candidate_tokens(&self, rule: CandidateRule) -> BTreeSet<Token> {
        let mut candidates: BTreeSet<Token> = self.ghosts.iter().filter_map(Ghost::front).collect();
        if let CandidateRule::FrontTokensWithWildcard { wildcard } = rule {
            if !candidates.is_empty() {
                candidates.insert(wildcard);
            }
        }
        candidates
    }

    /// Successors over the distinct front tokens.
    #[must_use]
    pub fn expand(&self) -> Vec<SearchState> {
        self.expand_with(CandidateRule::FrontTokens)
    }

    /// One successor per candidate token of `rule`, in symbol order.
    #[must_use]
    pub fn expand_with(&self, rule: CandidateRule) -> Vec<SearchState> {
        self.candidate_tokens(rule)
            .into_iter()
            .map(|token| self.successor(token))
            .collect()
    }

    /// The state reached by emitting `token`.
    #[must_use]
    pub fn successor(&self, token: Token) -> SearchState {
        let ghosts = self
            .ghosts
            .iter()
            .cloned()
            .filter_map(|mut ghost| {
                ghost.receive(token);
                (!ghost.cleared()).then_some(ghost)
            })
            .collect();
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(token);
        SearchState { ghosts, steps }
    }
}
