//! Search policy types.

use wraith_kernel::carrier::catalog::Token;

use crate::error::SearchError;

/// Which tokens a state branches on during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidateRule {
    /// The distinct front tokens of the live ghosts.
    #[default]
    FrontTokens,
    /// Front tokens plus `wildcard`, even when no ghost expects it.
    ///
    /// One wildcard can clear several different fronts at once, so this
    /// rule finds solutions the front-only rule cannot express.
    FrontTokensWithWildcard { wildcard: Token },
}

impl CandidateRule {
    /// Stable name used in traces and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FrontTokens => "front_tokens",
            Self::FrontTokensWithWildcard { .. } => "front_tokens_with_wildcard",
        }
    }
}

/// Search configuration.
///
/// The default runs to termination: front-token branching and no expansion
/// budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Candidate tokens considered at each expansion.
    pub candidate_rule: CandidateRule,
    /// Hard cap on frontier pops that get expanded. `None` is unlimited.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Validate the policy before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero
    /// (the root could never be expanded) or the extra candidate of
    /// `FrontTokensWithWildcard` is not a wildcard token.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if let CandidateRule::FrontTokensWithWildcard { wildcard } = self.candidate_rule {
            if !wildcard.is_wildcard() {
                return Err(SearchError::InvalidPolicy {
                    detail: format!("candidate token {wildcard} is not the catalog wildcard"),
                });
            }
        }
        Ok(())
    }
}
