//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (a solution, an exhausted frontier, an exhausted expansion budget) are
//! expressed via [`crate::trace::TerminationReason`] and always come with a
//! complete [`crate::trace::SearchTrace`].

use thiserror::Error;

/// Typed failure for pre-flight search validation.
///
/// Returned before the root state is pushed; no trace is produced because
/// no search step was taken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The policy cannot drive a search.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
