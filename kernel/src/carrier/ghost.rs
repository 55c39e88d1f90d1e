//! `Ghost`: one entity's remaining token sequence.
//!
//! The front of the sequence is the next token the ghost expects. The cached
//! `remaining_cost` is decremented on every removal and always equals the sum
//! of the weights still held.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use crate::carrier::catalog::{Token, TokenCatalog, UnknownTokenError};

/// An ordered sequence of remaining tokens with its cached cost.
///
/// Equality, ordering and hashing use the remaining tokens only, so two
/// ghosts with the same remaining sequence are interchangeable.
#[derive(Debug, Clone)]
pub struct Ghost {
    tokens: VecDeque<Token>,
    remaining_cost: u64,
}

/// The cached cost disagreed with a fresh recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostDrift {
    pub cached: u64,
    pub recomputed: u64,
}

impl Ghost {
    /// Build a ghost from already-resolved tokens.
    #[must_use]
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        let tokens: VecDeque<Token> = tokens.into_iter().collect();
        let remaining_cost = tokens.iter().map(|t| t.weight()).sum();
        Self {
            tokens,
            remaining_cost,
        }
    }

    /// Build a ghost from a literal symbol sequence such as `"-^|-"`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTokenError`] if any symbol is missing from `catalog`.
    pub fn parse(sequence: &str, catalog: &TokenCatalog) -> Result<Self, UnknownTokenError> {
        Ok(Self::new(catalog.parse_sequence(sequence)?))
    }

    /// Remove the front token if `token` matches it or is the wildcard.
    ///
    /// Returns `true` if a token was removed. A mismatch, or a ghost that is
    /// already cleared, leaves the ghost untouched.
    pub fn receive(&mut self, token: Token) -> bool {
        match self.tokens.front() {
            Some(&front) if token.matches(front) => {
                self.tokens.pop_front();
                self.remaining_cost -= front.weight();
                true
            }
            _ => false,
        }
    }

    /// Whether no tokens remain.
    #[must_use]
    pub fn cleared(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The next expected token.
    #[must_use]
    pub fn front(&self) -> Option<Token> {
        self.tokens.front().copied()
    }

    /// Remaining tokens, front first.
    pub fn tokens(&self) -> impl ExactSizeIterator<Item = Token> + '_ {
        self.tokens.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Sum of the weights of the remaining tokens (cached).
    #[must_use]
    pub fn remaining_cost(&self) -> u64 {
        self.remaining_cost
    }

    /// Sum of the weights of the remaining tokens, recomputed from scratch.
    #[must_use]
    pub fn recomputed_cost(&self) -> u64 {
        self.tokens.iter().map(|t| t.weight()).sum()
    }

    /// Verify the cached cost against [`Self::recomputed_cost`].
    ///
    /// # Errors
    ///
    /// Returns [`CostDrift`] if the two disagree.
    pub fn check_cost_invariant(&self) -> Result<(), CostDrift> {
        let recomputed = self.recomputed_cost();
        if recomputed == self.remaining_cost {
            Ok(())
        } else {
            Err(CostDrift {
                cached: self.remaining_cost,
                recomputed,
            })
        }
    }

    /// Remaining symbols as a string, front first.
    #[must_use]
    pub fn symbols(&self) -> String {
        self.tokens.iter().map(|t| t.symbol()).collect()
    }
}

impl PartialEq for Ghost {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for Ghost {}

impl PartialOrd for Ghost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ghost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tokens.iter().cmp(other.tokens.iter())
    }
}

impl Hash for Ghost {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tokens.hash(state);
    }
}

impl std::fmt::Display for Ghost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbols())
    }
}
