//! Puzzle definitions: the token catalog plus the ghost sequences.
//!
//! Puzzles are plain JSON:
//!
//! ```json
//! {
//!   "tokens": [{"symbol": "-", "weight": 1}, {"symbol": "%", "weight": 3}],
//!   "wildcard": "%",
//!   "ghosts": ["-%", "%-"]
//! }
//! ```
//!
//! [`PuzzleSpec::build`] validates the catalog and resolves every ghost
//! symbol against it; nothing unresolved reaches the search.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wraith_kernel::carrier::catalog::{
    CatalogError, TokenCatalog, UnknownTokenError, STANDARD_TOKENS, STANDARD_WILDCARD,
};
use wraith_kernel::carrier::ghost::Ghost;
use wraith_search::state::SearchState;

/// Ghost sequences of the built-in puzzle.
pub const STANDARD_GHOSTS: [&str; 4] = ["-|", "^-", "-^|-", "v^%"];

/// Error while loading or building a puzzle.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("failed to read puzzle file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid token catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("ghost {index} ({sequence:?}): {source}")]
    UnknownToken {
        index: usize,
        sequence: String,
        #[source]
        source: UnknownTokenError,
    },
}

/// One catalog entry as written in a puzzle file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenSpec {
    pub symbol: char,
    pub weight: u64,
}

/// A puzzle as written in a puzzle file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PuzzleSpec {
    pub tokens: Vec<TokenSpec>,
    pub wildcard: char,
    pub ghosts: Vec<String>,
}

/// A validated puzzle ready to search.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub catalog: TokenCatalog,
    pub ghosts: Vec<Ghost>,
}

impl PuzzleSpec {
    /// The four-ghost puzzle over the standard catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            tokens: STANDARD_TOKENS
                .iter()
                .map(|&(symbol, weight)| TokenSpec { symbol, weight })
                .collect(),
            wildcard: STANDARD_WILDCARD,
            ghosts: STANDARD_GHOSTS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Parse a puzzle from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Json`] for malformed JSON, unknown fields, or
    /// symbols that are not exactly one character.
    pub fn from_json_str(text: &str) -> Result<Self, PuzzleError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a puzzle file.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Io`] if the file cannot be read, or any error
    /// of [`Self::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, PuzzleError> {
        let text = std::fs::read_to_string(path).map_err(|source| PuzzleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Pretty-printed JSON, the format [`Self::load`] reads.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, PuzzleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the catalog and resolve every ghost.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Catalog`] for an invalid catalog and
    /// [`PuzzleError::UnknownToken`] for the first ghost using a symbol the
    /// catalog does not define.
    pub fn build(&self) -> Result<Puzzle, PuzzleError> {
        let catalog = TokenCatalog::new(
            self.tokens.iter().map(|t| (t.symbol, t.weight)),
            self.wildcard,
        )?;
        let ghosts = self
            .ghosts
            .iter()
            .enumerate()
            .map(|(index, sequence)| {
                Ghost::parse(sequence, &catalog).map_err(|source| PuzzleError::UnknownToken {
                    index,
                    sequence: sequence.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Puzzle { catalog, ghosts })
    }
}

impl Puzzle {
    /// Root search state over this puzzle's ghosts.
    #[must_use]
    pub fn root_state(&self) -> SearchState {
        SearchState::new(self.ghosts.iter().cloned())
    }
}
