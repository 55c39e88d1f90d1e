//! Token catalog: the fixed symbol to weight mapping for a puzzle.
//!
//! The catalog is validated once at construction and is read-only afterwards.
//! Lookups that miss fail with [`UnknownTokenError`]; there is no
//! auto-allocation of unseen symbols.

use std::collections::BTreeMap;

use thiserror::Error;

/// Symbol designated as the wildcard in [`TokenCatalog::standard`].
pub const STANDARD_WILDCARD: char = '%';

/// Entries of [`TokenCatalog::standard`].
pub const STANDARD_TOKENS: [(char, u64); 5] = [('-', 1), ('|', 1), ('^', 2), ('v', 2), ('%', 3)];

/// Largest accepted token weight (`u32::MAX`).
///
/// Every cost in the search is a sum of token weights. With weights capped
/// here, a `u64` sum cannot overflow before a puzzle holds 2^32 tokens.
pub const MAX_TOKEN_WEIGHT: u64 = 0xFFFF_FFFF;

/// A symbol with no entry in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown token {symbol:?}")]
pub struct UnknownTokenError {
    pub symbol: char,
}

/// Error type for catalog construction.
///
/// Beyond the basic symbol to weight contract (unique symbols, positive
/// weights, a wildcard among the entries), construction also rejects
/// weights above [`MAX_TOKEN_WEIGHT`] and catalogs whose wildcard is not
/// the heaviest token. Those two checks narrow the accepted input: they
/// keep cost sums in range and the remaining-cost heuristic admissible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Weights must be positive.
    #[error("token {symbol:?} has zero weight")]
    ZeroWeight { symbol: char },
    /// Weight above [`MAX_TOKEN_WEIGHT`].
    #[error("token {symbol:?} weight {weight} exceeds the maximum of {MAX_TOKEN_WEIGHT}")]
    WeightTooLarge { symbol: char, weight: u64 },
    /// A symbol was listed more than once.
    #[error("token {symbol:?} listed twice (weights {existing} and {duplicate})")]
    DuplicateSymbol {
        symbol: char,
        existing: u64,
        duplicate: u64,
    },
    /// The wildcard symbol has no weight entry.
    #[error("wildcard {symbol:?} is not a catalog token")]
    UnknownWildcard { symbol: char },
    /// Some token outweighs the wildcard, which would let the wildcard clear
    /// it more cheaply than the remaining-cost heuristic assumes. Rejects
    /// catalogs that are otherwise well formed.
    #[error("wildcard {wildcard:?} (weight {wildcard_weight}) is lighter than {heavier:?} (weight {heavier_weight})")]
    WildcardNotHeaviest {
        wildcard: char,
        wildcard_weight: u64,
        heavier: char,
        heavier_weight: u64,
    },
}

/// A token resolved against a catalog.
///
/// Ordering and equality follow the symbol. Weight and wildcard flag are
/// functions of the symbol within one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token {
    symbol: char,
    weight: u64,
    wildcard: bool,
}

impl Token {
    #[must_use]
    pub fn symbol(self) -> char {
        self.symbol
    }

    #[must_use]
    pub fn weight(self) -> u64 {
        self.weight
    }

    /// Whether this token clears any front token.
    #[must_use]
    pub fn is_wildcard(self) -> bool {
        self.wildcard
    }

    /// Whether emitting `self` removes `front` from a ghost.
    #[must_use]
    pub fn matches(self, front: Token) -> bool {
        self.wildcard || self.symbol == front.symbol
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Symbol to weight mapping with one designated wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCatalog {
    weights: BTreeMap<char, u64>,
    wildcard: char,
}

impl TokenCatalog {
    /// Build a catalog from `(symbol, weight)` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if a weight is zero or above
    /// [`MAX_TOKEN_WEIGHT`], a symbol repeats, the wildcard is not an entry,
    /// or the wildcard is not the heaviest token.
    pub fn new(
        entries: impl IntoIterator<Item = (char, u64)>,
        wildcard: char,
    ) -> Result<Self, CatalogError> {
        let mut weights = BTreeMap::new();
        for (symbol, weight) in entries {
            if weight == 0 {
                return Err(CatalogError::ZeroWeight { symbol });
            }
            if weight > MAX_TOKEN_WEIGHT {
                return Err(CatalogError::WeightTooLarge { symbol, weight });
            }
            if let Some(&existing) = weights.get(&symbol) {
                return Err(CatalogError::DuplicateSymbol {
                    symbol,
                    existing,
                    duplicate: weight,
                });
            }
            weights.insert(symbol, weight);
        }

        let Some(&wildcard_weight) = weights.get(&wildcard) else {
            return Err(CatalogError::UnknownWildcard { symbol: wildcard });
        };
        if let Some((&heavier, &heavier_weight)) = weights.iter().find(|(_, &w)| w > wildcard_weight)
        {
            return Err(CatalogError::WildcardNotHeaviest {
                wildcard,
                wildcard_weight,
                heavier,
                heavier_weight,
            });
        }

        Ok(Self { weights, wildcard })
    }

    /// The built-in five-token catalog: `-`=1, `|`=1, `^`=2, `v`=2, `%`=3,
    /// with `%` as the wildcard.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            weights: STANDARD_TOKENS.into_iter().collect(),
            wildcard: STANDARD_WILDCARD,
        }
    }

    /// Weight of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTokenError`] if the symbol has no entry.
    pub fn weight(&self, symbol: char) -> Result<u64, UnknownTokenError> {
        self.weights
            .get(&symbol)
            .copied()
            .ok_or(UnknownTokenError { symbol })
    }

    /// Resolve `symbol` into a weighted [`Token`].
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTokenError`] if the symbol has no entry.
    pub fn resolve(&self, symbol: char) -> Result<Token, UnknownTokenError> {
        Ok(Token {
            symbol,
            weight: self.weight(symbol)?,
            wildcard: symbol == self.wildcard,
        })
    }

    /// Resolve every character of `sequence`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTokenError`] for the first unknown character.
    pub fn parse_sequence(&self, sequence: &str) -> Result<Vec<Token>, UnknownTokenError> {
        sequence.chars().map(|c| self.resolve(c)).collect()
    }

    /// The wildcard token.
    #[must_use]
    pub fn wildcard(&self) -> Token {
        Token {
            symbol: self.wildcard,
            weight: self.weights.get(&self.wildcard).copied().unwrap_or_default(),
            wildcard: true,
        }
    }

    /// All tokens in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = Token> + '_ {
        self.weights.iter().map(|(&symbol, &weight)| Token {
            symbol,
            weight,
            wildcard: symbol == self.wildcard,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
