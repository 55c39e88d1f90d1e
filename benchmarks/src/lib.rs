//! Shared helpers for wraith benchmark suites.

use wraith_harness::puzzle::{Puzzle, PuzzleSpec};
use wraith_search::policy::{CandidateRule, SearchPolicy};

/// A named puzzle with the policy it is benchmarked under.
pub struct Regime {
    pub name: &'static str,
    pub puzzle: Puzzle,
    pub policy: SearchPolicy,
}

/// The built-in puzzle with a different ghost list.
///
/// # Panics
///
/// Panics if a ghost uses a symbol outside the standard catalog. Benchmark
/// setup failures are fatal.
#[must_use]
pub fn standard_with_ghosts(ghosts: &[&str]) -> Puzzle {
    let mut spec = PuzzleSpec::standard();
    spec.ghosts = ghosts.iter().map(ToString::to_string).collect();
    spec.build().expect("benchmark puzzle builds")
}

/// Benchmark regimes, smallest first.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    let standard = standard_with_ghosts(&["-|", "^-", "-^|-", "v^%"]);
    let wildcard = CandidateRule::FrontTokensWithWildcard {
        wildcard: standard.catalog.wildcard(),
    };
    vec![
        Regime {
            name: "standard",
            puzzle: standard.clone(),
            policy: SearchPolicy::default(),
        },
        Regime {
            name: "standard_wildcard",
            puzzle: standard,
            policy: SearchPolicy {
                candidate_rule: wildcard,
                ..SearchPolicy::default()
            },
        },
        Regime {
            name: "interleaved",
            puzzle: standard_with_ghosts(&["-^-|", "|v-^", "^-|v", "v|^-", "-|-|"]),
            policy: SearchPolicy::default(),
        },
        Regime {
            name: "wildcard_heavy",
            puzzle: standard_with_ghosts(&["%-%", "v%^", "-%|%", "^^%"]),
            policy: SearchPolicy {
                candidate_rule: wildcard,
                ..SearchPolicy::default()
            },
        },
    ]
}
