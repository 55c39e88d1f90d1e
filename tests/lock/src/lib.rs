//! Shared helpers for the lock tests: exhaustive reference solvers and a
//! deterministic puzzle generator.
//!
//! The reference solvers know nothing about frontiers or heuristics; they
//! enumerate every emission up to the best cost found so far. They are
//! exponential and only meant for the small puzzles [`small_puzzles`]
//! produces.

#![forbid(unsafe_code)]

use wraith_kernel::carrier::catalog::{Token, TokenCatalog};
use wraith_kernel::carrier::ghost::Ghost;

/// Which tokens the reference solver may emit at each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moves {
    /// Only tokens currently at the front of some live ghost.
    FrontTokens,
    /// Any catalog token that changes at least one ghost.
    AnyToken,
}

/// Minimum total weight of an emission clearing every ghost.
#[must_use]
pub fn brute_force_min_cost(catalog: &TokenCatalog, ghosts: &[Ghost], moves: Moves) -> u64 {
    let live: Vec<Ghost> = ghosts.iter().filter(|g| !g.cleared()).cloned().collect();
    // Clearing the ghosts one after another is always possible.
    let mut best = live.iter().map(Ghost::remaining_cost).sum();
    explore(catalog, &live, moves, 0, &mut best);
    best
}

fn explore(catalog: &TokenCatalog, live: &[Ghost], moves: Moves, paid: u64, best: &mut u64) {
    if live.is_empty() {
        *best = (*best).min(paid);
        return;
    }
    for token in options(catalog, live, moves) {
        let cost = paid + token.weight();
        if cost >= *best {
            continue;
        }
        let mut changed = false;
        let next: Vec<Ghost> = live
            .iter()
            .cloned()
            .filter_map(|mut g| {
                changed |= g.receive(token);
                (!g.cleared()).then_some(g)
            })
            .collect();
        if changed {
            explore(catalog, &next, moves, cost, best);
        }
    }
}

fn options(catalog: &TokenCatalog, live: &[Ghost], moves: Moves) -> Vec<Token> {
    match moves {
        Moves::AnyToken => catalog.iter().collect(),
        Moves::FrontTokens => {
            let mut fronts: Vec<Token> = live.iter().filter_map(Ghost::front).collect();
            fronts.sort();
            fronts.dedup();
            fronts
        }
    }
}

/// `count` puzzles of two to four ghosts, each one to three tokens long,
/// drawn from `catalog` by a fixed linear congruential generator.
#[must_use]
pub fn small_puzzles(catalog: &TokenCatalog, seed: u64, count: usize) -> Vec<Vec<Ghost>> {
    let tokens: Vec<Token> = catalog.iter().collect();
    let mut rng = Lcg(seed);
    (0..count)
        .map(|_| {
            let ghosts = 2 + rng.below(3);
            (0..ghosts)
                .map(|_| {
                    let len = 1 + rng.below(3);
                    Ghost::new((0..len).map(|_| tokens[rng.below(tokens.len())]))
                })
                .collect()
        })
        .collect()
}

struct Lcg(u64);

impl Lcg {
    fn below(&mut self, n: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        #[allow(clippy::cast_possible_truncation)]
        let high = (self.0 >> 33) as usize;
        high % n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ghosts(seqs: &[&str]) -> Vec<Ghost> {
        let catalog = TokenCatalog::standard();
        seqs.iter()
            .map(|s| Ghost::parse(s, &catalog).unwrap())
            .collect()
    }

    #[test]
    fn standard_puzzle_reference_costs() {
        let catalog = TokenCatalog::standard();
        let g = ghosts(&["-|", "^-", "-^|-", "v^%"]);
        assert_eq!(brute_force_min_cost(&catalog, &g, Moves::FrontTokens), 9);
        assert_eq!(brute_force_min_cost(&catalog, &g, Moves::AnyToken), 9);
    }

    #[test]
    fn any_token_can_beat_front_tokens() {
        let catalog = TokenCatalog::standard();
        let g = ghosts(&["v", "^"]);
        assert_eq!(brute_force_min_cost(&catalog, &g, Moves::FrontTokens), 4);
        assert_eq!(brute_force_min_cost(&catalog, &g, Moves::AnyToken), 3);
    }

    #[test]
    fn generator_is_deterministic() {
        let catalog = TokenCatalog::standard();
        let a = small_puzzles(&catalog, 7, 5);
        let b = small_puzzles(&catalog, 7, 5);
        assert_eq!(a, b);
        assert!(a.iter().all(|p| (2..=4).contains(&p.len())));
    }
}
