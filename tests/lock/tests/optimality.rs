//! Optimality lock tests: the search agrees with exhaustive enumeration.
//!
//! Proves:
//! 1. The built-in puzzle costs 9 under both candidate rules
//! 2. Front-token search matches the front-token reference on generated puzzles
//! 3. Wildcard-candidate search matches the unrestricted reference
//! 4. The uniform-cost baseline finds the same costs
//! 5. `h` never exceeds the true remaining cost of any expanded state

use lock_tests::{brute_force_min_cost, small_puzzles, Moves};
use wraith_kernel::carrier::catalog::TokenCatalog;
use wraith_kernel::carrier::ghost::Ghost;
use wraith_search::cost::{h, Heuristic, MaxRemainingCost, ZeroHeuristic};
use wraith_search::policy::{CandidateRule, SearchPolicy};
use wraith_search::search::{search, SearchResult};
use wraith_search::state::SearchState;

const SEED: u64 = 2024;
const PUZZLES: usize = 40;

fn front_policy() -> SearchPolicy {
    SearchPolicy::default()
}

fn wildcard_policy(catalog: &TokenCatalog) -> SearchPolicy {
    SearchPolicy {
        candidate_rule: CandidateRule::FrontTokensWithWildcard {
            wildcard: catalog.wildcard(),
        },
        ..SearchPolicy::default()
    }
}

fn solve(ghosts: &[Ghost], heuristic: &dyn Heuristic, policy: &SearchPolicy) -> SearchResult {
    search(SearchState::new(ghosts.iter().cloned()), heuristic, policy).unwrap()
}

/// Replays `steps` from scratch and checks they clear every ghost.
fn assert_steps_clear(catalog: &TokenCatalog, ghosts: &[Ghost], steps: &[char]) {
    let mut live = ghosts.to_vec();
    for &symbol in steps {
        let token = catalog.resolve(symbol).unwrap();
        for g in &mut live {
            g.receive(token);
        }
    }
    assert!(
        live.iter().all(Ghost::cleared),
        "steps {steps:?} leave ghosts uncleared: {live:?}"
    );
}

// ---------------------------------------------------------------------------
// 1. Built-in puzzle
// ---------------------------------------------------------------------------

#[test]
fn standard_puzzle_costs_nine_under_both_rules() {
    let catalog = TokenCatalog::standard();
    let ghosts: Vec<Ghost> = ["-|", "^-", "-^|-", "v^%"]
        .iter()
        .map(|s| Ghost::parse(s, &catalog).unwrap())
        .collect();

    let front = solve(&ghosts, &MaxRemainingCost, &front_policy());
    assert_eq!(front.cost(), Some(9));
    assert_eq!(front.steps(), Some(vec!['v', '-', '^', '%', '-']));

    let wild = solve(&ghosts, &MaxRemainingCost, &wildcard_policy(&catalog));
    assert_eq!(wild.cost(), Some(9));
    assert_steps_clear(&catalog, &ghosts, &wild.steps().unwrap());
}

// ---------------------------------------------------------------------------
// 2-4. Generated puzzles against the reference solvers
// ---------------------------------------------------------------------------

#[test]
fn front_token_search_matches_reference() {
    let catalog = TokenCatalog::standard();
    for (i, ghosts) in small_puzzles(&catalog, SEED, PUZZLES).iter().enumerate() {
        let expected = brute_force_min_cost(&catalog, ghosts, Moves::FrontTokens);
        let result = solve(ghosts, &MaxRemainingCost, &front_policy());
        assert_eq!(result.cost(), Some(expected), "puzzle {i}: {ghosts:?}");
        assert_steps_clear(&catalog, ghosts, &result.steps().unwrap());
    }
}

#[test]
fn wildcard_candidate_search_matches_unrestricted_reference() {
    let catalog = TokenCatalog::standard();
    let policy = wildcard_policy(&catalog);
    for (i, ghosts) in small_puzzles(&catalog, SEED, PUZZLES).iter().enumerate() {
        let expected = brute_force_min_cost(&catalog, ghosts, Moves::AnyToken);
        let result = solve(ghosts, &MaxRemainingCost, &policy);
        assert_eq!(result.cost(), Some(expected), "puzzle {i}: {ghosts:?}");
        assert_steps_clear(&catalog, ghosts, &result.steps().unwrap());
    }
}

#[test]
fn uniform_cost_baseline_agrees() {
    let catalog = TokenCatalog::standard();
    for ghosts in small_puzzles(&catalog, SEED ^ 1, PUZZLES) {
        let informed = solve(&ghosts, &MaxRemainingCost, &front_policy());
        let uniform = solve(&ghosts, &ZeroHeuristic, &front_policy());
        assert_eq!(informed.cost(), uniform.cost(), "{ghosts:?}");
    }
}

// ---------------------------------------------------------------------------
// 5. Admissibility
// ---------------------------------------------------------------------------

#[test]
fn h_never_overestimates_on_reachable_states() {
    let catalog = TokenCatalog::standard();
    let root = SearchState::new(
        ["-|", "^-", "-^|-", "v^%"]
            .iter()
            .map(|s| Ghost::parse(s, &catalog).unwrap()),
    );

    let mut layer = vec![root];
    for _ in 0..3 {
        let mut next = Vec::new();
        for state in &layer {
            let ghosts: Vec<Ghost> = state.ghosts().cloned().collect();
            let truth = brute_force_min_cost(&catalog, &ghosts, Moves::AnyToken);
            assert!(
                h(state) <= truth,
                "h = {} exceeds true cost {truth} for {ghosts:?}",
                h(state)
            );
            next.extend(state.expand());
        }
        layer = next;
    }
}
