//! Wraith Search: deterministic best-first search over ghost sets.
//!
//! This crate provides the search layer. It depends only on `wraith_kernel`;
//! it does NOT depend on `wraith_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! wraith_kernel  ←  wraith_search  ←  wraith_harness
//! (tokens, ghosts)  (frontier, A*)    (puzzles, reports, CLI)
//! ```
//!
//! # Key types
//!
//! - [`state::SearchState`]: immutable ghost set plus emitted steps
//! - [`cost::Heuristic`]: trait for remaining-cost estimates
//! - [`frontier::Frontier`]: min-heap on `(f, insertion_order)`
//! - [`policy::SearchPolicy`]: candidate rule and expansion budget
//! - [`trace::SearchTrace`]: expansion-event audit log
//! - [`search::search`]: the driver

#![forbid(unsafe_code)]

pub mod cost;
pub mod error;
pub mod frontier;
pub mod policy;
pub mod search;
pub mod state;
pub mod trace;
