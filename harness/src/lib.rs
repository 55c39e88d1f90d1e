//! Wraith Harness: puzzle loading, run orchestration, and reporting.
//!
//! The harness turns a puzzle file into a search run:
//! `PuzzleSpec` → `Puzzle` → `search()` → `RunReport`.
//!
//! The harness does NOT implement search logic; it delegates to
//! `wraith-search`. Puzzles provide data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod puzzle;
pub mod report;
pub mod runner;
