//! Wraith Kernel: tokens and ghosts.
//!
//! # API Surface
//!
//! - [`carrier::catalog::TokenCatalog`] -- symbol to weight mapping with a designated wildcard
//! - [`carrier::ghost::Ghost`] -- one entity's remaining token sequence
//!
//! The kernel knows nothing about search. `wraith-search` builds states out
//! of ghosts; nothing here depends on it.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
