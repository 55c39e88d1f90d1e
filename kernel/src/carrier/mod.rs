//! Carrier module: the token catalog and the ghosts built from it.
//!
//! A [`catalog::Token`] can only be obtained by resolving a symbol against a
//! [`catalog::TokenCatalog`], so everything downstream of ghost construction
//! works with known, weighted tokens.

pub mod catalog;
pub mod ghost;
