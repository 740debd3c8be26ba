//! Board grid module.
//!
//! The 5x5 cell matrix and piece-location queries.

pub mod grid;

pub use grid::*;
