//! # Algorithms
//!
//! Decompositions of a `Matrix` and the triangular solves built on top of them.
pub mod decomposition;
pub mod solve;
