//! # Storing of sparse linear algebra data in memory
//!
//! This module provides the data structures used to represent vectors and matrices in memory.
//! Algorithms operating on them live in `algorithm`.

pub mod linear_algebra;
