//! # Scenario tests that require a look inside the crate.
//!
//! Each module works through a single small problem with known answers, across several modules of
//! the crate.
