//! Test support utilities for the game crates
//!
//! Unified logging initialization and scratch directories for tests that
//! touch the score history file.

pub mod logging;
pub mod scratch;
