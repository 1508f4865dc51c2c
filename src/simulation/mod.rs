//! Whole-match simulation.
//!
//! Drives two strategists against each other and replays recorded moves.
//! Useful for balance checks and for reproducing a finished match.

mod match_runner;

pub use match_runner::{replay, MatchConfig, MatchReport, MatchRunner};
