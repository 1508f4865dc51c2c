//! Core engine types: sides, scores, rule configuration, RNG, errors.
//!
//! These are the leaf types every other module builds on.

pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Score, Side, SideMap};
pub use rng::GameRng;
pub use config::RuleConfig;
pub use error::{BoardError, InvalidMoveError, SetupError};
