//! AI opponents.
//!
//! Three tiers trade strength for cost:
//! - `Easy`: random empty cell
//! - `Medium`: random cell next to an enemy card when one exists
//! - `Hard`: exhaustive evaluation of every (hand card, empty cell) pair
//!
//! ## Example
//!
//! ```
//! use grid_triad::ai::{AiStrategist, Difficulty};
//! use grid_triad::cards::{Card, Stats};
//! use grid_triad::core::RuleConfig;
//! use grid_triad::game::MatchState;
//!
//! let hand = |p: &str| -> Vec<Card> {
//!     (0..5).map(|i| Card::new(format!("{p}{i}"), Stats::uniform(i + 1))).collect()
//! };
//! let state = MatchState::new(hand("a"), hand("b"), RuleConfig::basic()).unwrap();
//!
//! let mut ai = AiStrategist::new(RuleConfig::basic(), Difficulty::Hard);
//! let choice = ai.choose_move(&state).unwrap();
//! assert!(state.board.is_empty_at(choice.position));
//! ```

pub mod config;
pub mod strategist;

pub use config::{AiConfig, Difficulty};
pub use strategist::{AiMove, AiStrategist};
