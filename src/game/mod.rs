//! Match state and the Turn Controller.
//!
//! ## Entry points
//!
//! - `initialize_game`: start a match from two 5-card hands
//! - `play_card` / `TurnController::play`: the only state transition
//! - `is_game_over`: board full
//! - `get_winner`: strict score comparison, draw on equality

pub mod state;
pub mod turn;

pub use state::{MatchState, MoveRecord, HAND_SIZE};
pub use turn::{play_card, TurnController, TurnOutcome};

use crate::cards::Card;
use crate::core::{RuleConfig, SetupError};
use crate::rules::GameResult;

/// Start a match with the Basic rule only.
///
/// See `MatchState::new` to pick rules.
pub fn initialize_game(
    player_cards: impl IntoIterator<Item = Card>,
    opponent_cards: impl IntoIterator<Item = Card>,
) -> Result<MatchState, SetupError> {
    MatchState::new(player_cards, opponent_cards, RuleConfig::default())
}

/// True iff every board cell is occupied.
#[must_use]
pub fn is_game_over(state: &MatchState) -> bool {
    state.is_game_over()
}

/// Winner by strict score comparison.
///
/// Only meaningful after `is_game_over` returns true.
#[must_use]
pub fn get_winner(state: &MatchState) -> GameResult {
    state.winner()
}
