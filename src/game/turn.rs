//! Turn Controller: the single state transition of a match.
//!
//! `play` validates the move, takes the card out of the acting hand,
//! places it, runs the chain reaction, lets hooks adjust the result, then
//! passes the turn. The input state is never modified; every call returns
//! a fresh state.

use tracing::debug;

use crate::board::Position;
use crate::cards::Card;
use crate::core::{InvalidMoveError, RuleConfig};
use crate::effects::{StatsGrid, TurnDelta, TurnHook};
use crate::rules::{propagate, CaptureEvent};

use super::state::{MatchState, MoveRecord};

/// Result of a successful `play`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub state: MatchState,
    /// Captures in propagation order.
    pub events: Vec<CaptureEvent>,
}

/// Applies moves under a fixed rule configuration.
pub struct TurnController {
    rules: RuleConfig,
    hooks: Vec<Box<dyn TurnHook>>,
}

impl TurnController {
    /// Create a controller with no hooks.
    #[must_use]
    pub fn new(rules: RuleConfig) -> Self {
        Self {
            rules,
            hooks: Vec::new(),
        }
    }

    /// Create a controller using the rules stored in `state`.
    #[must_use]
    pub fn for_state(state: &MatchState) -> Self {
        Self::new(state.rules)
    }

    /// Add a post-resolution hook. Hooks run in registration order.
    pub fn with_hook(mut self, hook: impl TurnHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    #[must_use]
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Check that `card` may be played at `position` by the side to move.
    ///
    /// Returns the card's index in the acting hand.
    pub fn validate(&self, state: &MatchState, card: &Card, position: Position) -> Result<usize, InvalidMoveError> {
        if !position.in_bounds() {
            return Err(InvalidMoveError::OutOfBounds {
                row: position.row,
                col: position.col,
            });
        }
        if !state.board.is_empty_at(position) {
            return Err(InvalidMoveError::OccupiedCell { position });
        }
        state
            .hand_index(state.current_turn, &card.id)
            .ok_or_else(|| InvalidMoveError::CardNotInHand {
                card_id: card.id.clone(),
                side: state.current_turn,
            })
    }

    /// Play `card` at `position` for the side to move.
    ///
    /// `on_capture` is called once per capture, in propagation order. It
    /// is a notification only; the returned state does not depend on it.
    pub fn play(
        &self,
        state: &MatchState,
        card: &Card,
        position: Position,
        mut on_capture: impl FnMut(&CaptureEvent),
    ) -> Result<TurnOutcome, InvalidMoveError> {
        let index = self.validate(state, card, position)?;
        let side = state.current_turn;

        let mut next = state.clone();
        let played = next.hands[side].remove(index);
        let card_id = played.id.clone();
        next.board.place(position, played, side);

        let delta = TurnDelta {
            side,
            placed: position,
            captures: propagate(&mut next.board, position, &self.rules),
        };
        if !self.hooks.is_empty() {
            let mut grid = StatsGrid::from_board(&next.board);
            for hook in &self.hooks {
                hook.after_resolution(&mut grid, &delta);
            }
            grid.apply_to(&mut next.board);
        }
        let events = delta.captures;

        for event in &events {
            on_capture(event);
        }

        debug!(
            turn = state.turn_count,
            %side,
            card = %card_id,
            at = %position,
            captures = events.len(),
            "card played"
        );

        next.history.push_back(MoveRecord {
            turn: state.turn_count,
            side,
            card_id,
            position,
            captures: events.len(),
        });
        next.current_turn = side.other();
        next.turn_count += 1;

        Ok(TurnOutcome { state: next, events })
    }

    /// Play the card at `hand_index` of the acting hand.
    pub fn play_index(
        &self,
        state: &MatchState,
        hand_index: usize,
        position: Position,
        on_capture: impl FnMut(&CaptureEvent),
    ) -> Result<TurnOutcome, InvalidMoveError> {
        let card = state
            .hand(state.current_turn)
            .get(hand_index)
            .cloned()
            .ok_or_else(|| InvalidMoveError::CardNotInHand {
                card_id: format!("#{hand_index}").into(),
                side: state.current_turn,
            })?;
        self.play(state, &card, position, on_capture)
    }
}

/// Play `card` at `position` for the side to move under `rules`.
///
/// Convenience wrapper over `TurnController::play` without hooks.
pub fn play_card(
    state: &MatchState,
    card: &Card,
    position: Position,
    rules: &RuleConfig,
    on_capture: impl FnMut(&CaptureEvent),
) -> Result<MatchState, InvalidMoveError> {
    TurnController::new(*rules)
        .play(state, card, position, on_capture)
        .map(|outcome| outcome.state)
}
