//! AI move selection.
//!
//! The strategist plays for whichever side is to move and never mutates
//! the state it is given. Candidate evaluation in the hard tier always
//! works on its own copy of the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::config::{AiConfig, Difficulty};
use crate::board::Position;
use crate::cards::Card;
use crate::core::{GameRng, RuleConfig, Side};
use crate::game::{MatchState, TurnController};

/// A chosen move: where to play, and which hand slot to play from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AiMove {
    pub position: Position,
    /// Index into the acting side's hand.
    pub card_index: usize,
}

type Cells = SmallVec<[Position; 9]>;

/// Chooses moves for the side to move.
#[derive(Clone, Debug)]
pub struct AiStrategist {
    rules: RuleConfig,
    config: AiConfig,
    rng: GameRng,
}

impl AiStrategist {
    /// Strategist with the default config at `difficulty`.
    #[must_use]
    pub fn new(rules: RuleConfig, difficulty: Difficulty) -> Self {
        Self::with_config(rules, AiConfig::new(difficulty))
    }

    #[must_use]
    pub fn with_config(rules: RuleConfig, config: AiConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { rules, config, rng }
    }

    /// Replace the tie-break stream.
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Where to play next, or `None` if no move is possible.
    pub fn get_best_move(&mut self, state: &MatchState) -> Option<Position> {
        self.choose_move(state).map(|m| m.position)
    }

    /// Position and hand slot to play, or `None` if the board is full or
    /// the acting hand is empty.
    pub fn choose_move(&mut self, state: &MatchState) -> Option<AiMove> {
        let side = state.current_turn;
        if state.hand(side).is_empty() {
            return None;
        }
        let empty: Cells = state.board.empty_positions().collect();
        if empty.is_empty() {
            return None;
        }

        let chosen = match self.config.difficulty {
            Difficulty::Easy => self.random_move(&empty),
            Difficulty::Medium => self.adjacent_move(state, side, &empty),
            Difficulty::Hard => self.exhaustive_move(state, side),
        };

        if let Some(m) = chosen {
            debug!(
                difficulty = %self.config.difficulty,
                %side,
                at = %m.position,
                card_index = m.card_index,
                "ai chose move"
            );
        }
        chosen
    }

    fn random_move(&mut self, cells: &[Position]) -> Option<AiMove> {
        self.rng.choose(cells).map(|&position| AiMove {
            position,
            card_index: 0,
        })
    }

    /// Prefer cells touching a card owned by the other side.
    fn adjacent_move(&mut self, state: &MatchState, side: Side, empty: &[Position]) -> Option<AiMove> {
        let preferred: Cells = empty
            .iter()
            .copied()
            .filter(|&pos| state.board.has_neighbor_owned_by(pos, side.other()))
            .collect();

        if preferred.is_empty() {
            self.random_move(empty)
        } else {
            self.random_move(&preferred)
        }
    }

    /// Best (card, cell) pair by margin; first seen wins ties.
    ///
    /// Candidates come from [`MatchState::legal_moves`], so iteration is
    /// hand index ascending, then row-major.
    fn exhaustive_move(&self, state: &MatchState, side: Side) -> Option<AiMove> {
        let hand = state.hand(side);
        let mut best: Option<(i32, AiMove)> = None;

        for (card_index, position) in state.legal_moves() {
            let Some(score) = self.evaluate(state, side, &hand[card_index], position) else {
                continue;
            };
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, AiMove { position, card_index }));
            }
        }

        best.map(|(_, m)| m)
    }

    /// Margin for `side` after playing `card` at `position`.
    fn evaluate(&self, state: &MatchState, side: Side, card: &Card, position: Position) -> Option<i32> {
        if self.config.simulate_captures {
            TurnController::new(self.rules)
                .play(state, card, position, |_| {})
                .ok()
                .map(|outcome| outcome.state.score().margin(side))
        } else {
            let mut board = state.board.clone();
            board.place(position, card.clone(), side);
            Some(board.score().margin(side))
        }
    }
}
