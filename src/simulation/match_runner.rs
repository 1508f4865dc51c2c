//! AI-vs-AI match driver and move replay.
//!
//! `MatchRunner` plays a whole match by asking the acting side's
//! strategist for a move and applying it through a `TurnController`.
//! It plays the card the strategist chose, not a fixed hand slot.

use tracing::{info, warn};

use crate::ai::AiStrategist;
use crate::board::CELL_COUNT;
use crate::core::{GameRng, InvalidMoveError, RuleConfig, Side, SideMap};
use crate::effects::TurnHook;
use crate::game::{MatchState, MoveRecord, TurnController};
use crate::rules::{CaptureEvent, GameResult};

/// Configuration for a simulated match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    /// Stop after this many moves even if the board is not full.
    pub max_turns: u32,

    /// Reseed both strategists from one match seed.
    /// `None` keeps each strategist's own seed.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_turns: CELL_COUNT as u32,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_turns(mut self, max: u32) -> Self {
        self.max_turns = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Everything that happened in a simulated match.
#[derive(Clone, Debug)]
pub struct MatchReport {
    pub final_state: MatchState,
    /// `None` if the match stopped before the board filled.
    pub result: Option<GameResult>,
    /// All captures, in the order they happened.
    pub events: Vec<CaptureEvent>,
    pub turns: u32,
}

/// Plays complete matches between two strategists.
pub struct MatchRunner {
    controller: TurnController,
    strategists: SideMap<AiStrategist>,
    config: MatchConfig,
}

impl MatchRunner {
    /// Create a runner. `player_ai` moves for `Side::Player`.
    pub fn new(rules: RuleConfig, player_ai: AiStrategist, opponent_ai: AiStrategist) -> Self {
        Self {
            controller: TurnController::new(rules),
            strategists: SideMap::from_pair(player_ai, opponent_ai),
            config: MatchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MatchConfig) -> Self {
        if let Some(seed) = config.seed {
            let base = GameRng::new(seed);
            for side in Side::ALL {
                let stream = base.for_context(&side.to_string());
                let ai = self.strategists[side].clone().with_rng(stream);
                self.strategists[side] = ai;
            }
        }
        self.config = config;
        self
    }

    /// Register a post-resolution hook on the underlying controller.
    pub fn with_hook(mut self, hook: impl TurnHook + 'static) -> Self {
        self.controller = self.controller.with_hook(hook);
        self
    }

    /// Play from `initial` until the board fills or no move is possible.
    pub fn run(&mut self, initial: &MatchState) -> MatchReport {
        let mut state = initial.clone();
        let mut events = Vec::new();

        while !state.is_game_over() && state.turn_count < self.config.max_turns {
            let side = state.current_turn;
            let Some(choice) = self.strategists[side].choose_move(&state) else {
                warn!(%side, turn = state.turn_count, "no legal move, stopping match");
                break;
            };

            match self.controller.play_index(&state, choice.card_index, choice.position, |_| {}) {
                Ok(outcome) => {
                    events.extend(outcome.events);
                    state = outcome.state;
                }
                Err(err) => {
                    warn!(%side, %err, "strategist produced an invalid move, stopping match");
                    break;
                }
            }
        }

        let result = state.outcome();
        let score = state.score();
        info!(
            turns = state.turn_count,
            player = score.player,
            opponent = score.opponent,
            result = ?result,
            "match finished"
        );

        MatchReport {
            turns: state.turn_count,
            final_state: state,
            result,
            events,
        }
    }
}

/// Re-apply recorded moves to `initial`.
///
/// Produces the same state as the original sequence of `play_card` calls
/// when the rules match.
pub fn replay<'a>(
    initial: &MatchState,
    moves: impl IntoIterator<Item = &'a MoveRecord>,
    rules: &RuleConfig,
) -> Result<MatchState, InvalidMoveError> {
    let controller = TurnController::new(*rules);
    let mut state = initial.clone();

    for record in moves {
        let card = state
            .hand(state.current_turn)
            .iter()
            .find(|card| card.id == record.card_id)
            .cloned()
            .ok_or_else(|| InvalidMoveError::CardNotInHand {
                card_id: record.card_id.clone(),
                side: state.current_turn,
            })?;
        state = controller.play(&state, &card, record.position, |_| {})?.state;
    }

    Ok(state)
}
