//! # grid-triad
//!
//! A turn-based grid-capture card game engine in the Triple Triad mould.
//!
//! Two 5-card hands are played one card at a time onto a 3x3 board.
//! Placing a card can capture orthogonally adjacent enemy cards, and every
//! captured card can go on to capture its own neighbours in a chain
//! reaction.
//!
//! ## Design Principles
//!
//! 1. **Values, not shared objects**: cards and boards are plain values.
//!    A capture produces a new owner on the new board only.
//!
//! 2. **One transition**: `play_card` is the only way a match changes. It
//!    validates, resolves, and returns a fresh state; the input survives
//!    untouched for undo, replay, and AI lookahead.
//!
//! 3. **Derived score**: the score is always recounted from the board.
//!
//! 4. **Deterministic rules**: capture resolution never draws random
//!    numbers. Only AI tie-breaks do, from a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: sides, scores, rule configuration, RNG, errors
//! - `cards`: card values
//! - `board`: positions, directions, the 3x3 grid
//! - `rules`: Capture Resolver and Chain Reaction Engine
//! - `game`: match state and the Turn Controller
//! - `effects`: post-resolution hooks and card abilities
//! - `ai`: easy, medium, and hard strategists
//! - `simulation`: AI-vs-AI matches and replay
//!
//! ## Example
//!
//! ```
//! use grid_triad::{initialize_game, is_game_over, play_card, Card, Position, RuleConfig, Side, Stats};
//!
//! let hand = |p: &str| -> Vec<Card> {
//!     (0..5).map(|i| Card::new(format!("{p}{i}"), Stats::new(5, 5, 5, 5 + i))).collect()
//! };
//! let state = initialize_game(hand("p"), hand("o")).unwrap();
//! let rules = RuleConfig::basic();
//!
//! let card = state.player_hand()[0].clone();
//! let state = play_card(&state, &card, Position::new(1, 1), &rules, |_| {}).unwrap();
//!
//! assert_eq!(state.current_turn, Side::Opponent);
//! assert_eq!(state.score().player, 1);
//! assert!(!is_game_over(&state));
//! ```

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod effects;
pub mod game;
pub mod ai;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    GameRng,
    BoardError, InvalidMoveError, SetupError,
    RuleConfig, Score, Side, SideMap,
};

pub use crate::cards::{Card, CardId, Element, Rarity, Stats};

pub use crate::board::{Board, Direction, Position};

pub use crate::rules::{
    propagate, resolve_captures,
    Capture, CaptureEvent, CaptureRule, ChainReaction, GameResult,
};

pub use crate::effects::{Ability, AbilityEffect, AbilityTable, AbilityTrigger, StatsGrid, TurnDelta, TurnHook};

pub use crate::game::{
    get_winner, initialize_game, is_game_over, play_card,
    MatchState, MoveRecord, TurnController, TurnOutcome, HAND_SIZE,
};

pub use crate::ai::{AiConfig, AiMove, AiStrategist, Difficulty};

pub use crate::simulation::{replay, MatchConfig, MatchReport, MatchRunner};
