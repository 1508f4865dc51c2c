//! Shared fixtures for integration tests.

#![allow(dead_code)]

use grid_triad::{Card, MatchState, Position, RuleConfig, Side, Stats, HAND_SIZE};

/// A hand of `HAND_SIZE` cards with ids `{prefix}0..{prefix}4`, all with `stats`.
pub fn uniform_hand(prefix: &str, stats: Stats) -> Vec<Card> {
    (0..HAND_SIZE).map(|i| Card::new(format!("{prefix}{i}"), stats)).collect()
}

/// A fresh match with weak 1-stat cards on both sides.
pub fn weak_match(rules: RuleConfig) -> MatchState {
    MatchState::new(
        uniform_hand("p", Stats::uniform(1)),
        uniform_hand("o", Stats::uniform(1)),
        rules,
    )
    .unwrap()
}

/// Put a card directly on the board, bypassing hands and turns.
pub fn seed_board(state: &mut MatchState, row: u8, col: u8, id: &str, stats: Stats, owner: Side) {
    state.board.place(Position::new(row, col), Card::new(id, stats), owner);
}

/// Replace the card at `index` of `side`'s hand.
pub fn set_hand_card(state: &mut MatchState, side: Side, index: usize, card: Card) {
    state.hands[side].set(index, card);
}
