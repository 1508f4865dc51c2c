//! Error types for match setup, move validation, and loaded boards.
//!
//! The engine never recovers from these internally: they report a broken
//! precondition at the boundary, and the caller decides what to show.

use crate::board::Position;
use crate::cards::CardId;
use crate::core::Side;

/// A move the Turn Controller refused to apply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMoveError {
    /// Target position lies outside the 3x3 grid.
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },

    /// Target cell already holds a card.
    #[error("cell {position} is already occupied")]
    OccupiedCell { position: Position },

    /// The card is not in the acting side's hand.
    #[error("card {card_id} is not in the {side}'s hand")]
    CardNotInHand { card_id: CardId, side: Side },
}

/// A match could not be created from the given hands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// A hand does not hold exactly `expected` cards.
    #[error("{side}'s hand has {actual} cards, expected {expected}")]
    HandSize {
        side: Side,
        expected: usize,
        actual: usize,
    },

    /// The same card id appears twice across the two hands.
    #[error("card id {card_id} appears more than once")]
    DuplicateCard { card_id: CardId },
}

/// A deserialised board broke a board invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// An occupied cell holds a card with no owner.
    #[error("card {card_id} at {position} has no owner")]
    UnownedCard { card_id: CardId, position: Position },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = InvalidMoveError::OccupiedCell {
            position: Position::new(1, 2),
        };
        assert_eq!(err.to_string(), "cell (1, 2) is already occupied");

        let err = InvalidMoveError::CardNotInHand {
            card_id: CardId::from("ghost"),
            side: Side::Opponent,
        };
        assert_eq!(err.to_string(), "card ghost is not in the opponent's hand");

        let err = SetupError::HandSize {
            side: Side::Player,
            expected: 5,
            actual: 4,
        };
        assert_eq!(err.to_string(), "player's hand has 4 cards, expected 5");

        let err = BoardError::UnownedCard {
            card_id: CardId::from("stray"),
            position: Position::new(0, 0),
        };
        assert_eq!(err.to_string(), "card stray at (0, 0) has no owner");
    }
}
