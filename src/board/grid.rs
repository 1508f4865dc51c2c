//! The 3x3 board.
//!
//! Cells are stored in an owned row-major array, so cloning a `Board`
//! always yields independent storage. A previous match state can never
//! see ownership changes made while resolving a later turn.

use serde::{Deserialize, Serialize};

use super::position::{Position, CELL_COUNT};
use crate::cards::Card;
use crate::core::{BoardError, Score, Side};

/// A 3x3 grid of optional cards.
///
/// Every occupied cell holds a card with `owner = Some(_)`: cards enter
/// the board only through `place`, which stamps the owner, or through
/// deserialisation, which rejects unowned cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cells: [Option<Card>; CELL_COUNT],
}

/// Wire form of `Board`, checked before it becomes one.
#[derive(Deserialize)]
struct RawBoard {
    cells: [Option<Card>; CELL_COUNT],
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        for (position, cell) in Position::all().zip(&raw.cells) {
            if let Some(card) = cell.as_ref().filter(|card| card.owner.is_none()) {
                return Err(BoardError::UnownedCard {
                    card_id: card.id.clone(),
                    position,
                });
            }
        }
        Ok(Self { cells: raw.cells })
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Card at `position`, if any.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Card> {
        self.cells[position.index()].as_ref()
    }

    /// Mutable access to the card at `position`.
    ///
    /// Used by the effects layer to copy hook-adjusted stats back.
    pub(crate) fn get_mut(&mut self, position: Position) -> Option<&mut Card> {
        self.cells[position.index()].as_mut()
    }

    /// Owner of the card at `position`, if the cell is occupied.
    #[must_use]
    pub fn owner_at(&self, position: Position) -> Option<Side> {
        self.get(position).and_then(|card| card.owner)
    }

    #[must_use]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.cells[position.index()].is_none()
    }

    /// Put `card` on the board owned by `owner`.
    ///
    /// Returns the card previously in the cell, if any.
    pub fn place(&mut self, position: Position, card: Card, owner: Side) -> Option<Card> {
        self.cells[position.index()].replace(card.owned_by(owner))
    }

    /// Change the owner of the card at `position`.
    ///
    /// Only the chain reaction flips cards. Returns `false` if the cell is
    /// empty.
    pub(crate) fn set_owner(&mut self, position: Position, owner: Side) -> bool {
        match self.cells[position.index()].as_mut() {
            Some(card) => {
                card.owner = Some(owner);
                true
            }
            None => false,
        }
    }

    /// Empty cells in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| self.is_empty_at(pos))
    }

    /// Occupied cells with their cards, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &Card)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|card| (pos, card)))
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled_count() == CELL_COUNT
    }

    /// Count cells per owner with a fresh scan.
    #[must_use]
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for (_, card) in self.occupied() {
            match card.owner {
                Some(Side::Player) => score.player += 1,
                Some(Side::Opponent) => score.opponent += 1,
                None => {}
            }
        }
        score
    }

    /// Whether any orthogonal neighbour of `position` is owned by `side`.
    #[must_use]
    pub fn has_neighbor_owned_by(&self, position: Position, side: Side) -> bool {
        position
            .neighbors()
            .iter()
            .any(|&(_, pos)| self.owner_at(pos) == Some(side))
    }
}
