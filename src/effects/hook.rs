//! Post-resolution hooks.
//!
//! The Turn Controller calls every registered `TurnHook` once per turn,
//! after the chain reaction has settled and before the turn passes. Hooks
//! see a `StatsGrid` of the new board and a summary of what just changed.
//! They can rewrite stats but never ownership. The Capture Resolver never
//! calls hooks.

use crate::board::{Board, Position, CELL_COUNT};
use crate::cards::{CardId, Stats};
use crate::core::Side;
use crate::rules::CaptureEvent;

#[derive(Clone, Debug, PartialEq, Eq)]
struct GridCell {
    id: CardId,
    owner: Option<Side>,
    stats: Stats,
}

/// Stats-only view of the board after resolution.
///
/// Card ids and owners are read-only. Only stats written here are copied
/// back onto the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsGrid {
    cells: [Option<GridCell>; CELL_COUNT],
}

impl StatsGrid {
    pub(crate) fn from_board(board: &Board) -> Self {
        let cells = std::array::from_fn(|index| {
            Position::from_index(index)
                .and_then(|pos| board.get(pos))
                .map(|card| GridCell {
                    id: card.id.clone(),
                    owner: card.owner,
                    stats: card.stats,
                })
        });
        Self { cells }
    }

    /// Write the stats back. Owners on `board` are left as they are.
    pub(crate) fn apply_to(self, board: &mut Board) {
        for (pos, cell) in Position::all().zip(self.cells) {
            if let (Some(cell), Some(card)) = (cell, board.get_mut(pos)) {
                card.stats = cell.stats;
            }
        }
    }

    #[must_use]
    pub fn card_id(&self, position: Position) -> Option<&CardId> {
        self.cells[position.index()].as_ref().map(|cell| &cell.id)
    }

    #[must_use]
    pub fn owner_at(&self, position: Position) -> Option<Side> {
        self.cells[position.index()].as_ref().and_then(|cell| cell.owner)
    }

    #[must_use]
    pub fn stats(&self, position: Position) -> Option<Stats> {
        self.cells[position.index()].as_ref().map(|cell| cell.stats)
    }

    /// Mutable stats of the card at `position`, `None` for an empty cell.
    pub fn stats_mut(&mut self, position: Position) -> Option<&mut Stats> {
        self.cells[position.index()].as_mut().map(|cell| &mut cell.stats)
    }
}

/// What a single `play_card` changed on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnDelta {
    /// The side that played.
    pub side: Side,
    /// Where the card was placed.
    pub placed: Position,
    /// Captures in propagation order.
    pub captures: Vec<CaptureEvent>,
}

impl TurnDelta {
    /// Positions whose card changed owner this turn.
    pub fn captured_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.captures.iter().map(|event| event.position)
    }

    /// Positions whose card captured at least one other card this turn.
    pub fn capturing_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let mut seen = [false; CELL_COUNT];
        self.captures
            .iter()
            .map(|event| event.source)
            .filter(move |pos| !std::mem::replace(&mut seen[pos.index()], true))
    }
}

/// Hook invoked by the Turn Controller after capture resolution.
pub trait TurnHook {
    fn after_resolution(&self, grid: &mut StatsGrid, delta: &TurnDelta);
}

impl<F> TurnHook for F
where
    F: Fn(&mut StatsGrid, &TurnDelta),
{
    fn after_resolution(&self, grid: &mut StatsGrid, delta: &TurnDelta) {
        self(grid, delta)
    }
}
