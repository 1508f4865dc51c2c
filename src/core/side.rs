//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two participants of a match. `Side::Player` is player 1 and moves
//! first; `Side::Opponent` is player 2 (usually the AI).
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`.
//!
//! ## Score
//!
//! Board-cell counts per side. Always produced by a fresh board scan.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Player 1, the side that moves first.
    Player,
    /// Player 2.
    Opponent,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    /// The other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Slot index (0 for player, 1 for opponent).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use grid_triad::core::{Side, SideMap};
///
/// let mut captures = SideMap::from_pair(0, 0);
/// captures[Side::Opponent] += 2;
///
/// assert_eq!(captures[Side::Player], 0);
/// assert_eq!(captures[Side::Opponent], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map from explicit per-side values.
    pub fn from_pair(player: T, opponent: T) -> Self {
        Self {
            data: [player, opponent],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

/// Number of board cells owned by each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub player: usize,
    pub opponent: usize,
}

impl Score {
    /// Cells owned by `side`.
    #[must_use]
    pub const fn of(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// Total occupied cells.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.player + self.opponent
    }

    /// `side`'s count minus the other side's count.
    #[must_use]
    pub fn margin(&self, side: Side) -> i32 {
        self.of(side) as i32 - self.of(side.other()) as i32
    }
}
