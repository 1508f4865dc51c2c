//! Match results.

use serde::{Deserialize, Serialize};

use crate::core::{Score, Side};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    /// One side owns strictly more cells.
    Winner(Side),
    /// Equal cell counts.
    Draw,
}

impl GameResult {
    /// Decide the result from a score by strict comparison.
    #[must_use]
    pub fn from_score(score: &Score) -> Self {
        match score.player.cmp(&score.opponent) {
            std::cmp::Ordering::Greater => GameResult::Winner(Side::Player),
            std::cmp::Ordering::Less => GameResult::Winner(Side::Opponent),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(side) => write!(f, "{side}"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}
