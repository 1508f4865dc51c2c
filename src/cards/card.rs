//! Card values.
//!
//! A `Card` is a plain value: capturing a card on the board replaces the
//! board's copy with one that has a different `owner`. Copies held
//! elsewhere (a hand, a previous state, a UI) never observe the change.

use serde::{Deserialize, Serialize};

use crate::board::Direction;
use crate::core::Side;

/// Identifier for a card, unique within a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four edge values of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub top: u8,
    pub right: u8,
    pub bottom: u8,
    pub left: u8,
}

impl Stats {
    #[must_use]
    pub const fn new(top: u8, right: u8, bottom: u8, left: u8) -> Self {
        Self { top, right, bottom, left }
    }

    /// All four edges set to `value`.
    #[must_use]
    pub const fn uniform(value: u8) -> Self {
        Self::new(value, value, value, value)
    }

    /// The value on the edge facing `direction`.
    #[must_use]
    pub const fn facing(&self, direction: Direction) -> u8 {
        match direction {
            Direction::Up => self.top,
            Direction::Right => self.right,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
        }
    }

    /// Apply `f` to every edge.
    #[must_use]
    pub fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.top), f(self.right), f(self.bottom), f(self.left))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Ice,
    Lightning,
    #[default]
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

/// A playing card.
///
/// `owner` is `None` while the card sits in a hand or deck and always
/// `Some` once it is on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub stats: Stats,
    #[serde(default)]
    pub element: Element,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub owner: Option<Side>,
}

impl Card {
    /// Create an unowned common card with no element.
    pub fn new(id: impl Into<CardId>, stats: Stats) -> Self {
        Self {
            id: id.into(),
            stats,
            element: Element::None,
            rarity: Rarity::Common,
            owner: None,
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// A copy of this card owned by `side`.
    #[must_use]
    pub fn owned_by(&self, side: Side) -> Self {
        Self {
            owner: Some(side),
            ..self.clone()
        }
    }

    /// A copy with the owner cleared, as stored in a hand.
    #[must_use]
    pub fn unowned(mut self) -> Self {
        self.owner = None;
        self
    }

    /// The stat on the edge facing `direction`.
    #[must_use]
    pub fn facing(&self, direction: Direction) -> u8 {
        self.stats.facing(direction)
    }

    #[must_use]
    pub fn is_owned_by(&self, side: Side) -> bool {
        self.owner == Some(side)
    }
}
