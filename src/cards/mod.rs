//! Card system.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier unique within a match
//! - `Stats`: The four directional edge values
//! - `Element`, `Rarity`: Descriptive card properties
//! - `Card`: A card value with an optional owner

pub mod card;

pub use card::{Card, CardId, Element, Rarity, Stats};
