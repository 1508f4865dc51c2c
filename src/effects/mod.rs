//! Secondary effect layer.
//!
//! Runs after capture resolution, never inside it:
//! - `TurnHook`: the post-resolution extension point of the Turn Controller
//! - `TurnDelta`: what the current turn changed
//! - `StatsGrid`: the stats-only board view hooks write to
//! - `AbilityTable`: per-card stat abilities triggered on play, capture, or loss

mod hook;
mod ability;

pub use hook::{StatsGrid, TurnDelta, TurnHook};
pub use ability::{Ability, AbilityEffect, AbilityTable, AbilityTrigger};
