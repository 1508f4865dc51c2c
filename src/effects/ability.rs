//! Table-driven card abilities.
//!
//! An `AbilityTable` maps card ids to a single `Ability` and runs as a
//! `TurnHook`. Abilities only change stats of the board's copy of a card,
//! through the hook's `StatsGrid`.
//!
//! ## Triggers
//!
//! - `OnPlay`: the card was the one placed this turn
//! - `OnCapture`: the card captured at least one other card this turn
//! - `OnLoss`: the card was captured this turn
//!
//! A card fires at most once per trigger per turn.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::hook::{StatsGrid, TurnDelta, TurnHook};
use crate::board::Position;
use crate::cards::{CardId, Stats};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityTrigger {
    OnPlay,
    OnCapture,
    OnLoss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityEffect {
    /// Raise all four stats (saturating).
    Boost(u8),
    /// Lower all four stats (saturating at zero).
    Weaken(u8),
    /// Swap top with bottom and left with right.
    SwapSides,
}

impl AbilityEffect {
    /// Apply this effect to a set of stats.
    #[must_use]
    pub fn apply(self, stats: Stats) -> Stats {
        match self {
            AbilityEffect::Boost(n) => stats.map(|v| v.saturating_add(n)),
            AbilityEffect::Weaken(n) => stats.map(|v| v.saturating_sub(n)),
            AbilityEffect::SwapSides => Stats::new(stats.bottom, stats.left, stats.top, stats.right),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ability {
    pub trigger: AbilityTrigger,
    pub effect: AbilityEffect,
}

impl Ability {
    #[must_use]
    pub const fn new(trigger: AbilityTrigger, effect: AbilityEffect) -> Self {
        Self { trigger, effect }
    }
}

/// Card abilities keyed by card id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AbilityTable {
    abilities: FxHashMap<CardId, Ability>,
}

impl AbilityTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an ability, replacing any previous one for the card.
    pub fn with(mut self, card_id: impl Into<CardId>, ability: Ability) -> Self {
        self.insert(card_id, ability);
        self
    }

    pub fn insert(&mut self, card_id: impl Into<CardId>, ability: Ability) -> Option<Ability> {
        self.abilities.insert(card_id.into(), ability)
    }

    #[must_use]
    pub fn get(&self, card_id: &CardId) -> Option<&Ability> {
        self.abilities.get(card_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    fn fire(&self, grid: &mut StatsGrid, position: Position, trigger: AbilityTrigger) {
        let Some(ability) = grid.card_id(position).and_then(|id| self.abilities.get(id)) else {
            return;
        };
        if ability.trigger != trigger {
            return;
        }
        let Some(stats) = grid.stats_mut(position) else {
            return;
        };

        *stats = ability.effect.apply(*stats);
        debug!(at = %position, ?trigger, effect = ?ability.effect, "ability fired");
    }
}

impl TurnHook for AbilityTable {
    fn after_resolution(&self, grid: &mut StatsGrid, delta: &TurnDelta) {
        self.fire(grid, delta.placed, AbilityTrigger::OnPlay);
        for position in delta.capturing_positions() {
            self.fire(grid, position, AbilityTrigger::OnCapture);
        }
        for position in delta.captured_positions() {
            self.fire(grid, position, AbilityTrigger::OnLoss);
        }
    }
}
