//! Capture Resolver.
//!
//! Decides which orthogonal neighbours a single card captures, using the
//! board exactly as it stands when called. The card at the resolved
//! position is the attacker; its owner is the capturing side.
//!
//! ## Rules
//!
//! - **Basic** (always on): attacker's facing stat strictly greater than
//!   the neighbour's opposite stat. Ties never capture.
//! - **Same**: when at least two occupied neighbours exist and every one of
//!   them shows the same value toward the attacker, all of them are
//!   captured.
//! - **Plus**: attacker facing stat + neighbour opposite stat is summed per
//!   neighbour; every neighbour whose sum is shared with another neighbour
//!   is captured.
//!
//! Rules are unioned. Neighbours already owned by the capturing side take
//! part in Same/Plus matching but are never reported.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Position};
use crate::core::{RuleConfig, Side};

/// The rule that produced a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureRule {
    Basic,
    Same,
    Plus,
}

/// One neighbour the attacker captures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture {
    pub position: Position,
    pub rule: CaptureRule,
}

/// An occupied neighbour, as seen from the attacker.
#[derive(Clone, Copy, Debug)]
struct Contact {
    position: Position,
    owner: Option<Side>,
    /// Attacker's stat on the shared edge.
    attack: u8,
    /// Neighbour's stat on the shared edge.
    defense: u8,
}

/// Resolve the immediate captures of the card at `position`.
///
/// Returns captures in neighbour enumeration order (left, right, up,
/// down). An empty cell at `position` captures nothing.
#[must_use]
pub fn resolve_captures(board: &Board, position: Position, rules: &RuleConfig) -> SmallVec<[Capture; 4]> {
    let Some(attacker) = board.get(position) else {
        return SmallVec::new();
    };
    let Some(side) = attacker.owner else {
        return SmallVec::new();
    };

    let contacts: SmallVec<[Contact; 4]> = position
        .neighbors()
        .into_iter()
        .filter_map(|(dir, pos)| {
            board.get(pos).map(|neighbor| Contact {
                position: pos,
                owner: neighbor.owner,
                attack: attacker.facing(dir),
                defense: neighbor.facing(dir.opposite()),
            })
        })
        .collect();

    let same_triggered = rules.same && same_rule_applies(&contacts);
    let plus_sums = if rules.plus { shared_sums(&contacts) } else { SmallVec::new() };

    contacts
        .iter()
        .filter(|contact| contact.owner != Some(side))
        .filter_map(|contact| {
            let rule = if contact.attack > contact.defense {
                CaptureRule::Basic
            } else if same_triggered {
                CaptureRule::Same
            } else if plus_sums.contains(&contact.sum()) {
                CaptureRule::Plus
            } else {
                return None;
            };
            Some(Capture {
                position: contact.position,
                rule,
            })
        })
        .collect()
}

impl Contact {
    fn sum(&self) -> u16 {
        u16::from(self.attack) + u16::from(self.defense)
    }
}

/// At least two neighbours, all showing the same value.
fn same_rule_applies(contacts: &[Contact]) -> bool {
    match contacts.split_first() {
        Some((first, rest)) if !rest.is_empty() => rest.iter().all(|c| c.defense == first.defense),
        _ => false,
    }
}

/// Sums that occur for two or more neighbours.
fn shared_sums(contacts: &[Contact]) -> SmallVec<[u16; 2]> {
    let mut counts: FxHashMap<u16, usize> = FxHashMap::default();
    for contact in contacts {
        *counts.entry(contact.sum()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|&(_, n)| n >= 2)
        .map(|(sum, _)| sum)
        .collect()
}
