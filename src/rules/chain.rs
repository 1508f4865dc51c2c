//! Chain Reaction Engine.
//!
//! After a placement, every card that changes hands is re-examined against
//! its own neighbours with the same Capture Resolver, breadth-first, until
//! nothing else flips.
//!
//! ## Termination
//!
//! Positions are processed at most once per turn and only cells owned by
//! the other side can be captured, so a turn touches at most nine cells.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::capture::{resolve_captures, CaptureRule};
use crate::board::{Board, Position, CELL_COUNT};
use crate::cards::CardId;
use crate::core::{RuleConfig, Side};

/// Notification that a card changed owner during a turn.
///
/// Events are a presentation side channel. The board produced by the
/// engine is correct whether or not anyone reads them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureEvent {
    /// The captured card.
    pub card_id: CardId,
    /// Where the captured card sits.
    pub position: Position,
    /// The card that made the capture.
    pub source: Position,
    pub new_owner: Side,
    pub rule: CaptureRule,
    /// `false` only for the first capture of the turn, `true` for every
    /// later one.
    pub is_chain_reaction: bool,
}

/// Breadth-first capture propagation for one placement.
pub struct ChainReaction<'a> {
    rules: &'a RuleConfig,
    side: Side,
    queue: VecDeque<Position>,
    processed: [bool; CELL_COUNT],
}

impl<'a> ChainReaction<'a> {
    /// Prepare a chain seeded at `origin`, capturing for `side`.
    #[must_use]
    pub fn new(rules: &'a RuleConfig, origin: Position, side: Side) -> Self {
        let mut queue = VecDeque::with_capacity(CELL_COUNT);
        queue.push_back(origin);
        Self {
            rules,
            side,
            queue,
            processed: [false; CELL_COUNT],
        }
    }

    /// Run to a fixed point, flipping captured cards on `board`.
    ///
    /// Returns capture events in propagation order.
    pub fn run(mut self, board: &mut Board) -> Vec<CaptureEvent> {
        let mut events = Vec::new();

        while let Some(position) = self.queue.pop_front() {
            if std::mem::replace(&mut self.processed[position.index()], true) {
                trace!(%position, "chain node already processed");
                continue;
            }
            if board.owner_at(position) != Some(self.side) {
                trace!(%position, "chain node not owned by capturing side");
                continue;
            }

            // Resolve the whole node against the current board before flipping.
            let captures = resolve_captures(board, position, self.rules);

            for capture in captures {
                let Some(card) = board.get(capture.position) else {
                    continue;
                };
                let card_id = card.id.clone();
                board.set_owner(capture.position, self.side);

                let event = CaptureEvent {
                    card_id,
                    position: capture.position,
                    source: position,
                    new_owner: self.side,
                    rule: capture.rule,
                    is_chain_reaction: !events.is_empty(),
                };
                debug!(
                    card = %event.card_id,
                    at = %event.position,
                    by = %event.source,
                    rule = ?event.rule,
                    chain = event.is_chain_reaction,
                    "card captured"
                );

                self.queue.push_back(capture.position);
                events.push(event);
            }
        }

        events
    }
}

/// Run the chain reaction for the card just placed at `origin`.
///
/// The capturing side is the owner of that card; an empty origin does
/// nothing.
pub fn propagate(board: &mut Board, origin: Position, rules: &RuleConfig) -> Vec<CaptureEvent> {
    match board.owner_at(origin) {
        Some(side) => ChainReaction::new(rules, origin, side).run(board),
        None => Vec::new(),
    }
}
