//! Capture rules and chain reactions.
//!
//! - `capture`: which neighbours a single card captures
//! - `chain`: breadth-first propagation through newly flipped cards
//! - `outcome`: match results
//!
//! Nothing here draws random numbers: the same board and rules always
//! produce the same captures in the same order.

pub mod capture;
pub mod chain;
pub mod outcome;

pub use capture::{resolve_captures, Capture, CaptureRule};
pub use chain::{propagate, CaptureEvent, ChainReaction};
pub use outcome::GameResult;
