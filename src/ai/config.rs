//! AI configuration.

use serde::{Deserialize, Serialize};

/// AI strength tier.
///
/// | Difficulty | Position choice                                   | Card choice      |
/// |------------|---------------------------------------------------|------------------|
/// | Easy       | uniform random empty cell                         | first hand slot  |
/// | Medium     | random cell next to an enemy card, else any cell  | first hand slot  |
/// | Hard       | exhaustive (card, cell) evaluation, first best    | evaluated card   |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, weakest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Strategist configuration. Fixed for the strategist's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,

    /// Seed for random tie-breaks.
    /// Same seed produces the same choices for the same states.
    pub seed: u64,

    /// Hard tier only: score candidates after a full capture resolution
    /// instead of the placement-only count.
    pub simulate_captures: bool,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: 42,
            simulate_captures: false,
        }
    }
}

impl AiConfig {
    /// Default config at the given difficulty.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_simulated_captures(mut self, enabled: bool) -> Self {
        self.simulate_captures = enabled;
        self
    }
}
