//! Rule configuration.
//!
//! `RuleConfig` toggles the optional capture mechanics. The Basic rule is
//! always active and has no flag.
//!
//! Deserialisation is lenient: missing flags default to `false` and
//! unknown flags are ignored, so configs written for a newer effect layer
//! still load.

use serde::{Deserialize, Serialize};

/// Optional capture mechanics for a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Same rule: neighbours showing equal facing values are all captured.
    pub same: bool,

    /// Plus rule: neighbours sharing a facing-value sum are all captured.
    pub plus: bool,

    /// Elemental modifiers. Accepted but not used by the capture resolver.
    pub elements: bool,

    /// Ragnarok counter. Accepted but not used by the capture resolver.
    pub ragnarok: bool,
}

impl RuleConfig {
    /// Basic rule only.
    #[must_use]
    pub fn basic() -> Self {
        Self::default()
    }

    pub fn with_same(mut self, enabled: bool) -> Self {
        self.same = enabled;
        self
    }

    pub fn with_plus(mut self, enabled: bool) -> Self {
        self.plus = enabled;
        self
    }

    pub fn with_elements(mut self, enabled: bool) -> Self {
        self.elements = enabled;
        self
    }

    pub fn with_ragnarok(mut self, enabled: bool) -> Self {
        self.ragnarok = enabled;
        self
    }
}
