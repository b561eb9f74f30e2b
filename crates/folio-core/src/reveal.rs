//! Reveal-on-scroll bookkeeping. The web frontend owns the
//! IntersectionObserver; this module owns the monotonic revealed set and the
//! threshold/clamp rules.

use fnv::FnvHashSet;

use crate::constants::REVEAL_THRESHOLD;

/// An element reveals once its visible fraction crosses the threshold.
#[inline]
pub fn should_reveal(intersection_ratio: f64) -> bool {
    intersection_ratio >= REVEAL_THRESHOLD
}

/// Declared skill levels are clamped to the 0-100 bar range.
#[inline]
pub fn skill_fill_percent(raw_level: f64) -> f64 {
    raw_level.clamp(0.0, 100.0)
}

/// Monotonic per-element reveal state: once marked, never un-marked, so a
/// repeated observer callback is a no-op (no class thrash).
#[derive(Debug, Default)]
pub struct RevealSet {
    revealed: FnvHashSet<String>,
}

impl RevealSet {
    /// Returns true only the first time a key is marked.
    pub fn mark(&mut self, key: &str) -> bool {
        self.revealed.insert(key.to_string())
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
