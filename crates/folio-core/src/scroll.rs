//! Scroll-driven visual state, throttled to at most one update per display
//! frame.

use crate::constants::{HEADER_CONDENSE_PX, NAV_PROBE_OFFSET_PX, PARALLAX_RATE};

/// Single-slot "update already queued" machine: Idle -> Queued on the first
/// raw scroll event, Queued -> Idle only after the deferred update runs.
/// Guards against re-entrant frame scheduling.
#[derive(Debug, Default)]
pub struct FrameGate {
    queued: bool,
}

impl FrameGate {
    /// Returns true exactly once until `release` is called; the caller
    /// schedules a frame callback only on true.
    pub fn try_queue(&mut self) -> bool {
        if self.queued {
            false
        } else {
            self.queued = true;
            true
        }
    }

    /// Called from inside the deferred update once it has run.
    pub fn release(&mut self) {
        self.queued = false;
    }

    pub fn is_queued(&self) -> bool {
        self.queued
    }
}

/// Vertical span of one page section, measured in document coordinates.
#[derive(Clone, Debug)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Hero parallax offset in px, or None once scrolled past one viewport
/// height (the hero is off screen, skip the work).
pub fn parallax_offset(scroll_y: f64, viewport_height: f64) -> Option<f64> {
    if scroll_y > viewport_height {
        None
    } else {
        Some(scroll_y * PARALLAX_RATE)
    }
}

/// The nav link whose target section's span contains `scroll_y + 100` is
/// active; all others are cleared.
pub fn active_section(sections: &[SectionSpan], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + NAV_PROBE_OFFSET_PX;
    sections
        .iter()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id.as_str())
}

/// Header gains its condensed background/blur past a small scroll distance.
pub fn header_condensed(scroll_y: f64) -> bool {
    scroll_y > HEADER_CONDENSE_PX
}
