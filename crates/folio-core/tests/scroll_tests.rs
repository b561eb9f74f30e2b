// Host-side tests for the frame gate and scroll-driven visual rules.

use folio_core::{
    active_section, header_condensed, parallax_offset, FrameGate, SectionSpan, PARALLAX_RATE,
};

fn spans() -> Vec<SectionSpan> {
    vec![
        SectionSpan {
            id: "hero".into(),
            top: 0.0,
            height: 600.0,
        },
        SectionSpan {
            id: "projects".into(),
            top: 600.0,
            height: 900.0,
        },
        SectionSpan {
            id: "contact".into(),
            top: 1500.0,
            height: 500.0,
        },
    ]
}

#[test]
fn rapid_fire_events_admit_exactly_one_pending_update() {
    let mut gate = FrameGate::default();
    // N scroll events within one frame interval.
    let scheduled: usize = (0..50).filter(|_| gate.try_queue()).count();
    assert_eq!(scheduled, 1);
    assert!(gate.is_queued());
}

#[test]
fn gate_reopens_after_the_deferred_update_runs() {
    let mut gate = FrameGate::default();
    assert!(gate.try_queue());
    gate.release();
    assert!(!gate.is_queued());
    assert!(gate.try_queue(), "next frame's event schedules again");
}

#[test]
fn parallax_tracks_scroll_at_half_rate() {
    assert_eq!(parallax_offset(200.0, 800.0), Some(200.0 * PARALLAX_RATE));
    assert_eq!(parallax_offset(0.0, 800.0), Some(0.0));
}

#[test]
fn parallax_skips_once_past_one_viewport_height() {
    assert_eq!(parallax_offset(801.0, 800.0), None);
    // Exactly one viewport height still updates.
    assert_eq!(parallax_offset(800.0, 800.0), Some(400.0));
}

#[test]
fn active_section_uses_the_probe_offset() {
    let s = spans();
    // scroll_y + 100 lands in "hero".
    assert_eq!(active_section(&s, 0.0), Some("hero"));
    // 550 + 100 = 650 lands in "projects".
    assert_eq!(active_section(&s, 550.0), Some("projects"));
    assert_eq!(active_section(&s, 1500.0), Some("contact"));
}

#[test]
fn no_section_contains_the_probe_past_the_page_end() {
    let s = spans();
    assert_eq!(active_section(&s, 5000.0), None);
    assert_eq!(active_section(&[], 0.0), None);
}

#[test]
fn section_boundaries_are_half_open() {
    let s = spans();
    // Probe at exactly 600 belongs to "projects", not "hero".
    assert_eq!(active_section(&s, 500.0), Some("projects"));
}

#[test]
fn header_condenses_past_fifty_px() {
    assert!(!header_condensed(0.0));
    assert!(!header_condensed(50.0));
    assert!(header_condensed(50.5));
    assert!(header_condensed(400.0));
}
