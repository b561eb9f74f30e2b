// Host-side tests for the particle field and the scene lifecycle machine.

use folio_core::{
    wide_enough, Camera, ParticleField, ScenePhase, SceneState, SceneTransition, PARTICLE_COUNT,
    PARTICLE_COLOR_BLUE, PARTICLE_COLOR_PURPLE, PARTICLE_SPAN, ROT_STEP_X, ROT_STEP_Y,
};

#[test]
fn field_has_the_fixed_particle_count() {
    let field = ParticleField::new(PARTICLE_COUNT, 42);
    assert_eq!(field.positions.len(), 150);
    assert_eq!(field.colors.len(), 150);
}

#[test]
fn positions_span_the_centered_cube() {
    let field = ParticleField::new(PARTICLE_COUNT, 42);
    for p in &field.positions {
        for c in [p.x, p.y, p.z] {
            assert!(
                (-PARTICLE_SPAN..=PARTICLE_SPAN).contains(&c),
                "coordinate {c} out of range"
            );
        }
    }
}

#[test]
fn colors_interpolate_between_the_two_endpoints() {
    let field = ParticleField::new(PARTICLE_COUNT, 42);
    for color in &field.colors {
        for ch in 0..3 {
            let lo = PARTICLE_COLOR_PURPLE[ch].min(PARTICLE_COLOR_BLUE[ch]);
            let hi = PARTICLE_COLOR_PURPLE[ch].max(PARTICLE_COLOR_BLUE[ch]);
            assert!(
                color[ch] >= lo - 1e-6 && color[ch] <= hi + 1e-6,
                "channel {ch} value {} outside [{lo}, {hi}]",
                color[ch]
            );
        }
    }
}

#[test]
fn same_seed_reproduces_the_same_cloud() {
    let a = ParticleField::new(PARTICLE_COUNT, 7);
    let b = ParticleField::new(PARTICLE_COUNT, 7);
    assert_eq!(a.positions, b.positions);
    assert_eq!(a.colors, b.colors);
}

#[test]
fn advance_frame_accumulates_the_tumble() {
    let mut field = ParticleField::new(8, 1);
    field.advance_frame();
    field.advance_frame();
    assert!((field.rotation.x - 2.0 * ROT_STEP_X).abs() < 1e-7);
    assert!((field.rotation.y - 2.0 * ROT_STEP_Y).abs() < 1e-7);
    assert_eq!(field.rotation.z, 0.0);
}

#[test]
fn scroll_rotation_is_absolute_not_incremental() {
    let mut field = ParticleField::new(8, 1);
    field.set_scroll(1000.0);
    field.set_scroll(1000.0);
    assert!((field.rotation.z - 0.1).abs() < 1e-6);
    field.set_scroll(0.0);
    assert_eq!(field.rotation.z, 0.0);
}

#[test]
fn breakpoint_separates_narrow_from_wide() {
    assert!(wide_enough(1024));
    assert!(wide_enough(768));
    assert!(!wide_enough(767));
    assert!(!wide_enough(500));
}

#[test]
fn scene_starts_uninitialized_and_runs_on_demand() {
    let mut state = SceneState::new();
    assert_eq!(state.phase(), ScenePhase::Uninitialized);
    assert_eq!(state.apply(true), SceneTransition::Resumed);
    assert!(state.is_running());
}

#[test]
fn narrow_resize_suspends_and_wide_resize_resumes() {
    // 1024 -> 500 -> 1024, as seen by the resize handler.
    let mut state = SceneState::new();
    state.apply(wide_enough(1024));
    assert!(state.is_running());
    assert_eq!(state.apply(wide_enough(500)), SceneTransition::Suspended);
    assert!(!state.is_running());
    // Resuming signals that the frame loop needs an external re-kick.
    assert_eq!(state.apply(wide_enough(1024)), SceneTransition::Resumed);
    assert!(state.is_running());
}

#[test]
fn resume_does_not_stack_a_second_frame_loop() {
    let mut state = SceneState::new();
    assert_eq!(state.apply(true), SceneTransition::Resumed);
    assert!(state.needs_kick(), "first resume starts the loop");
    state.mark_loop_started();
    assert!(!state.needs_kick());

    // Tab hidden with a tick still queued, then visible again before the
    // browser ever delivered it.
    assert_eq!(state.apply(false), SceneTransition::Suspended);
    assert_eq!(state.apply(true), SceneTransition::Resumed);
    assert!(
        !state.needs_kick(),
        "the queued tick resumes the existing chain; a second kick would double the loop"
    );

    // This time the pending tick fires during the suspension and dies.
    assert_eq!(state.apply(false), SceneTransition::Suspended);
    state.mark_loop_stopped();
    assert_eq!(state.apply(true), SceneTransition::Resumed);
    assert!(state.needs_kick(), "a dead chain needs a fresh kick");
}

#[test]
fn loop_never_kicks_while_suspended() {
    let mut state = SceneState::new();
    state.apply(true);
    state.mark_loop_started();
    state.apply(false);
    state.mark_loop_stopped();
    assert!(!state.needs_kick());
}

#[test]
fn redundant_applications_are_no_ops() {
    let mut state = SceneState::new();
    state.apply(true);
    assert_eq!(state.apply(true), SceneTransition::None);
    state.apply(false);
    assert_eq!(state.apply(false), SceneTransition::None);
    assert_eq!(SceneState::new().apply(false), SceneTransition::None);
}

#[test]
fn projection_recomputes_with_aspect() {
    let wide = Camera::fixed(1024.0 / 768.0);
    let narrow = Camera::fixed(500.0 / 800.0);
    assert_ne!(
        wide.projection_matrix(),
        narrow.projection_matrix(),
        "projection must change with the aspect ratio"
    );
    // View is independent of aspect.
    assert_eq!(wide.view_matrix(), narrow.view_matrix());
}
