//! Decorative particle background: point-cloud state and the scene
//! lifecycle machine.
//!
//! These types intentionally avoid referencing platform-specific APIs and
//! compile on both host and web targets. The web frontend drives the frame
//! loop and owns the GPU resources; everything here is plain state.

use glam::{EulerRot, Mat4, Vec3};
use rand::prelude::*;

use crate::constants::{
    CAMERA_FOV_Y, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR, NARROW_BREAKPOINT_PX,
    PARTICLE_COLOR_BLUE, PARTICLE_COLOR_PURPLE, PARTICLE_SPAN, ROT_STEP_X, ROT_STEP_Y,
    SCROLL_ROTATION_FACTOR,
};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Fixed-distance camera looking at the cloud's centre.
    pub fn fixed(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_Y,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// The point cloud: fixed particle count, randomized positions spanning a
/// cube centred at the origin, per-particle colors lerped between two fixed
/// endpoints, and a three-axis rotation accumulator.
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
    pub rotation: Vec3,
}

impl ParticleField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                rng.gen_range(-PARTICLE_SPAN..=PARTICLE_SPAN),
                rng.gen_range(-PARTICLE_SPAN..=PARTICLE_SPAN),
                rng.gen_range(-PARTICLE_SPAN..=PARTICLE_SPAN),
            ));
            let t = rng.gen::<f32>();
            colors.push(lerp_rgb(PARTICLE_COLOR_PURPLE, PARTICLE_COLOR_BLUE, t));
        }
        Self {
            positions,
            colors,
            rotation: Vec3::ZERO,
        }
    }

    /// Advance the slow tumble by one frame.
    pub fn advance_frame(&mut self) {
        self.rotation.x += ROT_STEP_X;
        self.rotation.y += ROT_STEP_Y;
    }

    /// Scroll feeds the third axis directly, not incrementally.
    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.rotation.z = (scroll_y * SCROLL_ROTATION_FACTOR) as f32;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

fn lerp_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// True when the viewport is wide enough for the decorative background.
#[inline]
pub fn wide_enough(width_px: u32) -> bool {
    width_px >= NARROW_BREAKPOINT_PX
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScenePhase {
    #[default]
    Uninitialized,
    Running,
    Suspended,
}

/// Result of applying a desired run state. `Resumed` means the frame loop
/// may need an external kick: the loop only reschedules itself from inside
/// an active frame callback, so a bare flag flip would stall forever.
/// Whether a kick is actually due is `needs_kick`'s call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneTransition {
    None,
    Suspended,
    Resumed,
}

/// Uninitialized -> Running <-> Suspended, plus frame-loop liveness.
///
/// A tick scheduled before a suspension stays queued until the browser
/// delivers it. Resuming before it fires must NOT start a second chain, or
/// every hide/show cycle stacks another loop. `loop_live` tracks whether a
/// chain is still pending: set when a loop is kicked, cleared when a tick
/// observes a non-running scene and declines to reschedule.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneState {
    phase: ScenePhase,
    loop_live: bool,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == ScenePhase::Running
    }

    /// Move toward the desired run state, reporting the transition taken.
    pub fn apply(&mut self, want_running: bool) -> SceneTransition {
        match (self.phase, want_running) {
            (ScenePhase::Running, false) => {
                self.phase = ScenePhase::Suspended;
                SceneTransition::Suspended
            }
            (ScenePhase::Uninitialized, true) | (ScenePhase::Suspended, true) => {
                self.phase = ScenePhase::Running;
                SceneTransition::Resumed
            }
            _ => SceneTransition::None,
        }
    }

    /// A fresh frame-loop chain was scheduled.
    pub fn mark_loop_started(&mut self) {
        self.loop_live = true;
    }

    /// The pending tick saw a non-running scene and did not reschedule.
    pub fn mark_loop_stopped(&mut self) {
        self.loop_live = false;
    }

    /// True when the scene should be animating but no chain is pending.
    pub fn needs_kick(&self) -> bool {
        self.is_running() && !self.loop_live
    }
}
