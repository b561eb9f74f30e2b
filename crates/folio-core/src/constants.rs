// Shared tuning constants used by both the core logic and the web frontend.

// Particle field
pub const PARTICLE_COUNT: usize = 150;
pub const PARTICLE_SPAN: f32 = 50.0; // coordinates uniform in [-SPAN, SPAN]
pub const PARTICLE_SIZE: f32 = 0.7; // world-space billboard size
pub const PARTICLE_COLOR_PURPLE: [f32; 3] = [0.545, 0.361, 0.965];
pub const PARTICLE_COLOR_BLUE: [f32; 3] = [0.231, 0.510, 0.965];
pub const ROT_STEP_X: f32 = 0.0005; // per-frame tumble increments
pub const ROT_STEP_Y: f32 = 0.001;
pub const SCROLL_ROTATION_FACTOR: f64 = 0.0001; // rotation_z = scroll_y * factor

// Camera
pub const CAMERA_Z: f32 = 100.0;
pub const CAMERA_FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Scene lifecycle
pub const NARROW_BREAKPOINT_PX: u32 = 768; // below this the scene suspends

// Scroll-driven visuals
pub const PARALLAX_RATE: f64 = 0.5;
pub const NAV_PROBE_OFFSET_PX: f64 = 100.0;
pub const HEADER_CONDENSE_PX: f64 = 50.0;

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_BOTTOM_INSET_PX: u32 = 50; // shrinks the observer viewport at the bottom
pub const SKILL_FILL_DELAY_MS: i32 = 300;

// Contact form
pub const MAILTO_DELAY_MS: i32 = 1000;
pub const TOAST_DURATION_MS: i32 = 3000;

// Projects gallery
pub const CARD_STAGGER_SECS: f32 = 0.1;
