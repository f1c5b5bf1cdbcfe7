/// Breakpoints, easing factors and other tuning constants.
///
/// These keep magic numbers out of the wiring code. Values are presentation
/// detail; what matters is their relationships (see `tests/constants_tests.rs`).
// Viewport breakpoints (CSS pixels)
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // at or below: no cursor, native progress
pub const SHORT_VIEWPORT_PX: f64 = 600.0; // at or below: native progress

// Cursor trail
pub const TRAIL_LENGTH: usize = 15;
pub const TRAIL_EASE: f32 = 0.25;
pub const TRAIL_EASE_HOVER: f32 = 0.15; // slower trail while hovering interactive elements
pub const TRAIL_HUE_STEP: f32 = 10.0; // hue shift per trail element
pub const TRAIL_ROTATION_STEP_DEG: f32 = 15.0;

// Pointer color derivation
pub const BASE_HUE: f32 = 180.0; // cyan
pub const HUE_PER_VELOCITY: f32 = 2.0;

// Constellation
pub const CONSTELLATION_CAPACITY: usize = 30;
pub const CONSTELLATION_LIFE_FRAMES: i32 = 60;
pub const CONSTELLATION_SPAWN_PROBABILITY: f64 = 0.3;
pub const CONSTELLATION_LINK_DISTANCE: f32 = 150.0;
pub const CONSTELLATION_LINE_ALPHA: f32 = 0.3;
pub const CONSTELLATION_POINT_RADIUS: f64 = 3.0;

// Click feedback
pub const BURST_PARTICLES: usize = 12;
pub const BURST_HUE_STEP: f32 = 30.0;
pub const BURST_LIFETIME_MS: i32 = 1000;
pub const VELOCITY_RING_MIN: f32 = 5.0;
pub const VELOCITY_RING_LIFETIME_MS: i32 = 800;
pub const RIPPLE_LIFETIME_MS: i32 = 1000;

// Hover effects
pub const MAGNETIC_STRENGTH: f64 = 0.3;
pub const MAGNETIC_MAX_RADIUS_PX: f64 = 18.0;
pub const TILT_DIVISOR: f64 = 10.0;
pub const TILT_MAX_DEG: f64 = 12.0;
pub const TILT_SCALE: f64 = 1.05;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const PARALLAX_RANGE_PX: f64 = 20.0;

// Scroll-linked thresholds (page Y offset, CSS pixels)
pub const NAVBAR_SHADOW_AFTER_PX: f64 = 50.0;
pub const SCROLL_INDICATOR_HIDE_AFTER_PX: f64 = 200.0;
pub const BACK_TO_TOP_AFTER_PX: f64 = 500.0;
pub const SECTION_HIGHLIGHT_OFFSET_PX: f64 = 100.0;
pub const NAVBAR_HEIGHT_PX: f64 = 80.0; // smooth-scroll landing offset

// Rate limiting
pub const SCROLL_THROTTLE_MS: f64 = 16.0;
pub const HIGHLIGHT_DEBOUNCE_MS: f64 = 10.0;

// Reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_OFFSET_PX: f64 = 30.0;

// Typewriter
pub const TYPEWRITER_START_DELAY_MS: i32 = 500;
pub const TYPEWRITER_CHAR_DELAY_MS: i32 = 50;

// Pinned feature steps: extra virtual scroll distance per step, in viewport heights (%)
pub const PIN_DISTANCE_PER_STEP_PCT: u32 = 100;
