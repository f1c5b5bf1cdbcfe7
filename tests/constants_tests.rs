// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factors_are_fractions() {
    assert!(TRAIL_EASE > 0.0 && TRAIL_EASE < 1.0);
    assert!(TRAIL_EASE_HOVER > 0.0 && TRAIL_EASE_HOVER < 1.0);
    // hovering slows the trail down
    assert!(TRAIL_EASE_HOVER < TRAIL_EASE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constellation_parameters_are_sane() {
    assert_eq!(CONSTELLATION_CAPACITY, 30);
    assert!(CONSTELLATION_LIFE_FRAMES > 0);
    assert!(CONSTELLATION_SPAWN_PROBABILITY > 0.0 && CONSTELLATION_SPAWN_PROBABILITY <= 1.0);
    assert!(CONSTELLATION_LINK_DISTANCE > 0.0);
    assert!(CONSTELLATION_LINE_ALPHA > 0.0 && CONSTELLATION_LINE_ALPHA <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_thresholds_are_ordered() {
    assert!(NAVBAR_SHADOW_AFTER_PX < SCROLL_INDICATOR_HIDE_AFTER_PX);
    assert!(SCROLL_INDICATOR_HIDE_AFTER_PX < BACK_TO_TOP_AFTER_PX);
    assert!(NAVBAR_HEIGHT_PX < SECTION_HIGHLIGHT_OFFSET_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_effects_are_bounded() {
    assert!(MAGNETIC_STRENGTH > 0.0 && MAGNETIC_STRENGTH < 1.0);
    assert!(MAGNETIC_MAX_RADIUS_PX > 0.0);
    assert!(TILT_MAX_DEG > 0.0 && TILT_MAX_DEG <= 12.0);
    assert!(TILT_SCALE >= 1.0);
    assert!(BASE_HUE >= 0.0 && BASE_HUE < 360.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn breakpoints_and_timers_are_positive() {
    assert_eq!(MOBILE_BREAKPOINT_PX, 768.0);
    assert_eq!(SHORT_VIEWPORT_PX, 600.0);
    assert!(SCROLL_THROTTLE_MS > 0.0);
    assert!(HIGHLIGHT_DEBOUNCE_MS > 0.0);
    assert!(BURST_LIFETIME_MS > 0 && VELOCITY_RING_LIFETIME_MS > 0);
    assert!(TYPEWRITER_START_DELAY_MS >= 0 && TYPEWRITER_CHAR_DELAY_MS > 0);
}
