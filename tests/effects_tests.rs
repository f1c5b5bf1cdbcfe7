// Host-side tests for hover and parallax transforms.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod effects {
        include!("../src/core/effects.rs");
    }
}

use crate::constants::*;
use crate::core::effects::*;

fn card() -> Rect {
    Rect {
        left: 100.0,
        top: 100.0,
        width: 200.0,
        height: 100.0,
    }
}

#[test]
fn magnetic_pointer_at_center_is_identity() {
    let r = card();
    let (cx, cy) = r.center();
    assert_eq!(magnetic_offset(&r, cx, cy), Transform::TRANSLATE_IDENTITY);
}

#[test]
fn magnetic_follows_pointer_at_strength() {
    let r = card();
    match magnetic_offset(&r, 210.0, 145.0) {
        Transform::Translate { x, y } => {
            assert!((x - 3.0).abs() < 1e-9);
            assert!((y + 1.5).abs() < 1e-9);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn magnetic_pull_is_bounded() {
    let r = card();
    for (px, py) in [(5000.0, 150.0), (-5000.0, -5000.0), (200.0, 9000.0)] {
        let Transform::Translate { x, y } = magnetic_offset(&r, px, py) else {
            panic!("magnetic must translate");
        };
        assert!((x * x + y * y).sqrt() <= MAGNETIC_MAX_RADIUS_PX + 1e-9);
    }
}

#[test]
fn tilt_leans_toward_pointer() {
    let r = card();
    // pointer right of and below center
    let Transform::Tilt {
        rotate_x,
        rotate_y,
        scale,
    } = tilt(&r, 240.0, 170.0)
    else {
        panic!("tilt must tilt");
    };
    assert!((rotate_x - 2.0).abs() < 1e-9);
    assert!((rotate_y + 4.0).abs() < 1e-9);
    assert_eq!(scale, TILT_SCALE);
}

#[test]
fn tilt_is_clamped_per_axis() {
    let r = card();
    let Transform::Tilt {
        rotate_x, rotate_y, ..
    } = tilt(&r, -10_000.0, 10_000.0)
    else {
        panic!("tilt must tilt");
    };
    assert_eq!(rotate_x, TILT_MAX_DEG);
    assert_eq!(rotate_y, TILT_MAX_DEG);
}

#[test]
fn identity_matches_kind() {
    assert_eq!(tilt(&card(), 0.0, 0.0).identity(), Transform::TILT_IDENTITY);
    assert_eq!(
        magnetic_offset(&card(), 0.0, 0.0).identity(),
        Transform::TRANSLATE_IDENTITY
    );
}

#[test]
fn css_output() {
    assert_eq!(
        Transform::Translate { x: 1.0, y: -2.5 }.to_css(),
        "translate(1.00px, -2.50px)"
    );
    assert_eq!(
        Transform::TILT_IDENTITY.to_css(),
        "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) scale(1)"
    );
}

#[test]
fn parallax_centered_pointer_rests() {
    assert_eq!(
        parallax_offset(Some((500.0, 400.0)), 1000.0, 800.0, 0.0),
        Some(Transform::TRANSLATE_IDENTITY)
    );
}

#[test]
fn parallax_range_is_bounded() {
    let Some(Transform::Translate { x, y }) = parallax_offset(Some((-50.0, 2000.0)), 1000.0, 800.0, 10.0)
    else {
        panic!("hero is on screen");
    };
    assert_eq!(x, -PARALLAX_RANGE_PX / 2.0);
    assert_eq!(y, PARALLAX_RANGE_PX / 2.0);
}

#[test]
fn parallax_stops_after_first_screen() {
    assert_eq!(parallax_offset(Some((0.0, 0.0)), 1000.0, 800.0, 800.0), None);
    assert_eq!(parallax_offset(Some((0.0, 0.0)), 0.0, 800.0, 0.0), None);
}

#[test]
fn parallax_waits_for_the_first_pointer_move() {
    // before any move the hero keeps its authored position
    assert_eq!(parallax_offset(None, 1280.0, 800.0, 0.0), None);
    assert_eq!(
        parallax_offset(Some((0.0, 0.0)), 1280.0, 800.0, 0.0),
        Some(Transform::Translate {
            x: -PARALLAX_RANGE_PX / 2.0,
            y: -PARALLAX_RANGE_PX / 2.0
        })
    );
}
