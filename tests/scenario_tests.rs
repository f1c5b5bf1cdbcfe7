// Host-side tests for startup decisions driven by page capabilities.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod capabilities {
        include!("../src/core/capabilities.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use crate::core::capabilities::*;
use crate::core::config::*;
use crate::core::reveal::*;

fn desktop(reduced_motion: bool, animation_library: bool) -> Capabilities {
    Capabilities {
        reduced_motion,
        animation_library,
        smooth_scroll_library: true,
        icon_library: true,
        viewport: Viewport {
            width: 1024.0,
            height: 768.0,
        },
    }
}

#[test]
fn desktop_without_library_uses_native_scroll_with_cursor() {
    let caps = desktop(false, false);
    assert_eq!(caps.progress_strategy(), ProgressStrategy::NativeScroll);
    assert!(caps.cursor_enabled());
    assert!(caps.smooth_scroll_enabled());
    assert!(!caps.lock_scroll_on_menu());
}

#[test]
fn desktop_with_library_pins() {
    assert_eq!(desktop(false, true).progress_strategy(), ProgressStrategy::Pinned);
}

#[test]
fn reduced_motion_disables_motion_features() {
    let caps = desktop(true, true);
    assert_eq!(caps.progress_strategy(), ProgressStrategy::NativeScroll);
    assert!(!caps.cursor_enabled());
    assert!(!caps.smooth_scroll_enabled());
}

#[test]
fn phone_locks_scroll_and_has_no_cursor() {
    let caps = Capabilities {
        viewport: Viewport {
            width: 390.0,
            height: 844.0,
        },
        ..desktop(false, true)
    };
    assert!(caps.lock_scroll_on_menu());
    assert!(!caps.cursor_enabled());
    assert_eq!(caps.progress_strategy(), ProgressStrategy::NativeScroll);
}

#[test]
fn reduced_motion_shows_every_reveal_element_immediately() {
    for group in REVEAL_GROUPS {
        for i in 0..10 {
            assert_eq!(plan(group, i, true), RevealPlan::ShowImmediately);
        }
    }
}

#[test]
fn reveal_is_staggered_within_a_group() {
    let group = &REVEAL_GROUPS[0];
    let RevealPlan::Animate { transition, .. } = plan(group, 3, false) else {
        panic!("motion allowed");
    };
    let expected = format!("{:.2}s", 3.0 * group.stagger_sec);
    assert!(transition.contains(&expected), "{transition}");
}

#[test]
fn leadership_items_slide_from_the_left() {
    let group = REVEAL_GROUPS
        .iter()
        .find(|g| g.selector == ".leadership-item")
        .expect("leadership group");
    let RevealPlan::Animate {
        hidden_transform,
        visible_transform,
        ..
    } = plan(group, 0, false)
    else {
        panic!("motion allowed");
    };
    assert_eq!(hidden_transform, "translateX(-30px)");
    assert_eq!(visible_transform, "translateX(0)");
}

#[test]
fn typewriter_reveals_one_character_at_a_time() {
    let mut w = Typewriter::new("Hé!");
    assert_eq!(w.advance(), Some("H"));
    assert_eq!(w.advance(), Some("Hé"));
    assert_eq!(w.advance(), Some("Hé!"));
    assert!(w.is_done());
    assert_eq!(w.advance(), None);
    assert_eq!(w.full_text(), "Hé!");
}

#[test]
fn page_overrides() {
    let cfg = SiteConfig::default().with_overrides(Some("off"), Some("150"));
    assert!(!cfg.cursor);
    assert_eq!(cfg.pin_end(4), "+=600%");
    let cfg = SiteConfig::default().with_overrides(None, Some("nonsense"));
    assert!(cfg.cursor);
    assert_eq!(cfg.pin_end(2), "+=200%");
}
