// Host-side tests for menu, tab, and timing state machines.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod nav {
        include!("../src/core/nav.rs");
    }
    pub mod tabs {
        include!("../src/core/tabs.rs");
    }
    pub mod timing {
        include!("../src/core/timing.rs");
    }
}

use crate::core::nav::*;
use crate::core::tabs::*;
use crate::core::timing::*;

fn effects(menu: &mut NavMenu, event: NavEvent) -> Vec<NavEffect> {
    menu.handle(event).into_iter().collect()
}

#[test]
fn toggle_opens_and_focuses_first_link() {
    let mut menu = NavMenu::new(true);
    assert_eq!(
        effects(&mut menu, NavEvent::Toggle),
        vec![
            NavEffect::SetOpen(true),
            NavEffect::LockScroll(true),
            NavEffect::FocusFirstLink
        ]
    );
    assert_eq!(menu.state(), MenuState::Open);
}

#[test]
fn desktop_menu_never_locks_scroll() {
    let mut menu = NavMenu::new(false);
    let open = effects(&mut menu, NavEvent::Toggle);
    assert!(!open.iter().any(|e| matches!(e, NavEffect::LockScroll(_))));
    let close = effects(&mut menu, NavEvent::Toggle);
    assert_eq!(close, vec![NavEffect::SetOpen(false)]);
}

#[test]
fn escape_closes_and_returns_focus_to_toggle() {
    let mut menu = NavMenu::new(true);
    menu.handle(NavEvent::Toggle);
    assert_eq!(
        effects(&mut menu, NavEvent::Escape),
        vec![
            NavEffect::SetOpen(false),
            NavEffect::LockScroll(false),
            NavEffect::FocusToggle
        ]
    );
    assert!(!menu.is_open());
}

#[test]
fn link_and_outside_click_close_the_menu() {
    for event in [NavEvent::LinkActivated, NavEvent::OutsideClick] {
        let mut menu = NavMenu::new(false);
        menu.handle(NavEvent::Toggle);
        assert_eq!(effects(&mut menu, event), vec![NavEffect::SetOpen(false)]);
        assert_eq!(menu.state(), MenuState::Closed);
    }
}

#[test]
fn closed_menu_ignores_everything_but_toggle() {
    let mut menu = NavMenu::new(true);
    for event in [
        NavEvent::Escape,
        NavEvent::OutsideClick,
        NavEvent::LinkActivated,
        NavEvent::Tab {
            shift: false,
            focused: Some(3),
            link_count: 4,
        },
    ] {
        assert!(menu.handle(event).is_empty());
        assert!(!menu.is_open());
    }
}

#[test]
fn unlock_follows_lock_across_breakpoint_changes() {
    let mut menu = NavMenu::new(true);
    menu.handle(NavEvent::Toggle);
    menu.set_lock_scroll(false);
    assert!(effects(&mut menu, NavEvent::Toggle).contains(&NavEffect::LockScroll(false)));

    // now above the breakpoint: the next open does not lock
    let open = effects(&mut menu, NavEvent::Toggle);
    assert!(!open.contains(&NavEffect::LockScroll(true)));
}

#[test]
fn focus_trap_wraps_both_ways() {
    assert_eq!(focus_trap_target(false, Some(3), 4), Some(0));
    assert_eq!(focus_trap_target(true, Some(0), 4), Some(3));
    assert_eq!(focus_trap_target(false, Some(1), 4), None);
    assert_eq!(focus_trap_target(true, Some(2), 4), None);
    assert_eq!(focus_trap_target(false, None, 4), Some(0));
    assert_eq!(focus_trap_target(true, None, 4), Some(3));
    assert_eq!(focus_trap_target(false, None, 0), None);
}

#[test]
fn open_menu_traps_tab_on_last_link() {
    let mut menu = NavMenu::new(false);
    menu.handle(NavEvent::Toggle);
    let fx = effects(
        &mut menu,
        NavEvent::Tab {
            shift: false,
            focused: Some(4),
            link_count: 5,
        },
    );
    assert_eq!(fx, vec![NavEffect::PreventDefault, NavEffect::FocusLink(0)]);
    assert!(menu.is_open());
}

#[test]
fn tab_keys_wrap_and_jump() {
    let mut tabs = TabList::new(4);
    assert_eq!(tabs.on_key("End"), Some(3));
    assert_eq!(tabs.on_key("ArrowRight"), Some(0));
    assert_eq!(tabs.on_key("ArrowLeft"), Some(3));
    assert_eq!(tabs.on_key("Home"), Some(0));
    assert_eq!(tabs.on_key("ArrowDown"), Some(1));
    assert_eq!(tabs.on_key("ArrowUp"), Some(0));
    assert_eq!(tabs.on_key("Enter"), None);
    assert_eq!(tabs.active(), 0);
}

#[test]
fn exactly_one_tab_is_active() {
    let mut tabs = TabList::new(3);
    assert_eq!(tabs.select(2), Some(2));
    assert_eq!(tabs.select(7), None);
    assert_eq!(tabs.active(), 2);
    assert_eq!(next_index_for_key("ArrowRight", 0, 0), None);
}

#[test]
fn throttle_runs_once_per_window() {
    let mut t = Throttle::new(16.0);
    assert_eq!(t.on_input(0.0), ThrottleAction::Run);
    assert_eq!(
        t.on_input(10.0),
        ThrottleAction::Schedule {
            delay_ms: 6.0,
            generation: 1
        }
    );
    // one trailing sample per window
    assert_eq!(t.on_input(12.0), ThrottleAction::Drop);
    assert!(t.on_timer(1, 16.0));
    assert!(!t.on_timer(1, 16.0));
    assert!(matches!(t.on_input(20.0), ThrottleAction::Schedule { .. }));
    assert!(t.on_timer(1, 32.0));
    assert_eq!(t.on_input(48.0), ThrottleAction::Run);
}

#[test]
fn late_trailing_timer_is_stale_after_a_new_run() {
    let mut t = Throttle::new(16.0);
    t.on_input(0.0);
    let ThrottleAction::Schedule { generation, .. } = t.on_input(5.0) else {
        panic!("inside the window");
    };
    // the timer is delayed past the window and a fresh event runs first
    assert_eq!(t.on_input(40.0), ThrottleAction::Run);
    assert!(!t.on_timer(generation, 41.0));
}

#[test]
fn leading_debounce_runs_once_per_burst() {
    let mut d = Debounce::new(10.0, true);
    let first = d.on_input();
    let second = d.on_input();
    assert!(first.run_now);
    assert!(!second.run_now);
    // stale timer from the first input does nothing
    assert!(!d.on_timer(first.schedule));
    // burst ends; leading mode does not run again on the trailing edge
    assert!(!d.on_timer(second.schedule));
    assert!(d.on_input().run_now);
}

#[test]
fn trailing_debounce_runs_after_quiet() {
    let mut d = Debounce::new(10.0, false);
    let a = d.on_input();
    let b = d.on_input();
    assert!(!a.run_now && !b.run_now);
    assert!(!d.on_timer(a.schedule));
    assert!(d.on_timer(b.schedule));
    assert!(!d.on_timer(b.schedule));
}
