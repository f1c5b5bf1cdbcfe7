// Host-side tests for the cursor animation state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod cursor {
        include!("../src/core/cursor.rs");
    }
}

use crate::constants::*;
use crate::core::cursor::*;
use glam::Vec2;

#[test]
fn easing_is_idempotent_at_rest() {
    let p = Vec2::new(120.5, -40.0);
    for factor in [0.0, 0.15, 0.25, 1.0] {
        assert_eq!(ease_toward(p, p, factor), p);
    }
}

#[test]
fn easing_converges_without_overshoot() {
    let target = Vec2::new(100.0, 50.0);
    let mut cur = Vec2::ZERO;
    let mut prev_dist = cur.distance(target);
    for _ in 0..200 {
        cur = ease_toward(cur, target, TRAIL_EASE);
        let d = cur.distance(target);
        assert!(d <= prev_dist);
        assert!(cur.x <= target.x && cur.y <= target.y);
        prev_dist = d;
    }
    assert!(prev_dist < 1e-3);
}

#[test]
fn trail_nodes_follow_their_predecessor() {
    let mut trail = Trail::default();
    trail.snap(Vec2::ZERO);
    let pointer = Vec2::new(100.0, 0.0);

    trail.step(pointer, 0.5);
    let nodes = trail.nodes();
    // node 0 moved toward the pointer, node 1 chased node 0's old position (origin)
    assert_eq!(nodes[0], Vec2::new(50.0, 0.0));
    assert_eq!(nodes[1], Vec2::ZERO);

    trail.step(pointer, 0.5);
    let nodes = trail.nodes();
    assert_eq!(nodes[0], Vec2::new(75.0, 0.0));
    assert_eq!(nodes[1], Vec2::new(25.0, 0.0));
    assert_eq!(nodes[2], Vec2::ZERO);
}

#[test]
fn trail_styles_shrink_along_the_chain() {
    let trail = Trail::default();
    let styles: Vec<_> = trail.styles(200.0).collect();
    assert_eq!(styles.len(), TRAIL_LENGTH);
    assert_eq!(styles[0].scale, 1.0);
    assert!(styles.windows(2).all(|w| w[1].scale < w[0].scale));
    assert!(styles.iter().all(|s| (0.0..360.0).contains(&s.hue)));
}

#[test]
fn velocity_is_distance_between_consecutive_samples() {
    let mut p = PointerState::default();
    p.on_move(Vec2::new(10.0, 10.0));
    p.on_move(Vec2::new(13.0, 14.0));
    assert!((p.velocity - 5.0).abs() < 1e-5);
    p.on_move(Vec2::new(13.0, 14.0));
    assert_eq!(p.velocity, 0.0);
    assert_eq!(p.hue, BASE_HUE);
}

#[test]
fn pool_never_exceeds_capacity() {
    let mut state = CursorState::new(7);
    for i in 0..5_000 {
        let pos = Vec2::new((i % 800) as f32, (i % 600) as f32);
        state.on_move(pos, HoverKind::None);
        if i % 3 == 0 {
            state.frame();
        }
        assert!(state.constellation.live_count() <= CONSTELLATION_CAPACITY);
        assert_eq!(state.constellation.capacity(), CONSTELLATION_CAPACITY);
    }
}

#[test]
fn full_pool_rejects_spawns_until_a_slot_expires() {
    let mut c = Constellation::default();
    for i in 0..CONSTELLATION_CAPACITY {
        assert!(c.spawn(Vec2::new(i as f32, 0.0)));
    }
    assert!(!c.spawn(Vec2::ZERO));

    let mut frame = ConstellationFrame::default();
    for _ in 0..CONSTELLATION_LIFE_FRAMES {
        c.advance(&mut frame);
    }
    assert_eq!(c.live_count(), 0);
    assert!(frame.points.is_empty());
    assert!(c.spawn(Vec2::ZERO));
}

#[test]
fn points_fade_with_remaining_life() {
    let mut c = Constellation::default();
    c.spawn(Vec2::new(5.0, 5.0));
    let mut frame = ConstellationFrame::default();
    c.advance(&mut frame);
    let first = frame.points[0].1;
    c.advance(&mut frame);
    assert!(frame.points[0].1 < first);
}

#[test]
fn link_alpha_decays_with_distance() {
    let mut near = Constellation::default();
    near.spawn(Vec2::ZERO);
    near.spawn(Vec2::new(10.0, 0.0));
    let mut far = Constellation::default();
    far.spawn(Vec2::ZERO);
    far.spawn(Vec2::new(140.0, 0.0));
    let mut frame = ConstellationFrame::default();
    near.advance(&mut frame);
    let a = frame.links[0].alpha;
    far.advance(&mut frame);
    let b = frame.links[0].alpha;
    assert!(a > b);
}

#[test]
fn draw_list_is_rebuilt_in_place() {
    let mut c = Constellation::default();
    for i in 0..10 {
        c.spawn(Vec2::new(i as f32 * 5.0, 0.0));
    }
    let mut frame = ConstellationFrame::default();
    c.advance(&mut frame);
    let links = frame.links.len();
    assert_eq!(links, 45);
    let (ptr, cap) = (frame.links.as_ptr(), frame.links.capacity());

    for _ in 0..10 {
        c.advance(&mut frame);
        assert_eq!(frame.links.len(), links);
        assert_eq!(frame.links.capacity(), cap);
        assert_eq!(frame.links.as_ptr(), ptr);
    }

    // expired points leave nothing behind from the previous frame
    for _ in 0..CONSTELLATION_LIFE_FRAMES {
        c.advance(&mut frame);
    }
    assert!(frame.points.is_empty());
    assert!(frame.links.is_empty());
}

#[test]
fn cursor_frame_reuses_its_draw_list() {
    let mut state = CursorState::new(9);
    for i in 0..5 {
        state.constellation.spawn(Vec2::new(i as f32, i as f32));
    }
    state.frame();
    let ptr = state.draw_list().links.as_ptr();
    assert_eq!(state.draw_list().links.len(), 10);
    state.frame();
    assert_eq!(state.draw_list().links.as_ptr(), ptr);
}

#[test]
fn spawn_rate_tracks_probability() {
    let mut state = CursorState::new(42);
    let mut spawned = 0;
    for _ in 0..1000 {
        if state.on_move(Vec2::new(1.0, 1.0), HoverKind::None) {
            spawned += 1;
        }
        // free every slot so the pool is never the limiting factor
        let mut scratch = ConstellationFrame::default();
        for _ in 0..CONSTELLATION_LIFE_FRAMES {
            state.constellation.advance(&mut scratch);
        }
    }
    assert!((200..400).contains(&spawned), "spawned {spawned}");
}

#[test]
fn hovering_slows_the_trail() {
    let mut state = CursorState::new(1);
    state.on_move(Vec2::ZERO, HoverKind::Card);
    assert_eq!(state.trail_ease(), TRAIL_EASE_HOVER);
    state.on_move(Vec2::ZERO, HoverKind::None);
    assert_eq!(state.trail_ease(), TRAIL_EASE);
}

#[test]
fn hover_labels() {
    assert_eq!(HoverKind::Button.label("  Hire me "), Some("→ Hire me".to_string()));
    assert_eq!(HoverKind::None.label("x"), None);
    assert_eq!(HoverKind::Contact.cursor_class(), Some("button"));
    assert_eq!(HoverKind::Brand.cursor_class(), None);
}

#[test]
fn burst_spreads_hues_around_the_wheel() {
    let burst: Vec<_> = burst_particles(350.0).collect();
    assert_eq!(burst.len(), BURST_PARTICLES);
    assert_eq!(burst[0].0, 0.0);
    assert!((burst[1].1 - 20.0).abs() < 1e-4);
    assert!(burst.iter().all(|(_, h)| (0.0..360.0).contains(h)));
}

#[test]
fn velocity_ring_needs_speed() {
    let mut state = CursorState::new(3);
    state.on_move(Vec2::ZERO, HoverKind::None);
    state.on_move(Vec2::new(2.0, 0.0), HoverKind::None);
    assert!(!state.ring_on_click());
    state.on_move(Vec2::new(50.0, 0.0), HoverKind::None);
    assert!(state.ring_on_click());
}
