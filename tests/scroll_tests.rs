// Host-side tests for the infinite scroll controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}

use constants::*;
use scroll::*;

const VIEWPORT: f64 = 1200.0;

fn mounted() -> ScrollWrap {
    let mut s = ScrollWrap::default();
    s.mount(VIEWPORT);
    s
}

/// Drive a native scroll to `raw` and return the resulting offset.
fn scroll_to(s: &mut ScrollWrap, raw: f64) -> f64 {
    let update = s.native_scroll(raw).expect("mounted");
    update.correction.unwrap_or(raw)
}

#[test]
fn mount_starts_at_middle_band() {
    let mut s = ScrollWrap::default();
    assert_eq!(s.mount(VIEWPORT), SECTION_WIDTH);
    assert_eq!(s.offset(), 4200.0);
    assert_eq!(s.band_width(), 12600.0);
    assert_eq!(s.phase(), ScrollPhase::Idle);
}

#[test]
fn unmounted_controller_ignores_everything() {
    let mut s = ScrollWrap::default();
    s.pointer_down(10.0);
    assert_eq!(s.pointer_move(300.0), None);
    assert_eq!(s.pointer_up(), None);
    assert_eq!(s.native_scroll(9000.0), None);
    assert_eq!(s.nudge(Direction::Right), None);
    assert_eq!(s.settle(), None);
    assert!(!s.is_dragging());

    let mut s = mounted();
    s.unmount();
    assert_eq!(s.native_scroll(50.0), None);
    assert!(!s.is_mounted());
}

#[test]
fn drag_moves_opposite_to_pointer_with_sensitivity() {
    let mut s = mounted();
    s.pointer_down(500.0);
    assert!(s.is_dragging());
    // pointer 100px left -> content 150px right
    assert_eq!(s.pointer_move(400.0), Some(4350.0));
    // pointer 100px right of origin -> 150px back past the start
    assert_eq!(s.pointer_move(600.0), Some(4050.0));
}

#[test]
fn move_without_press_is_ignored() {
    let mut s = mounted();
    assert_eq!(s.pointer_move(100.0), None);
    assert_eq!(s.offset(), SECTION_WIDTH);
}

#[test]
fn drag_past_upper_edge_wraps_without_jump() {
    let mut s = mounted();
    s.pointer_down(3000.0);
    // needs 4200px of travel: 2800 pointer px
    let before = s.pointer_move(3000.0 - 2790.0).unwrap();
    assert!((before - 8385.0).abs() < 1e-9);
    let wrapped = s.pointer_move(3000.0 - 2810.0).unwrap();
    assert!((wrapped - 4215.0).abs() < 1e-9, "wrapped to {}", wrapped);
    // baseline moved by the same shift
    assert_eq!(s.baseline(), 0.0);
    // continuing the same gesture keeps moving smoothly from the new position
    let next = s.pointer_move(3000.0 - 2820.0).unwrap();
    assert!((next - wrapped - 15.0).abs() < 1e-9);
}

#[test]
fn drag_past_lower_edge_wraps_without_jump() {
    let mut s = mounted();
    s.pointer_down(0.0);
    let wrapped = s.pointer_move(2800.0).unwrap();
    assert_eq!(wrapped, SECTION_WIDTH);
    let next = s.pointer_move(2810.0).unwrap();
    assert!((next - (wrapped - 15.0)).abs() < 1e-9);
}

#[test]
fn lower_wrap_keeps_the_overshoot() {
    let mut s = mounted();
    s.pointer_down(0.0);
    let before = s.pointer_move(2780.0).unwrap();
    assert!((before - 30.0).abs() < 1e-9);
    // crosses 0 by 30px in one move
    let wrapped = s.pointer_move(2820.0).unwrap();
    assert!((wrapped - 4170.0).abs() < 1e-9, "wrapped to {}", wrapped);
    assert_eq!(s.baseline(), 2.0 * SECTION_WIDTH);
    let next = s.pointer_move(2821.0).unwrap();
    assert!((next - (wrapped - 1.5)).abs() < 1e-9);
}

#[test]
fn long_drag_moves_smoothly_across_many_wraps() {
    let mut s = mounted();
    s.pointer_down(0.0);
    let mut prev = s.offset();
    let mut x = 0.0;
    for step in [7.0, -13.0, 29.0, 41.0, -3.0, 17.0] {
        for _ in 0..400 {
            x += step;
            let off = s.pointer_move(x).unwrap();
            assert!(off > 0.0 && off < 2.0 * SECTION_WIDTH, "offset {}", off);
            // modulo one section the content moved exactly by the scaled step
            let moved = (prev - off - step * DRAG_SENSITIVITY).rem_euclid(SECTION_WIDTH);
            assert!(moved < 1e-6 || SECTION_WIDTH - moved < 1e-6, "jump {}", moved);
            prev = off;
        }
    }
}

#[test]
fn drag_offset_stays_within_physical_range() {
    let mut s = mounted();
    s.pointer_down(0.0);
    for x in [-20000.0, -5000.0, 0.0, 5000.0, 20000.0] {
        let off = s.pointer_move(x).unwrap();
        assert!(off > 0.0 && off < 2.0 * SECTION_WIDTH, "offset {}", off);
    }
}

#[test]
fn native_scroll_wraps_at_edges() {
    let mut s = mounted();
    let update = s.native_scroll(8400.0).unwrap();
    assert_eq!(update.parallax, 8400.0);
    assert_eq!(update.correction, Some(4200.0));

    let update = s.native_scroll(0.0).unwrap();
    assert_eq!(update.correction, Some(4200.0));

    let update = s.native_scroll(5000.0).unwrap();
    assert_eq!(update.correction, None);
    assert_eq!(s.offset(), 5000.0);
}

#[test]
fn native_scroll_never_corrects_during_drag() {
    let mut s = mounted();
    s.pointer_down(100.0);
    let update = s.native_scroll(8500.0).unwrap();
    assert_eq!(update.correction, None);
    assert_eq!(update.parallax, 8500.0);
    assert_eq!(s.parallax_offset(), 8500.0);
}

#[test]
fn release_near_upper_edge_reconciles_into_middle_band() {
    let mut s = mounted();
    scroll_to(&mut s, 8350.0);
    assert_eq!(s.pointer_up(), Some(4150.0));
    assert_eq!(s.offset(), 4150.0);
    assert_eq!(s.phase(), ScrollPhase::Idle);
}

#[test]
fn release_near_lower_edge_reconciles_into_middle_band() {
    let mut s = mounted();
    scroll_to(&mut s, 50.0);
    assert_eq!(s.pointer_up(), Some(8350.0));
    assert_eq!(s.offset(), 8350.0);
}

#[test]
fn release_in_the_middle_leaves_offset_alone() {
    let mut s = mounted();
    s.pointer_down(0.0);
    s.pointer_move(-200.0);
    assert_eq!(s.pointer_up(), None);
    assert_eq!(s.offset(), 4500.0);
    assert!(!s.is_dragging());
}

#[test]
fn nudge_steps_and_settles() {
    let mut s = mounted();
    assert_eq!(s.nudge(Direction::Right), Some(NUDGE_STEP));
    assert_eq!(s.phase(), ScrollPhase::Settling);
    assert_eq!(s.nudge(Direction::Left), Some(-400.0));

    scroll_to(&mut s, 8320.0);
    assert_eq!(s.settle(), Some(4120.0));
    assert_eq!(s.phase(), ScrollPhase::Idle);
}

#[test]
fn nudge_is_ignored_while_dragging() {
    let mut s = mounted();
    s.pointer_down(0.0);
    assert_eq!(s.nudge(Direction::Right), None);
    assert_eq!(s.settle(), None);
    assert!(s.is_dragging());
}

#[test]
fn resting_offset_is_always_inside_the_loop() {
    let mut s = mounted();
    for raw in [0.0, 10.0, 99.0, 100.0, 4000.0, 8299.0, 8300.0, 8399.0, 8400.0, 9000.0] {
        scroll_to(&mut s, raw);
        // a reconciling write fires one more scroll event
        if let Some(jump) = s.settle() {
            scroll_to(&mut s, jump);
        }
        let rest = s.offset();
        assert!(rest > 0.0 && rest < 2.0 * SECTION_WIDTH, "{} -> {}", raw, rest);
    }
}

#[test]
fn viewport_width_bounds_the_drag() {
    let mut s = ScrollWrap::new(1000.0);
    s.mount(2500.0);
    s.pointer_down(0.0);
    // band 3000, viewport 2500: max physical offset 500, which is below 2 * sw
    assert_eq!(s.pointer_move(-10000.0), Some(500.0));
    // the same position is no longer clipped once the viewport shrinks
    s.set_viewport_width(0.0);
    assert_eq!(s.pointer_move(-10000.0), Some(1000.0));
}
