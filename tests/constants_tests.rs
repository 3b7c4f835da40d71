// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn star_layer_shares_cover_the_whole_field() {
    let total: usize = STAR_LAYERS.iter().map(|l| l.0).sum();
    assert_eq!(total, 100);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn nearer_layers_move_faster_and_are_larger() {
    for pair in STAR_LAYERS.windows(2) {
        let (far, near) = (pair[0], pair[1]);
        assert!(near.1 > far.1, "speed");
        assert!(near.2 >= far.2 && near.3 > far.3, "size");
    }
    for (_, _, min, max) in STAR_LAYERS {
        assert!(min < max);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_tuning_is_consistent() {
    assert_eq!(BAND_COUNT, 3);
    // the reconcile window must sit well inside one section
    assert!(EDGE_MARGIN > 0.0 && EDGE_MARGIN * 2.0 < SECTION_WIDTH);
    assert!(NUDGE_STEP < SECTION_WIDTH);
    assert!(DRAG_SENSITIVITY > 1.0);
    assert!(NUDGE_SETTLE_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shooting_stars_finish_before_the_next_spawn() {
    let longest_ms = (SHOOTING_STAR_DURATION_MIN_SEC + SHOOTING_STAR_DURATION_SPAN_SEC) * 1000.0
        + SHOOTING_STAR_REMOVAL_BUFFER_MS;
    assert!(longest_ms < SHOOTING_STAR_INTERVAL_MS);
    assert!(SHOOTING_STAR_FIRST_MS < SHOOTING_STAR_INTERVAL_MS);
    assert!(SHOOTING_STAR_X_RANGE.0 < SHOOTING_STAR_X_RANGE.1);
    assert!(SHOOTING_STAR_Y_RANGE.0 < SHOOTING_STAR_Y_RANGE.1);
    assert!(SHOOTING_STAR_ANGLE_RANGE.0 < SHOOTING_STAR_ANGLE_RANGE.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn media_and_page_settings() {
    assert!(BASE_PATH.starts_with('/') && BASE_PATH.ends_with('/'));
    assert!(!AMBIENT_TRACK.starts_with('/'));
    assert!(!CLICK_EFFECT.starts_with('/'));
    assert!(AMBIENT_VOLUME > 0.0 && AMBIENT_VOLUME <= 1.0);
    assert!(CLICK_VOLUME > 0.0 && CLICK_VOLUME <= 1.0);
    // the universe is the busiest sky
    assert!(UNIVERSE_STAR_COUNT > LANDING_STAR_COUNT);
    assert!(UNIVERSE_STAR_COUNT > WHO_STAR_COUNT);
    assert!(INSTRUCTIONS_VISIBLE_MS > 0.0);
}
