// Host-side tests for the ambient music autoplay gate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod session {
    include!("../src/core/session.rs");
}

use session::*;

#[test]
fn nothing_plays_before_a_gesture() {
    let gate = AmbientGate::new();
    assert_eq!(gate.state(), AmbientState::Locked);
    assert!(!gate.is_unlocked());
    assert_eq!(gate.plays_issued(), 0);
}

#[test]
fn first_gesture_issues_exactly_one_play() {
    let mut gate = AmbientGate::new();
    assert!(gate.on_gesture());
    assert_eq!(gate.state(), AmbientState::Starting);
    assert!(!gate.on_gesture());
    assert!(!gate.on_gesture());
    assert_eq!(gate.plays_issued(), 1);
    gate.play_settled(true);
    assert!(gate.is_playing());
}

#[test]
fn rejected_play_rearms_the_gate() {
    let mut gate = AmbientGate::new();
    // a touch press without activation: the platform rejects play()
    assert!(gate.on_gesture());
    gate.play_settled(false);
    assert_eq!(gate.state(), AmbientState::Locked);
    assert!(!gate.is_playing());

    // the following tap unlocks it
    assert!(gate.on_gesture());
    assert_eq!(gate.plays_issued(), 2);
    gate.play_settled(true);
    assert!(gate.is_playing());
    assert!(!gate.on_gesture());
    assert_eq!(gate.plays_issued(), 2);
}

#[test]
fn gestures_while_a_play_is_pending_are_ignored() {
    let mut gate = AmbientGate::new();
    assert!(gate.on_gesture());
    assert!(!gate.on_gesture());
    gate.play_settled(false);
    assert!(gate.on_gesture());
    assert_eq!(gate.plays_issued(), 2);
}

#[test]
fn teardown_stops_and_ignores_late_settles() {
    let mut gate = AmbientGate::new();
    gate.on_gesture();
    gate.teardown();
    gate.play_settled(true);
    assert_eq!(gate.state(), AmbientState::Stopped);
    assert!(!gate.is_playing());
    assert!(!gate.on_gesture());
}
