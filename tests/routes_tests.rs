// Host-side tests for route matching and asset resolution.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod assets {
    include!("../src/core/assets.rs");
}
mod routes {
    include!("../src/core/routes.rs");
}

use assets::resolve_asset_path;
use routes::Route;

#[test]
fn matches_pages_under_the_base_path() {
    assert_eq!(Route::from_pathname("/shota-portfolio/"), Route::Landing);
    assert_eq!(Route::from_pathname("/shota-portfolio"), Route::Landing);
    assert_eq!(Route::from_pathname("/shota-portfolio/universe"), Route::Universe);
    assert_eq!(Route::from_pathname("/shota-portfolio/universe/"), Route::Universe);
    assert_eq!(Route::from_pathname("/shota-portfolio/who"), Route::Who);
}

#[test]
fn unknown_paths_are_not_found() {
    let r = Route::from_pathname("/shota-portfolio/nope");
    assert_eq!(r, Route::NotFound("/nope".to_string()));
    assert!(r.is_not_found());
    assert!(Route::from_pathname("/elsewhere").is_not_found());
    assert!(Route::from_pathname("/shota-portfolio-old/who").is_not_found());
}

#[test]
fn hrefs_round_trip_through_matching() {
    for r in [Route::Landing, Route::Universe, Route::Who] {
        assert_eq!(Route::from_pathname(&r.href()), r);
    }
    assert_eq!(Route::Landing.href(), "/shota-portfolio/");
    assert_eq!(Route::Who.href(), "/shota-portfolio/who");
}

#[test]
fn relative_assets_get_the_base_prefix() {
    assert_eq!(
        resolve_asset_path("assets/background-music.mp3"),
        "/shota-portfolio/assets/background-music.mp3"
    );
}

#[test]
fn absolute_assets_are_unchanged() {
    assert_eq!(resolve_asset_path("/favicon.ico"), "/favicon.ico");
    let once = resolve_asset_path("assets/a.png");
    assert_eq!(resolve_asset_path(&once), once);
}
