/// Presentation constants for the web frontend: element ids, media assets and
/// per-page tuning. Behavioural constants live in `core::constants`.
// Mount point in index.html
pub const ROOT_ELEMENT_ID: &str = "root";

// Media
pub const AMBIENT_TRACK: &str = "assets/background-music.mp3";
pub const CLICK_EFFECT: &str = "assets/button-click.mp3";
pub const AMBIENT_VOLUME: f64 = 0.3;
pub const CLICK_VOLUME: f64 = 0.5;

// Starfield density per page
pub const LANDING_STAR_COUNT: usize = 250;
pub const UNIVERSE_STAR_COUNT: usize = 800;
pub const WHO_STAR_COUNT: usize = 150;

// Universe page
pub const INSTRUCTIONS_VISIBLE_MS: f64 = 5000.0;
pub const GRABBING_CLASS: &str = "grabbing";
pub const HIDDEN_CLASS: &str = "hidden";
