/// Behavioural tuning constants for the scroll loop, starfield and routing.
///
/// These are shared by the web frontend and the host-side tests, so they must
/// stay free of platform types.
// Deployment prefix every relative asset and route is resolved against
pub const BASE_PATH: &str = "/shota-portfolio/";

// Infinite scroll band
pub const SECTION_WIDTH: f64 = 4200.0; // width of one copy of the marker band
pub const BAND_COUNT: usize = 3; // before / primary / after
pub const DRAG_SENSITIVITY: f64 = 1.5; // scroll px per px of pointer travel
pub const EDGE_MARGIN: f64 = 100.0; // reconciliation window at either wrap edge
pub const NUDGE_STEP: f64 = 400.0; // chevron / arrow-key scroll amount
pub const NUDGE_SETTLE_MS: f64 = 350.0; // expected smooth-scroll duration

// Starfield layers: (percent of stars, parallax speed, min size px, max size px)
pub const STAR_LAYERS: [(usize, f64, f64, f64); 3] = [
    (50, 0.1, 0.5, 1.5), // far
    (30, 0.3, 1.0, 2.5), // mid
    (20, 0.5, 2.0, 3.5), // near
];
pub const STAR_OPACITY_MIN: f64 = 0.3;
pub const STAR_OPACITY_SPAN: f64 = 0.5;
pub const TWINKLE_SPEED_MIN_SEC: f64 = 2.0;
pub const TWINKLE_SPEED_SPAN_SEC: f64 = 3.0;
pub const TWINKLE_DELAY_MAX_SEC: f64 = 5.0;
pub const BRIGHT_STAR_SIZE: f64 = 2.0; // stars above this get the blue glow

// Shooting stars
pub const SHOOTING_STAR_FIRST_MS: f64 = 1000.0;
pub const SHOOTING_STAR_INTERVAL_MS: f64 = 3000.0;
pub const SHOOTING_STAR_REMOVAL_BUFFER_MS: f64 = 100.0;
pub const SHOOTING_STAR_DURATION_MIN_SEC: f64 = 0.8;
pub const SHOOTING_STAR_DURATION_SPAN_SEC: f64 = 1.0;
pub const SHOOTING_STAR_X_RANGE: (f64, f64) = (10.0, 90.0); // percent
pub const SHOOTING_STAR_Y_RANGE: (f64, f64) = (0.0, 40.0); // percent
pub const SHOOTING_STAR_ANGLE_RANGE: (f64, f64) = (15.0, 45.0); // degrees
