pub mod assets;
pub mod constants;
pub mod content;
pub mod keys;
pub mod projects;
pub mod routes;
pub mod scene;
pub mod schedule;
pub mod scroll;
pub mod session;
pub mod starfield;
pub mod views;

pub use assets::resolve_asset_path;
pub use projects::{band_instances, find_marker, PROJECTS};
pub use routes::Route;
pub use scene::{Action, Element, Namespace, Node, OnClick};
pub use schedule::TaskQueue;
pub use scroll::{Direction, ScrollWrap};
pub use session::AmbientGate;
pub use starfield::{ShootingStars, StarfieldCache};
