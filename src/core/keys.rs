use super::scene::Action;
use super::scroll::Direction;

/// Which overlays are open when a key arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyContext {
    pub on_universe: bool,
    pub modal_open: bool,
    pub menu_open: bool,
}

/// Map a `KeyboardEvent.key` to an app action.
pub fn action_for_key(key: &str, ctx: KeyContext) -> Option<Action> {
    match key {
        "Escape" if ctx.modal_open => Some(Action::CloseModal),
        "Escape" if ctx.menu_open => Some(Action::CloseMenu),
        // arrows only scroll while nothing covers the viewport
        "ArrowLeft" if ctx.on_universe && !ctx.modal_open && !ctx.menu_open => {
            Some(Action::Nudge(Direction::Left))
        }
        "ArrowRight" if ctx.on_universe && !ctx.modal_open && !ctx.menu_open => {
            Some(Action::Nudge(Direction::Right))
        }
        _ => None,
    }
}
