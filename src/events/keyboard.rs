use crate::core::keys::{action_for_key, KeyContext};
use crate::core::OnClick;
use crate::dom::{Dispatch, Listener};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Route global keydowns through the same dispatch as clicks. `context`
/// reports which page and overlays are live; `None` means nothing is mounted.
pub fn wire_global_keydown(
    target: &web::EventTarget,
    context: impl Fn() -> Option<KeyContext> + 'static,
    dispatch: Dispatch,
) -> anyhow::Result<Listener> {
    Listener::new(target, "keydown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        let Some(ctx) = context() else {
            return;
        };
        if let Some(action) = action_for_key(&ev.key(), ctx) {
            ev.prevent_default();
            log::debug!("[keys] {} -> {:?}", ev.key(), action);
            dispatch(OnClick {
                action,
                sound: false,
            });
        }
    })
}
