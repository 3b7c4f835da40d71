use crate::constants::{AMBIENT_TRACK, AMBIENT_VOLUME, CLICK_EFFECT, CLICK_VOLUME};
use crate::core::{resolve_asset_path, AmbientGate};
use crate::dom::{js_err, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// Document events that grant user activation, for mouse and touch alike.
// Presses (pointerdown, touchstart) do not on touch screens.
const UNLOCK_EVENTS: [&str; 3] = ["click", "pointerup", "touchend"];

/// Page-wide sound: a one-shot click effect and an ambient loop that starts on
/// the first user gesture. Created once by the app and passed to whoever
/// needs to play sounds.
pub struct AudioSession {
    ambient: web::HtmlAudioElement,
    click: web::HtmlAudioElement,
    gate: RefCell<AmbientGate>,
    unlock: RefCell<Vec<Listener>>,
}

fn load(path: &str, volume: f64) -> anyhow::Result<web::HtmlAudioElement> {
    let el = web::HtmlAudioElement::new_with_src(&resolve_asset_path(path)).map_err(js_err)?;
    el.set_volume(volume);
    el.set_preload("auto");
    Ok(el)
}

impl AudioSession {
    pub fn create(document: &web::Document) -> anyhow::Result<Rc<Self>> {
        let ambient = load(AMBIENT_TRACK, AMBIENT_VOLUME)?;
        ambient.set_loop(true);
        let click = load(CLICK_EFFECT, CLICK_VOLUME)?;
        let session = Rc::new(Self {
            ambient,
            click,
            gate: RefCell::new(AmbientGate::new()),
            unlock: RefCell::new(Vec::new()),
        });

        let mut listeners = Vec::with_capacity(UNLOCK_EVENTS.len());
        for kind in UNLOCK_EVENTS {
            let weak = Rc::downgrade(&session);
            listeners.push(Listener::new(document, kind, move |_ev| {
                if let Some(s) = weak.upgrade() {
                    s.on_gesture();
                }
            })?);
        }
        *session.unlock.borrow_mut() = listeners;
        log::info!("[audio] session created, ambient loop waiting for a gesture");
        Ok(session)
    }

    fn on_gesture(self: &Rc<Self>) {
        if !self.gate.borrow_mut().on_gesture() {
            return;
        }
        let session = self.clone();
        spawn_local(async move {
            let outcome = match session.ambient.play() {
                Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
                Err(e) => Err(e),
            };
            match &outcome {
                Ok(()) => log::info!("[audio] ambient loop started"),
                Err(e) => log::warn!("[audio] background music play failed: {:?}", e),
            }
            let playing = {
                let mut gate = session.gate.borrow_mut();
                gate.play_settled(outcome.is_ok());
                gate.is_playing()
            };
            // a rejected play leaves the listeners armed for the next gesture;
            // this runs after the firing listener returned, so detaching is safe
            if playing {
                session.unlock.borrow_mut().clear();
            }
        });
    }

    /// Play the button effect from the start. A call while it is still
    /// playing restarts it rather than overlapping.
    pub fn play_click(&self) {
        self.click.set_current_time(0.0);
        match self.click.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] button sound play failed: {:?}", e);
                }
            }),
            Err(e) => log::warn!("[audio] button sound play failed: {:?}", e),
        }
    }

    /// Stop and rewind both tracks and drop any pending unlock listeners.
    pub fn teardown(&self) {
        self.gate.borrow_mut().teardown();
        self.unlock.borrow_mut().clear();
        for el in [&self.ambient, &self.click] {
            _ = el.pause();
            el.set_current_time(0.0);
        }
        log::info!("[audio] session torn down ({:?})", self.gate.borrow().state());
    }
}
