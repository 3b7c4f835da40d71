#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod starfield;
mod universe;

thread_local! {
    // keeps the app (and every listener it owns) alive for the page lifetime
    static APP: RefCell<Option<Rc<RefCell<app::App>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("star-chart starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let app = app::App::create(&document, constants::ROOT_ELEMENT_ID)?;
    app.borrow_mut().mount(app::current_route())?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}
