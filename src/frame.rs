use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running requestAnimationFrame loop. Dropping it cancels the pending
/// frame and frees the callback.
pub struct FrameLoop {
    tick: TickSlot,
    handle: Rc<Cell<Option<i32>>>,
}

/// Call `on_frame(now_ms)` once per animation frame until the returned
/// handle is dropped.
pub fn start_loop(mut on_frame: impl FnMut(f64) + 'static) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));
    // weak so the closure does not keep itself alive
    let tick_weak = Rc::downgrade(&tick);
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        on_frame(instant::now());
        if let Some(tick) = tick_weak.upgrade() {
            handle_tick.set(request_frame(&tick));
        }
    }) as Box<dyn FnMut()>));
    handle.set(request_frame(&tick));
    FrameLoop { tick, handle }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(w), Some(id)) = (web::window(), self.handle.get()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}
