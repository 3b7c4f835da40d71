use crate::dom::Listener;
use crate::universe::UniverseState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

type Shared = Rc<RefCell<UniverseState>>;

/// Pointer x relative to the viewport's left edge.
#[inline]
fn viewport_x(page_x: i32, viewport: &web::HtmlElement) -> f64 {
    (page_x - viewport.offset_left()) as f64
}

fn mouse_x(ev: &web::Event, viewport: &web::HtmlElement) -> Option<f64> {
    let ev = ev.dyn_ref::<web::MouseEvent>()?;
    Some(viewport_x(ev.page_x(), viewport))
}

fn touch_x(ev: &web::Event, viewport: &web::HtmlElement) -> Option<f64> {
    let ev = ev.dyn_ref::<web::TouchEvent>()?;
    let touch = ev.touches().get(0)?;
    Some(viewport_x(touch.page_x(), viewport))
}

fn press(state: &Shared, x: f64) {
    let mut st = state.borrow_mut();
    st.scroll.pointer_down(x);
    st.set_grabbing(true);
}

fn drag(state: &Shared, x: f64) -> bool {
    let mut st = state.borrow_mut();
    match st.scroll.pointer_move(x) {
        Some(offset) => {
            st.write_scroll_left(offset);
            true
        }
        None => false,
    }
}

fn release(state: &Shared) {
    let mut st = state.borrow_mut();
    if let Some(offset) = st.scroll.pointer_up() {
        st.write_scroll_left(offset);
    }
    st.set_grabbing(false);
}

fn native_scroll(state: &Shared) {
    let mut st = state.borrow_mut();
    let raw = st.read_scroll_left();
    if let Some(update) = st.scroll.native_scroll(raw) {
        st.sky.borrow().set_parallax(update.parallax);
        if let Some(offset) = update.correction {
            st.write_scroll_left(offset);
        }
    }
}

/// Attach the drag, touch, scroll and resize handlers of the universe viewport. The
/// returned listeners detach when dropped with the page.
pub fn wire_viewport(state: &Shared) -> anyhow::Result<Vec<Listener>> {
    let viewport = state.borrow().viewport.clone();
    let mut out = Vec::with_capacity(9);

    let (s, v) = (state.clone(), viewport.clone());
    out.push(Listener::new(&viewport, "mousedown", move |ev| {
        if let Some(x) = mouse_x(&ev, &v) {
            press(&s, x);
        }
    })?);

    let (s, v) = (state.clone(), viewport.clone());
    out.push(Listener::new(&viewport, "mousemove", move |ev| {
        if let Some(x) = mouse_x(&ev, &v) {
            if drag(&s, x) {
                ev.prevent_default();
            }
        }
    })?);

    for kind in ["mouseup", "mouseleave", "touchend"] {
        let s = state.clone();
        out.push(Listener::new(&viewport, kind, move |_ev| release(&s))?);
    }

    let (s, v) = (state.clone(), viewport.clone());
    out.push(Listener::new(&viewport, "touchstart", move |ev| {
        if let Some(x) = touch_x(&ev, &v) {
            press(&s, x);
        }
    })?);

    let (s, v) = (state.clone(), viewport.clone());
    out.push(Listener::new(&viewport, "touchmove", move |ev| {
        if let Some(x) = touch_x(&ev, &v) {
            drag(&s, x);
        }
    })?);

    let s = state.clone();
    out.push(Listener::new(&viewport, "scroll", move |_ev| native_scroll(&s))?);

    // drag clamping depends on the visible width
    if let Some(window) = web::window() {
        let s = state.clone();
        out.push(Listener::new(&window, "resize", move |_ev| {
            let mut st = s.borrow_mut();
            let width = st.viewport.client_width() as f64;
            st.scroll.set_viewport_width(width);
        })?);
    }

    Ok(out)
}
