use crate::constants::{GRABBING_CLASS, INSTRUCTIONS_VISIBLE_MS};
use crate::core::constants::NUDGE_SETTLE_MS;
use crate::core::{views, Direction, ScrollWrap, TaskQueue};
use crate::dom::{self, Listener};
use crate::events;
use crate::overlay;
use crate::starfield::StarfieldView;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniverseTask {
    /// Edge reconciliation after a programmatic smooth scroll.
    Settle,
    HideInstructions,
}

/// Everything the viewport handlers and the frame loop share.
pub struct UniverseState {
    pub document: web::Document,
    pub viewport: web::HtmlElement,
    pub scroll: ScrollWrap,
    pub sky: Rc<RefCell<StarfieldView>>,
    pub timeline: TaskQueue<UniverseTask>,
}

impl UniverseState {
    pub fn read_scroll_left(&self) -> f64 {
        js_sys::Reflect::get(&self.viewport, &JsValue::from_str("scrollLeft"))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    pub fn write_scroll_left(&self, offset: f64) {
        _ = js_sys::Reflect::set(
            &self.viewport,
            &JsValue::from_str("scrollLeft"),
            &JsValue::from_f64(offset),
        );
    }

    /// Smooth relative scroll (`scrollBy({ left, behavior: "smooth" })`).
    pub fn scroll_by_smooth(&self, dx: f64) {
        let opts = js_sys::Object::new();
        _ = js_sys::Reflect::set(&opts, &"left".into(), &JsValue::from_f64(dx));
        _ = js_sys::Reflect::set(&opts, &"behavior".into(), &"smooth".into());
        let scroll_by = js_sys::Reflect::get(&self.viewport, &"scrollBy".into())
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        match scroll_by {
            Some(f) => {
                if let Err(e) = f.call1(&self.viewport, &opts) {
                    log::warn!("[scroll] scrollBy failed: {:?}", e);
                }
            }
            None => self.write_scroll_left(self.read_scroll_left() + dx),
        }
    }

    pub fn set_grabbing(&self, grabbing: bool) {
        let cl = self.viewport.class_list();
        _ = if grabbing {
            cl.add_1(GRABBING_CLASS)
        } else {
            cl.remove_1(GRABBING_CLASS)
        };
    }
}

/// The mounted universe page: owns the scroll loop and the viewport handlers.
pub struct UniverseView {
    state: Rc<RefCell<UniverseState>>,
    _listeners: Vec<Listener>,
}

impl UniverseView {
    pub fn attach(
        document: &web::Document,
        sky: Rc<RefCell<StarfieldView>>,
        now_ms: f64,
    ) -> anyhow::Result<Self> {
        let viewport = dom::html_element_by_id(document, views::VIEWPORT_ID)?;
        let mut scroll = ScrollWrap::default();
        let start = scroll.mount(viewport.client_width() as f64);
        let mut timeline = TaskQueue::new();
        timeline.schedule(now_ms + INSTRUCTIONS_VISIBLE_MS, UniverseTask::HideInstructions);

        let state = Rc::new(RefCell::new(UniverseState {
            document: document.clone(),
            viewport,
            scroll,
            sky,
            timeline,
        }));
        state.borrow().write_scroll_left(start);
        let listeners = events::wire_viewport(&state)?;
        log::info!("[scroll] universe mounted at offset {}", start);
        Ok(Self {
            state,
            _listeners: listeners,
        })
    }

    pub fn nudge(&self, direction: Direction, now_ms: f64) {
        let mut st = self.state.borrow_mut();
        if let Some(step) = st.scroll.nudge(direction) {
            st.scroll_by_smooth(step);
            st.timeline.schedule(now_ms + NUDGE_SETTLE_MS, UniverseTask::Settle);
        }
    }

    /// Run timed work that has come due.
    pub fn tick(&self, now_ms: f64) {
        let mut st = self.state.borrow_mut();
        while let Some((_, task)) = st.timeline.pop_due(now_ms) {
            match task {
                UniverseTask::Settle => {
                    if let Some(offset) = st.scroll.settle() {
                        st.write_scroll_left(offset);
                    }
                }
                UniverseTask::HideInstructions => {
                    overlay::hide_element(&st.document, views::INSTRUCTIONS_ID);
                }
            }
        }
    }
}

impl Drop for UniverseView {
    fn drop(&mut self) {
        let mut st = self.state.borrow_mut();
        st.timeline.clear();
        st.scroll.unmount();
    }
}
