use crate::constants::HIDDEN_CLASS;
use crate::core::Element;
use crate::dom::{self, Dispatch, Listener};
use web_sys as web;

/// A host element that shows one rendered scene at a time (project modal,
/// menu). Hiding empties the host and detaches its click handlers.
pub struct Overlay {
    host: web::Element,
    listeners: Vec<Listener>,
    open: bool,
}

impl Overlay {
    pub fn attach(document: &web::Document, host_id: &str) -> anyhow::Result<Self> {
        let host = dom::element_by_id(document, host_id)?;
        _ = host.class_list().add_1(HIDDEN_CLASS);
        Ok(Self {
            host,
            listeners: Vec::new(),
            open: false,
        })
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(
        &mut self,
        document: &web::Document,
        scene: Element,
        dispatch: &Dispatch,
    ) -> anyhow::Result<()> {
        self.listeners = dom::mount_into(document, &self.host, &scene.into(), dispatch)?;
        _ = self.host.class_list().remove_1(HIDDEN_CLASS);
        self.open = true;
        Ok(())
    }

    pub fn hide(&mut self) {
        self.listeners.clear();
        self.host.set_inner_html("");
        _ = self.host.class_list().add_1(HIDDEN_CLASS);
        self.open = false;
    }
}

/// Hide a single element by id (used for the timed instructions banner).
pub fn hide_element(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}
