use crate::core::{Namespace, Node, OnClick};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Receives the click handlers of rendered scene nodes.
pub type Dispatch = Rc<dyn Fn(OnClick)>;

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// An event listener that detaches itself (and frees its closure) on drop.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Build DOM for a scene node. Click listeners are pushed into `listeners`
/// and live exactly as long as the caller keeps them.
pub fn render(
    document: &web::Document,
    node: &Node,
    dispatch: &Dispatch,
    listeners: &mut Vec<Listener>,
) -> anyhow::Result<web::Node> {
    let spec = match node {
        Node::Text(t) => return Ok(document.create_text_node(t).into()),
        Node::Element(e) => e,
    };
    let el = match spec.ns {
        Namespace::Html => document.create_element(spec.tag),
        Namespace::Svg => document.create_element_ns(Some(SVG_NS), spec.tag),
    }
    .map_err(js_err)?;
    if let Some(id) = &spec.id {
        el.set_id(id);
    }
    if !spec.classes.is_empty() {
        el.set_attribute("class", &spec.class_string()).map_err(js_err)?;
    }
    for (name, value) in &spec.attrs {
        el.set_attribute(name, value).map_err(js_err)?;
    }
    if !spec.style.is_empty() {
        el.set_attribute("style", &spec.style_string()).map_err(js_err)?;
    }
    if let Some(on_click) = &spec.on_click {
        let on_click = on_click.clone();
        let dispatch = dispatch.clone();
        // internal links are routed in-app instead of reloading the page
        let is_link = spec.tag == "a";
        listeners.push(Listener::new(&el, "click", move |ev| {
            if is_link {
                ev.prevent_default();
            }
            dispatch(on_click.clone());
        })?);
    }
    for child in &spec.children {
        let c = render(document, child, dispatch, listeners)?;
        el.append_child(&c).map_err(js_err)?;
    }
    Ok(el.into())
}

/// Replace the children of `host` with the rendered `node`.
pub fn mount_into(
    document: &web::Document,
    host: &web::Element,
    node: &Node,
    dispatch: &Dispatch,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::new();
    let rendered = render(document, node, dispatch, &mut listeners)?;
    host.set_inner_html("");
    host.append_child(&rendered).map_err(js_err)?;
    Ok(listeners)
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    element_by_id(document, id)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}
