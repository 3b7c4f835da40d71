use super::routes::Route;
use super::scroll::Direction;

/// What a click on a scene node asks the app to do.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Navigate(Route),
    /// Open the detail modal for a band instance id.
    OpenProject(String),
    CloseModal,
    OpenMenu,
    CloseMenu,
    Nudge(Direction),
}

/// Click handler attached to an element. `sound` plays the button effect
/// before the action is applied.
#[derive(Clone, Debug, PartialEq)]
pub struct OnClick {
    pub action: Action,
    pub sound: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Namespace {
    #[default]
    Html,
    Svg,
}

/// Retained-mode description of a DOM subtree. Views build these as pure
/// functions of their state; the web layer turns them into elements.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub ns: Namespace,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub style: Vec<(&'static str, String)>,
    pub on_click: Option<OnClick>,
    pub children: Vec<Node>,
}

/// Start an HTML element.
#[inline]
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        ..Default::default()
    }
}

/// Start an SVG element.
#[inline]
pub fn svg(tag: &'static str) -> Element {
    Element {
        tag,
        ns: Namespace::Svg,
        ..Default::default()
    }
}

impl Element {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append one or more space-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn style(mut self, prop: &'static str, value: impl Into<String>) -> Self {
        self.style.push((prop, value.into()));
        self
    }

    /// Click with the button sound.
    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(OnClick {
            action,
            sound: true,
        });
        self
    }

    /// Click without sound.
    pub fn on_click_quiet(mut self, action: Action) -> Self {
        self.on_click = Some(OnClick {
            action,
            sound: false,
        });
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<N: Into<Node>>(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn class_string(&self) -> String {
        self.classes.join(" ")
    }

    /// Inline style in CSS declaration syntax.
    pub fn style_string(&self) -> String {
        self.style
            .iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search for the element with `id`, including `self`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find_by_id(id))
    }

    /// Every element in the subtree (pre-order) matching `pred`.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.collect(pred, &mut out);
        out
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if pred(self) {
            out.push(self);
        }
        for c in self.child_elements() {
            c.collect(pred, out);
        }
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of the subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for n in &self.children {
            match n {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => out.push_str(&e.text_content()),
            }
        }
        out
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}
