//! Node types: Element, Node, NodeId, DomNode.
//!
//! The builder tree is a plain value. Every builder method takes `self` and
//! returns the extended element, so a chain of calls threads one owned tree
//! forward and nothing is shared or mutated behind a reference.

use slotmap::new_key_type;

use crate::css::model::{InlineStyle, Scope};

new_key_type! {
    /// Unique identifier for a node in a [`Dom`](super::Dom) arena.
    pub struct NodeId;
}

/// Data stored per arena slot. Elements are stored without their children;
/// the arena keeps structure in its own maps.
#[derive(Debug, Clone, PartialEq)]
pub enum DomNode {
    Element(Element),
    Text(String),
}

impl DomNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            DomNode::Element(element) => Some(element),
            DomNode::Text(_) => None,
        }
    }
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_owned())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An HTML element with its attributes, declarations, and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    styles: Vec<InlineStyle>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag name and nothing else.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the `id` attribute (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single CSS class (builder). Duplicates are ignored.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add multiple CSS classes (builder).
    pub fn with_classes(self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        classes
            .into_iter()
            .fold(self, |element, class| element.with_class(class))
    }

    /// Set an attribute (builder). Setting the same name again replaces the value
    /// in place, keeping the original attribute order.
    ///
    /// `id`, `class` and `style` are routed to [`with_id`](Self::with_id),
    /// [`with_classes`](Self::with_classes) and unscoped declarations, so the
    /// printer writes each of them once.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if name.eq_ignore_ascii_case("id") {
            return self.with_id(value);
        }
        if name.eq_ignore_ascii_case("class") {
            return self.with_classes(value.split_whitespace());
        }
        if name.eq_ignore_ascii_case("style") {
            return value
                .split(';')
                .filter_map(|declaration| declaration.split_once(':'))
                .map(|(property, value)| (property.trim(), value.trim()))
                .filter(|(property, value)| !property.is_empty() && !value.is_empty())
                .fold(self, |element, (property, value)| {
                    element.inline_style(property, Some(value), &Scope::new())
                });
        }
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Append a child node (builder).
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes (builder).
    pub fn children_from(mut self, children: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child (builder).
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Append one declaration scoped by `scope`. A `None` value leaves the
    /// element unchanged.
    pub fn inline_style(
        mut self,
        property: impl Into<String>,
        value: Option<impl Into<String>>,
        scope: &Scope,
    ) -> Self {
        if let Some(value) = value {
            self.styles.push(InlineStyle::new(property, value, scope));
        }
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Declarations in the order they were added.
    pub fn styles(&self) -> &[InlineStyle] {
        &self.styles
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// A copy of this element with no children.
    pub fn shallow(&self) -> Element {
        Element {
            tag: self.tag.clone(),
            id: self.id.clone(),
            classes: self.classes.clone(),
            attributes: self.attributes.clone(),
            styles: self.styles.clone(),
            children: Vec::new(),
        }
    }

    /// The unscoped declarations as a `style` attribute value,
    /// e.g. `color:#cc3333;background-color:white`.
    ///
    /// Declarations with a media condition, selector, or pseudo cannot be
    /// expressed inline and are skipped; they are only rendered through the
    /// document stylesheet.
    pub fn inline_style_attribute(&self) -> Option<String> {
        let declarations: Vec<String> = self
            .styles
            .iter()
            .filter(|style| style.is_inlinable())
            .map(InlineStyle::declaration)
            .collect();
        if declarations.is_empty() {
            None
        } else {
            Some(declarations.join(";"))
        }
    }
}

macro_rules! element_shortcuts {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("A new `<", stringify!($name), ">` element.")]
            pub fn $name() -> Element {
                Element::new(stringify!($name))
            }
        )*
    };
}

/// Constructors for common elements.
pub mod elements {
    use super::Element;

    element_shortcuts!(
        a, article, aside, body, button, circle, div, footer, h1, h2, h3, header, img, input,
        label, li, main, nav, ol, p, path, rect, section, span, stop, svg, table, td, th, tr, ul,
    );
}
