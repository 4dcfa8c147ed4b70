//! Document printer.
//!
//! Elements open on their own line at their nesting depth. Text children
//! follow the opening tag directly; the closing tag goes on its own line:
//!
//! ```text
//! <!doctype html>
//! <html>
//!   <head>
//!     <style>
//!       .color-0{color:red}
//!     </style>
//!   </head>
//!   <body>
//!     <p class="color-0">Hello
//!     </p>
//!   </body>
//! </html>
//! ```

use html_escape::{encode_double_quoted_attribute, encode_style, encode_text};
use tracing::debug;

use crate::dom::{Dom, DomNode, Element, NodeId};
use crate::render::config::RenderConfig;
use crate::render::stylesheet::Stylesheet;

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// A full HTML document around one root element.
#[derive(Debug, Clone)]
pub struct Document {
    dom: Dom,
}

impl Document {
    pub fn new(root: impl Into<Element>) -> Self {
        Self {
            dom: Dom::from_element(&root.into()),
        }
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    /// The stylesheet the document would carry under `config`.
    pub fn stylesheet(&self, config: &RenderConfig) -> Stylesheet {
        Stylesheet::collect(&self.dom, config)
    }

    /// Print the document.
    pub fn render(&self, config: &RenderConfig) -> String {
        let stylesheet = config
            .emit_style_block
            .then(|| self.stylesheet(config));

        let mut out = Printer {
            dom: &self.dom,
            config,
            stylesheet: stylesheet.as_ref(),
            buf: String::new(),
        };
        out.document();

        debug!(
            nodes = self.dom.len(),
            bytes = out.buf.len(),
            "rendered document"
        );
        out.buf
    }
}

struct Printer<'a> {
    dom: &'a Dom,
    config: &'a RenderConfig,
    stylesheet: Option<&'a Stylesheet>,
    buf: String,
}

impl Printer<'_> {
    fn line(&mut self, depth: usize, text: &str) {
        if !self.buf.is_empty() {
            self.buf.push('\n');
        }
        self.buf.push_str(&self.config.indentation(depth));
        self.buf.push_str(text);
    }

    fn document(&mut self) {
        self.line(0, "<!doctype html>");
        self.line(0, "<html>");
        self.line(1, "<head>");
        if let Some(title) = &self.config.title {
            let title = format!("<title>{}</title>", encode_text(title));
            self.line(2, &title);
        }
        if let Some(stylesheet) = self.stylesheet.filter(|sheet| !sheet.is_empty()) {
            self.line(2, "<style>");
            // Rule text is caller-controlled; it must not close the element.
            for (depth, rule) in stylesheet.lines() {
                self.line(3 + depth, &encode_style(&rule));
            }
            self.line(2, "</style>");
        }
        self.line(1, "</head>");
        self.line(1, "<body>");
        if let Some(root) = self.dom.root() {
            self.node(root, 2);
        }
        self.line(1, "</body>");
        self.line(0, "</html>");
    }

    fn node(&mut self, id: NodeId, depth: usize) {
        let dom = self.dom;
        match dom.get(id) {
            Some(DomNode::Element(element)) => self.element(id, element, depth),
            Some(DomNode::Text(text)) => {
                self.line(depth, &encode_text(text));
            }
            None => {}
        }
    }

    fn element(&mut self, id: NodeId, element: &Element, depth: usize) {
        let open = self.open_tag(id, element);
        self.line(depth, &open);
        if VOID_ELEMENTS.contains(&element.tag()) {
            return;
        }

        // Leading text stays on the opening tag's line.
        let dom = self.dom;
        let mut rest = dom.children(id);
        while let Some((&first, tail)) = rest.split_first() {
            match dom.get(first) {
                Some(DomNode::Text(text)) => {
                    self.buf.push_str(&encode_text(text));
                    rest = tail;
                }
                _ => break,
            }
        }
        for &child in rest {
            self.node(child, depth + 1);
        }

        let close = format!("</{}>", element.tag());
        self.line(depth, &close);
    }

    fn open_tag(&self, id: NodeId, element: &Element) -> String {
        let mut tag = format!("<{}", element.tag());

        if let Some(element_id) = element.id() {
            push_attribute(&mut tag, "id", element_id);
        }

        let mut classes: Vec<&str> = element.classes().iter().map(String::as_str).collect();
        if let Some(stylesheet) = self.stylesheet {
            classes.extend(stylesheet.classes_for(id).iter().map(String::as_str));
        }
        if !classes.is_empty() {
            push_attribute(&mut tag, "class", &classes.join(" "));
        }

        if self.stylesheet.is_none() {
            if let Some(style) = element.inline_style_attribute() {
                push_attribute(&mut tag, "style", &style);
            }
        }

        for (name, value) in element.attributes() {
            push_attribute(&mut tag, name, value);
        }
        tag.push('>');
        tag
    }
}

fn push_attribute(tag: &mut String, name: &str, value: &str) {
    tag.push(' ');
    tag.push_str(name);
    if !value.is_empty() {
        tag.push_str("=\"");
        tag.push_str(&encode_double_quoted_attribute(value));
        tag.push('"');
    }
}
