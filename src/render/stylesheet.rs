//! Class generation and `@media` grouping.
//!
//! Every distinct declaration (property, value, media, selector, pseudo) in a
//! document gets a class, `<property>-<n>`, where `n` counts classes in
//! first-use order. Elements carrying the same declaration share its class,
//! unless sharing would print it before an earlier call on the same element
//! for the same property and scope; that element gets a fresh rule so its
//! last call still wins the cascade. Nothing is merged across properties.
//!
//! Printed form: unconditional rules first, in first-use order, then one
//! block per distinct media condition in first-seen order:
//!
//! ```text
//! .color-0{color:blue}
//! @media (prefers-color-scheme: dark){
//!   .color-1{color:red}
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use slotmap::SecondaryMap;
use tracing::debug;

use crate::css::media::Media;
use crate::css::model::{InlineStyle, Pseudo, Selector};
use crate::dom::{Dom, NodeId};
use crate::render::config::RenderConfig;

type Context<'a> = (
    &'a str,
    &'a Option<Media>,
    &'a Option<Selector>,
    &'a Option<Pseudo>,
);

/// One generated class rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub class: String,
    pub declaration: String,
    pub media: Option<Media>,
    pub selector: Option<Selector>,
    pub pseudo: Option<Pseudo>,
}

impl Rule {
    /// `[<selector> ].<class>[<pseudo>]`
    pub fn selector_text(&self) -> String {
        let mut text = String::new();
        if let Some(selector) = &self.selector {
            text.push_str(selector.as_str());
            text.push(' ');
        }
        text.push('.');
        text.push_str(&self.class);
        if let Some(pseudo) = &self.pseudo {
            text.push_str(pseudo.as_str());
        }
        text
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{{}}}", self.selector_text(), self.declaration)
    }
}

/// The rules of one document plus the classes each element carries.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    rules: Vec<Rule>,
    classes: SecondaryMap<NodeId, Vec<String>>,
    indent: usize,
}

impl Stylesheet {
    /// Walk `dom` in document order and assign a class to every declaration.
    pub fn collect(dom: &Dom, config: &RenderConfig) -> Self {
        let mut rules = Vec::new();
        let mut classes: SecondaryMap<NodeId, Vec<String>> = SecondaryMap::new();
        let mut seen: HashMap<&InlineStyle, usize> = HashMap::new();

        for id in dom.document_order() {
            let Some(element) = dom.element(id) else {
                continue;
            };
            let mut element_classes = Vec::with_capacity(element.styles().len());
            // Highest rule index used so far per property and scope.
            let mut floors: HashMap<Context<'_>, usize> = HashMap::new();
            for style in element.styles() {
                let context = (
                    style.property.as_str(),
                    &style.media,
                    &style.selector,
                    &style.pseudo,
                );
                let floor = floors.get(&context).copied();
                let shared = seen
                    .get(style)
                    .copied()
                    .filter(|&index| floor.is_none_or(|floor| index > floor));
                let index = match shared {
                    Some(index) => index,
                    None => {
                        let index = rules.len();
                        rules.push(Rule {
                            class: format!("{}{}-{index}", config.class_prefix, style.property),
                            declaration: style.declaration(),
                            media: style.media.clone(),
                            selector: style.selector.clone(),
                            pseudo: style.pseudo.clone(),
                        });
                        seen.insert(style, index);
                        index
                    }
                };
                floors.insert(context, index);
                let class = &rules[index].class;
                if !element_classes.contains(class) {
                    element_classes.push(class.clone());
                }
            }
            if !element_classes.is_empty() {
                classes.insert(id, element_classes);
            }
        }

        debug!(
            rules = rules.len(),
            elements = classes.len(),
            "collected stylesheet"
        );

        Self {
            rules,
            classes,
            indent: config.indent,
        }
    }

    /// All rules in first-use order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Generated classes for the element at `id`, in declaration order.
    pub fn classes_for(&self, id: NodeId) -> &[String] {
        self.classes.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The printed stylesheet as `(depth, line)` pairs, depth relative to
    /// the enclosing block.
    pub fn lines(&self) -> Vec<(usize, String)> {
        let mut lines: Vec<(usize, String)> = self
            .rules
            .iter()
            .filter(|rule| rule.media.is_none())
            .map(|rule| (0, rule.to_string()))
            .collect();

        let mut blocks: Vec<(&Media, Vec<&Rule>)> = Vec::new();
        for rule in &self.rules {
            let Some(media) = &rule.media else {
                continue;
            };
            match blocks.iter_mut().find(|(existing, _)| *existing == media) {
                Some((_, members)) => members.push(rule),
                None => blocks.push((media, vec![rule])),
            }
        }

        for (media, members) in blocks {
            lines.push((0, format!("@media {media}{{")));
            lines.extend(members.into_iter().map(|rule| (1, rule.to_string())));
            lines.push((0, "}".to_owned()));
        }
        lines
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.lines();
        for (i, (depth, line)) in lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{:width$}{line}", "", width = depth * self.indent)?;
        }
        Ok(())
    }
}
