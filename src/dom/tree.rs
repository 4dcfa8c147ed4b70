//! Arena form of an element tree, as read by the stylesheet pass and printer.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{DomNode, Element, Node, NodeId};

/// An element tree flattened into a slotmap arena.
///
/// Each element is stored without its children; child order lives in a
/// secondary map. Per-node render data (generated classes) is keyed by the
/// same [`NodeId`]s.
#[derive(Debug, Clone, Default)]
pub struct Dom {
    nodes: SlotMap<NodeId, DomNode>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    root: Option<NodeId>,
}

impl Dom {
    /// Lower `element` and its descendants. `element` becomes the root.
    pub fn from_element(element: &Element) -> Self {
        let mut dom = Dom::default();
        let root = dom.push(None, DomNode::Element(element.shallow()));
        dom.root = Some(root);
        dom.lower(root, element);
        dom
    }

    fn push(&mut self, parent: Option<NodeId>, node: DomNode) -> NodeId {
        let id = self.nodes.insert(node);
        self.children.insert(id, Vec::new());
        if let Some(siblings) = parent.and_then(|parent| self.children.get_mut(parent)) {
            siblings.push(id);
        }
        id
    }

    fn lower(&mut self, parent: NodeId, element: &Element) {
        for child in element.children() {
            match child {
                Node::Element(child) => {
                    let id = self.push(Some(parent), DomNode::Element(child.shallow()));
                    self.lower(id, child);
                }
                Node::Text(text) => {
                    self.push(Some(parent), DomNode::Text(text.clone()));
                }
            }
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&DomNode> {
        self.nodes.get(id)
    }

    /// The element at `id`; `None` for text nodes and unknown ids.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id).and_then(DomNode::as_element)
    }

    /// Child ids in source order. Empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node, parents before children and siblings in source order.
    /// Class numbering follows this order.
    pub fn document_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut pending: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = pending.pop() {
            order.push(id);
            pending.extend(self.children(id).iter().rev());
        }
        order
    }
}
