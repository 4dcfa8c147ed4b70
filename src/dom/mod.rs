//! Output tree: the immutable element builder and its slotmap arena form.

pub mod node;
pub mod tree;

pub use node::{elements, DomNode, Element, Node, NodeId};
pub use tree::Dom;
