//! Tree traversal
//!
//! Implement [`Visitor`] to walk a rendered tree. Default implementations are
//! empty, so you only need to override the callbacks you care about.
//!
//! # Example
//!
//! ```ignore
//! struct TagCounter(usize);
//!
//! impl Visitor for TagCounter {
//!     fn enter_element(&mut self, _: &Element) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut counter = TagCounter(0);
//! tree.accept(&mut counter);
//! ```

use super::node::{Element, Node};

pub trait Visitor {
    fn enter_element(&mut self, _element: &Element) {}
    fn leave_element(&mut self, _element: &Element) {}
    fn visit_text(&mut self, _text: &str) {}
}

/// Visit every node in a slice, in order
pub fn walk_nodes(visitor: &mut dyn Visitor, nodes: &[Node]) {
    for node in nodes {
        node.accept(visitor);
    }
}
