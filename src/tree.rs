//! Rendered component trees
//!
//! A component renders to a list of root [`Node`]s. Elements carry a tag name,
//! ordered attributes and children; text nodes carry raw text. The text content
//! of an element is the concatenation of every descendant text node in document
//! order, the same way the DOM computes `textContent`.

pub mod node;
pub mod snapshot;
pub mod traits;

pub use node::{Attribute, Element, Node, RenderedTree};
pub use snapshot::{snapshot_tree, NodeSnapshot};
pub use traits::{walk_nodes, Visitor};
