//! Tree snapshot - a normalized, serializable form of a rendered tree
//!
//! Formatters consume the snapshot instead of re-implementing traversal, and
//! the json formatter serializes it directly.

use super::node::{Element, RenderedTree};
use super::traits::Visitor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of one node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// "Element" or "Text"
    pub node_type: String,

    /// Tag name for elements, raw text for text nodes
    pub label: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: String, value: String) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn with_child(mut self, child: NodeSnapshot) -> Self {
        self.children.push(child);
        self
    }
}

/// Builds snapshots during a walk: elements open a frame on `enter_element`
/// and attach it to their parent on `leave_element`
struct SnapshotBuilder {
    stack: Vec<NodeSnapshot>,
}

impl SnapshotBuilder {
    fn new(root: NodeSnapshot) -> Self {
        Self { stack: vec![root] }
    }

    fn attach(&mut self, child: NodeSnapshot) {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(child);
        }
    }

    /// The root frame; `leave_element` never pops it
    fn finish(mut self) -> NodeSnapshot {
        self.stack.swap_remove(0)
    }
}

impl Visitor for SnapshotBuilder {
    fn enter_element(&mut self, element: &Element) {
        let mut snapshot = NodeSnapshot::new("Element".to_string(), element.tag.clone());
        for attr in &element.attributes {
            snapshot = snapshot.with_attribute(attr.name.clone(), attr.value.clone());
        }
        self.stack.push(snapshot);
    }

    fn leave_element(&mut self, _element: &Element) {
        if self.stack.len() > 1 {
            if let Some(done) = self.stack.pop() {
                self.attach(done);
            }
        }
    }

    fn visit_text(&mut self, text: &str) {
        self.attach(NodeSnapshot::new("Text".to_string(), text.to_string()));
    }
}

/// Snapshot a whole tree, wrapping its roots in a `Component` node
pub fn snapshot_tree(tree: &RenderedTree) -> NodeSnapshot {
    let mut builder = SnapshotBuilder::new(NodeSnapshot::new(
        "Component".to_string(),
        tree.component.clone(),
    ));
    tree.accept(&mut builder);
    builder.finish()
}
