//! Node types
//!
//! `Node` is the common wrapper for everything a component can render: either
//! an [`Element`] or a run of text. Trees own their children and are never
//! mutated after rendering.

use super::traits::{walk_nodes, Visitor};
use std::fmt;

/// A single `name="value"` pair on an element, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An element node: tag name, attributes and child nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append a text child
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Append an element child
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Look up an attribute value by name (ASCII case-insensitive)
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .map(|attr| attr.value.as_str())
    }

    /// Concatenated text of every descendant text node, in document order
    ///
    /// No whitespace normalization is applied here; what the renderer produced
    /// is what comes back.
    pub fn text_content(&self) -> String {
        let mut collector = TextCollector::default();
        walk_nodes(&mut collector, &self.children);
        collector.0
    }

    /// Iterate over the element children only, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Short label used by formatters and failure messages, e.g. `h2 "Essential Links"`
    pub fn display_label(&self) -> String {
        let text = self.text_content();
        if text.is_empty() {
            self.tag.clone()
        } else {
            format!("{} {:?}", self.tag, text)
        }
    }
}

/// Anything a component can render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Element(el) => el.text_content(),
            Node::Text(text) => text.clone(),
        }
    }

    /// Accept a visitor for this node and, for elements, all of its descendants
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Node::Element(el) => {
                visitor.enter_element(el);
                for child in &el.children {
                    child.accept(visitor);
                }
                visitor.leave_element(el);
            }
            Node::Text(text) => visitor.visit_text(text),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => write!(f, "<{}>", el.tag),
            Node::Text(text) => write!(f, "{text:?}"),
        }
    }
}

#[derive(Default)]
struct TextCollector(String);

impl Visitor for TextCollector {
    fn visit_text(&mut self, text: &str) {
        self.0.push_str(text);
    }
}

#[derive(Default)]
struct ElementCounter(usize);

impl Visitor for ElementCounter {
    fn enter_element(&mut self, _element: &Element) {
        self.0 += 1;
    }
}

/// The output of rendering one component once
///
/// A component may render several roots (a fragment), so the tree keeps them
/// in order. Selectors search the roots left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTree {
    pub component: String,
    pub roots: Vec<Node>,
}

impl RenderedTree {
    pub fn new(component: impl Into<String>, roots: Vec<Node>) -> Self {
        Self {
            component: component.into(),
            roots,
        }
    }

    pub fn text_content(&self) -> String {
        let mut collector = TextCollector::default();
        self.accept(&mut collector);
        collector.0
    }

    /// Number of element nodes in the whole tree
    pub fn element_count(&self) -> usize {
        let mut counter = ElementCounter::default();
        self.accept(&mut counter);
        counter.0
    }

    pub fn accept(&self, visitor: &mut dyn Visitor) {
        walk_nodes(visitor, &self.roots);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello_world() -> Element {
        Element::new("div")
            .with_attribute("class", "hello")
            .with_child(Element::new("h1").with_text("Welcome to Your Vue.js App"))
            .with_child(
                Element::new("p")
                    .with_text("For a guide, check out the ")
                    .with_child(Element::new("a").with_text("docs"))
                    .with_text("."),
            )
    }

    #[test]
    fn text_content_concatenates_descendants_in_order() {
        let root = hello_world();
        let p = root.child_elements().nth(1).unwrap();
        assert_eq!(p.text_content(), "For a guide, check out the docs.");
    }

    #[test]
    fn text_content_of_empty_element_is_empty() {
        assert_eq!(Element::new("br").text_content(), "");
    }

    #[test]
    fn attribute_lookup_ignores_case() {
        let el = hello_world();
        assert_eq!(el.attribute("CLASS"), Some("hello"));
        assert_eq!(el.attribute("id"), None);
    }

    #[test]
    fn element_count_skips_text() {
        let tree = RenderedTree::new("HelloWorld", vec![hello_world().into()]);
        assert_eq!(tree.element_count(), 4);
    }

    #[test]
    fn tree_text_content_spans_every_root() {
        let tree = RenderedTree::new(
            "Fragment",
            vec![
                Element::new("h1").with_text("Welcome").into(),
                Node::text(" to "),
                Element::new("h2").with_text("Vue").into(),
            ],
        );
        assert_eq!(tree.text_content(), "Welcome to Vue");
        assert_eq!(tree.element_count(), 2);
    }

    #[test]
    fn display_label_includes_text() {
        let h1 = Element::new("h1").with_text("Hi");
        assert_eq!(h1.display_label(), "h1 \"Hi\"");
        assert_eq!(Element::new("hr").display_label(), "hr");
    }
}
