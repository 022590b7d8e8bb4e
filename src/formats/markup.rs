//! Markup formatter: writes a tree back out as escaped markup
//!
//! Output is compact (no added whitespace), so parsing it again yields the
//! same nodes.

use super::registry::{FormatError, Formatter};
use crate::markup::parser::is_void_element;
use crate::tree::{Node, RenderedTree};

pub fn to_markup_str(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
        Node::Element(el) => {
            out.push('<');
            out.push_str(&el.tag);
            for attr in &el.attributes {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                out.push_str(&html_escape::encode_double_quoted_attribute(&attr.value));
                out.push('"');
            }
            if el.children.is_empty() && is_void_element(&el.tag) {
                out.push('>');
                return;
            }
            if el.children.is_empty() {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for child in &el.children {
                write_node(out, child);
            }
            out.push_str("</");
            out.push_str(&el.tag);
            out.push('>');
        }
    }
}

pub struct MarkupFormatter;

impl Formatter for MarkupFormatter {
    fn name(&self) -> &str {
        "markup"
    }

    fn serialize(&self, tree: &RenderedTree) -> Result<String, FormatError> {
        Ok(to_markup_str(&tree.roots))
    }

    fn description(&self) -> &str {
        "Compact markup, entities escaped"
    }
}
