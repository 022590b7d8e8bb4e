//! Treeviz formatter for rendered trees
//!
//! One line per node, with box-drawing connectors encoding the nesting:
//!
//! ```text
//! ⧉ HelloWorld
//! └─ <div class="hello">
//!    ├─ <h1> "Welcome to Your Vue.js App"
//!    └─ <h2> "Essential Links"
//! ```
//!
//! An element whose only child is a text node is printed on one line with that
//! text; other text nodes get their own `◦` line. Labels longer than the
//! configured width are truncated with `...`.

use super::registry::{FormatError, Formatter};
use crate::tree::{Element, Node, RenderedTree};

pub const DEFAULT_MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(tree: &RenderedTree, max_label_chars: usize) -> String {
    let mut result = format!("⧉ {}\n", tree.component);
    append_children(&mut result, &tree.roots, "", max_label_chars);
    result
}

fn append_children(result: &mut String, nodes: &[Node], prefix: &str, max: usize) {
    for (i, node) in nodes.iter().enumerate() {
        let is_last = i == nodes.len() - 1;
        append_node(result, node, prefix, is_last, max);
    }
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool, max: usize) {
    let connector = if is_last { "└─" } else { "├─" };

    match node {
        Node::Text(text) => {
            result.push_str(&format!("{prefix}{connector} ◦ {:?}\n", truncate(text, max)));
        }
        Node::Element(el) => {
            result.push_str(&format!("{prefix}{connector} {}", open_tag(el)));
            let inline_text = match el.children.as_slice() {
                [Node::Text(text)] => Some(text),
                _ => None,
            };
            match inline_text {
                Some(text) => {
                    result.push_str(&format!(" {:?}\n", truncate(text, max)));
                }
                None => {
                    result.push('\n');
                    let new_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
                    append_children(result, &el.children, &new_prefix, max);
                }
            }
        }
    }
}

fn open_tag(el: &Element) -> String {
    let mut tag = format!("<{}", el.tag);
    for attr in &el.attributes {
        tag.push_str(&format!(" {}={:?}", attr.name, attr.value));
    }
    tag.push('>');
    tag
}

pub struct TreevizFormatter {
    max_label_chars: usize,
}

impl TreevizFormatter {
    pub fn new(max_label_chars: usize) -> Self {
        Self { max_label_chars }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LABEL_CHARS)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &RenderedTree) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tree, self.max_label_chars))
    }

    fn description(&self) -> &str {
        "One line per node, nesting drawn with box characters"
    }
}
