//! Locating elements in a rendered tree
//!
//! A [`Selector`] is a validated tag name. [`find`] walks the tree depth-first
//! in pre-order and returns the first element whose tag matches, or
//! [`Lookup::NotFound`]. Lookup never fails: absence is a value that the
//! caller has to deal with, typically by handing it to
//! [`assert_text_equals`](crate::assertion::assert_text_equals).

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::tree::{Element, Node, RenderedTree};

static TAG_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid selector {selector:?}: expected a tag name like 'h2' or 'my-widget'")]
pub struct SelectorError {
    pub selector: String,
}

/// A tag-name query. Matching ignores ASCII case, as HTML tag names do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    tag: String,
}

impl Selector {
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        let tag = selector.trim();
        if !TAG_NAME.is_match(tag) {
            return Err(SelectorError {
                selector: selector.to_string(),
            });
        }
        Ok(Self {
            tag: tag.to_string(),
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn matches(&self, element: &Element) -> bool {
        element.tag.eq_ignore_ascii_case(&self.tag)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

/// Result of a lookup: the first matching element, or the sentinel for "no match"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a Element),
    NotFound { selector: Selector },
}

impl<'a> Lookup<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn element(&self) -> Option<&'a Element> {
        match self {
            Lookup::Found(el) => Some(*el),
            Lookup::NotFound { .. } => None,
        }
    }
}

/// First element matching `selector`, in depth-first pre-order
pub fn find<'a>(tree: &'a RenderedTree, selector: &Selector) -> Lookup<'a> {
    let found = first_match(&tree.roots, selector);
    debug!(
        component = %tree.component,
        selector = %selector,
        found = found.is_some(),
        "find"
    );
    match found {
        Some(el) => Lookup::Found(el),
        None => Lookup::NotFound {
            selector: selector.clone(),
        },
    }
}

/// Every element matching `selector`, in depth-first pre-order
pub fn find_all<'a>(tree: &'a RenderedTree, selector: &Selector) -> Vec<&'a Element> {
    let mut out = Vec::new();
    collect_matches(&tree.roots, selector, &mut out);
    out
}

fn first_match<'a>(nodes: &'a [Node], selector: &Selector) -> Option<&'a Element> {
    for el in nodes.iter().filter_map(Node::as_element) {
        if selector.matches(el) {
            return Some(el);
        }
        if let Some(found) = first_match(&el.children, selector) {
            return Some(found);
        }
    }
    None
}

fn collect_matches<'a>(nodes: &'a [Node], selector: &Selector, out: &mut Vec<&'a Element>) {
    for el in nodes.iter().filter_map(Node::as_element) {
        if selector.matches(el) {
            out.push(el);
        }
        collect_matches(&el.children, selector, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn nested_tree() -> RenderedTree {
        // <section><div><p>deep</p></div><p>shallow</p></section><p>root</p>
        RenderedTree::new(
            "Nested",
            vec![
                Element::new("section")
                    .with_child(Element::new("div").with_child(Element::new("p").with_text("deep")))
                    .with_child(Element::new("p").with_text("shallow"))
                    .into(),
                Element::new("p").with_text("root").into(),
            ],
        )
    }

    #[test]
    fn find_is_pre_order_depth_first() {
        let tree = nested_tree();
        let selector = Selector::parse("p").unwrap();
        let found = find(&tree, &selector).element().unwrap();
        assert_eq!(found.text_content(), "deep");
    }

    #[test]
    fn find_all_keeps_document_order() {
        let tree = nested_tree();
        let selector = Selector::parse("p").unwrap();
        let texts: Vec<String> = find_all(&tree, &selector)
            .iter()
            .map(|el| el.text_content())
            .collect();
        assert_eq!(texts, vec!["deep", "shallow", "root"]);
    }

    #[test]
    fn find_matches_root_elements() {
        let tree = nested_tree();
        let selector = Selector::parse("section").unwrap();
        assert!(find(&tree, &selector).is_found());
    }

    #[test]
    fn missing_tag_is_not_found() {
        let tree = nested_tree();
        let selector = Selector::parse("h3").unwrap();
        assert_eq!(
            find(&tree, &selector),
            Lookup::NotFound {
                selector: selector.clone()
            }
        );
    }

    #[test]
    fn matching_ignores_case() {
        let tree = RenderedTree::new("Upper", vec![Element::new("H2").with_text("x").into()]);
        let selector = Selector::parse("h2").unwrap();
        assert!(find(&tree, &selector).is_found());
    }

    #[rstest]
    #[case("h2")]
    #[case("my-widget")]
    #[case("  li ")]
    fn valid_selectors(#[case] input: &str) {
        assert!(Selector::parse(input).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("2col")]
    #[case("div > p")]
    #[case(".class")]
    fn invalid_selectors(#[case] input: &str) {
        let err = Selector::parse(input).unwrap_err();
        assert_eq!(err.selector, input);
    }
}
