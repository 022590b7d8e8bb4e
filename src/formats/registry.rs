//! Named tree formats
//!
//! A [`Formatter`] turns a [`RenderedTree`] into text. The CLI's `show
//! --format <name>` and failure reports look formatters up in a
//! [`FormatRegistry`] by name.

use crate::tree::RenderedTree;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unknown format '{name}' (available: {})", available.join(", "))]
    UnknownFormat { name: String, available: Vec<String> },

    #[error("could not serialize rendered tree: {0}")]
    Serialize(String),
}

pub trait Formatter: Send + Sync {
    /// Lookup key, e.g. "treeviz"
    fn name(&self) -> &str;

    fn serialize(&self, tree: &RenderedTree) -> Result<String, FormatError>;

    /// One-line summary shown by `rendercheck list-formats`
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters keyed by name, iterated in name order
#[derive(Default)]
pub struct FormatRegistry {
    by_name: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// An empty registry; see [`FormatRegistry::with_defaults`] for the built-ins
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `formatter`, replacing any earlier one of the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let name = formatter.name().to_string();
        self.by_name.insert(name, Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.by_name.get(name).map(Box::as_ref)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn serialize(&self, tree: &RenderedTree, name: &str) -> Result<String, FormatError> {
        match self.get(name) {
            Some(formatter) => formatter.serialize(tree),
            None => Err(FormatError::UnknownFormat {
                name: name.to_string(),
                available: self.list_formats(),
            }),
        }
    }

    pub fn list_formats(&self) -> Vec<String> {
        self.by_name.keys().cloned().collect()
    }

    /// treeviz, json and markup, with the default treeviz label width
    pub fn with_defaults() -> Self {
        Self::with_label_width(super::treeviz::DEFAULT_MAX_LABEL_CHARS)
    }

    /// The built-in formatters, truncating treeviz labels at `max_label_chars`
    pub fn with_label_width(max_label_chars: usize) -> Self {
        let mut registry = Self::new();
        registry.register(super::TreevizFormatter::new(max_label_chars));
        registry.register(super::JsonFormatter);
        registry.register(super::MarkupFormatter);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Element;

    struct RootCount;

    impl Formatter for RootCount {
        fn name(&self) -> &str {
            "roots"
        }

        fn serialize(&self, tree: &RenderedTree) -> Result<String, FormatError> {
            Ok(format!("{} roots", tree.roots.len()))
        }
    }

    fn tree() -> RenderedTree {
        RenderedTree::new("T", vec![Element::new("p").into()])
    }

    #[test]
    fn custom_formatter_is_looked_up_by_name() {
        let mut registry = FormatRegistry::new();
        registry.register(RootCount);

        assert!(registry.has("roots"));
        assert_eq!(registry.serialize(&tree(), "roots").unwrap(), "1 roots");
        assert_eq!(registry.get("roots").unwrap().description(), "");
    }

    #[test]
    fn unknown_format_lists_the_alternatives() {
        let err = FormatRegistry::with_defaults()
            .serialize(&tree(), "yaml")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown format 'yaml' (available: json, markup, treeviz)"
        );
    }

    #[test]
    fn built_ins_are_sorted() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.list_formats(), vec!["json", "markup", "treeviz"]);
        assert!(registry
            .list_formats()
            .iter()
            .all(|name| !registry.get(name).unwrap().description().is_empty()));
    }
}
