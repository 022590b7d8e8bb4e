//! Fluent assertions for use inside `#[test]` functions
//!
//! The library functions in [`crate::assertion`] return values so that a
//! harness can collect failures. In ordinary Rust tests you usually want to
//! panic with a good message instead, and to check several things at once:
//!
//! ```rust-example
//! use rendercheck::testing::assert_rendered;
//!
//! let tree = render(&hello_world)?;
//! assert_rendered(&tree)
//!     .element_count(3)
//!     .find("h1", |h1| {
//!         h1.text("Welcome to Your Vue.js App");
//!     })
//!     .find("div", |div| {
//!         div.attribute("class", "hello").child_count(2);
//!     })
//!     .missing("h3");
//! ```
//!
//! Text checks go through [`assert_text_equals`], so a failing `text()`
//! panics with the same line diff a harness would report.

use crate::assertion::assert_text_equals;
use crate::selector::{find, find_all, Lookup, Selector};
use crate::tree::{Element, RenderedTree};

pub fn assert_rendered(tree: &RenderedTree) -> TreeAssertion<'_> {
    TreeAssertion { tree }
}

pub struct TreeAssertion<'a> {
    tree: &'a RenderedTree,
}

fn selector(tag: &str) -> Selector {
    Selector::parse(tag).unwrap_or_else(|e| panic!("{e}"))
}

impl<'a> TreeAssertion<'a> {
    pub fn element_count(self, expected: usize) -> Self {
        let actual = self.tree.element_count();
        assert_eq!(
            actual, expected,
            "{}: Expected {} elements, found {}",
            self.tree.component, expected, actual
        );
        self
    }

    pub fn root_count(self, expected: usize) -> Self {
        let actual = self.tree.roots.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} root nodes, found {}",
            self.tree.component, expected, actual
        );
        self
    }

    /// Assert on the first element matching `tag`
    pub fn find<F>(self, tag: &str, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        let selector = selector(tag);
        match find(self.tree, &selector) {
            Lookup::Found(element) => assertion(ElementAssertion {
                element,
                context: format!("{} > {}", self.tree.component, tag),
            }),
            Lookup::NotFound { .. } => panic!(
                "{}: Expected an element matching '{}', found none",
                self.tree.component, tag
            ),
        }
        self
    }

    /// Assert the number of elements matching `tag`
    pub fn count(self, tag: &str, expected: usize) -> Self {
        let actual = find_all(self.tree, &selector(tag)).len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} '{}' elements, found {}",
            self.tree.component, expected, tag, actual
        );
        self
    }

    /// Assert that nothing matches `tag`
    pub fn missing(self, tag: &str) -> Self {
        let selector = selector(tag);
        if let Lookup::Found(el) = find(self.tree, &selector) {
            panic!(
                "{}: Expected no element matching '{}', found {}",
                self.tree.component,
                tag,
                el.display_label()
            );
        }
        self
    }
}

pub struct ElementAssertion<'a> {
    element: &'a Element,
    context: String,
}

impl<'a> ElementAssertion<'a> {
    /// Exact text content equality
    pub fn text(self, expected: &str) -> Self {
        let result = assert_text_equals(Lookup::Found(self.element), expected)
            .unwrap_or_else(|e| panic!("{}: {e}", self.context));
        if let Some(diff) = &result.diff {
            panic!("{}: text content differs\n{diff}", self.context);
        }
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        let actual = self.element.text_content();
        assert!(
            actual.contains(substring),
            "{}: Expected text to contain {:?}, found {:?}",
            self.context,
            substring,
            actual
        );
        self
    }

    pub fn attribute(self, name: &str, expected: &str) -> Self {
        match self.element.attribute(name) {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: Expected attribute {} = {:?}, found {:?}",
                self.context, name, expected, actual
            ),
            None => panic!("{}: Expected attribute {}, found none", self.context, name),
        }
        self
    }

    /// Number of element children (text nodes are not counted)
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.element.child_elements().count();
        assert_eq!(
            actual, expected,
            "{}: Expected {} child elements, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert on the n-th element child
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        let element = self.element.child_elements().nth(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds ({} child elements)",
                self.context,
                index,
                self.element.child_elements().count()
            )
        });
        assertion(ElementAssertion {
            element,
            context: format!("{}[{}]", self.context, index),
        });
        self
    }
}
