//! # rendercheck
//!
//! Render a UI component in isolation, find an element in its output by tag,
//! and check the element's text content against an expected string.
//!
//! ```rust-example
//! use rendercheck::{assert_text_equals, find, render, ComponentDescription, Selector};
//!
//! let hello = ComponentDescription::from_template(
//!     "HelloWorld",
//!     "<h1>Welcome to Your Vue.js App</h1><h2>Essential Links</h2>",
//! );
//! let tree = render(&hello)?;
//! let h2 = Selector::parse("h2")?;
//! let result = assert_text_equals(find(&tree, &h2), "Essential Links")?;
//! assert!(result.passed);
//! ```
//!
//! Each step reports its own failure: [`RenderError`] when the component cannot
//! render, [`MissingNodeError`] when nothing matches the selector, and a failed
//! [`AssertionResult`] (convertible into [`AssertionMismatch`]) when the text
//! differs. The [`suite`] module runs many cases and aggregates a report; the
//! [`testing`] module offers panicking, fluent assertions for `#[test]` code.

pub mod assertion;
pub mod component;
pub mod config;
pub mod error;
pub mod formats;
pub mod markup;
pub mod renderer;
pub mod selector;
pub mod suite;
pub mod testing;
pub mod tree;

pub use assertion::{assert_text_equals, AssertionResult};
pub use component::ComponentDescription;
pub use error::{AssertionMismatch, CaseFailure, MissingNodeError, RenderError};
pub use renderer::render;
pub use selector::{find, find_all, Lookup, Selector};
pub use tree::{Element, Node, RenderedTree};
