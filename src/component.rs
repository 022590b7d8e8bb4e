//! Component descriptions
//!
//! A [`ComponentDescription`] is a name plus a render function. Rendering is
//! repeatable: every call to the render function builds a brand new tree, so
//! no state leaks from one test case into the next.

use std::fmt;
use std::sync::Arc;

use crate::markup::parse_markup;
use crate::tree::{Element, Node};

/// Error value a render function may return
pub type RenderFailure = Box<dyn std::error::Error + Send + Sync>;

type RenderFn = dyn Fn() -> Result<Vec<Node>, RenderFailure> + Send + Sync;

/// A named, renderable UI unit. Immutable once built; cheap to clone.
#[derive(Clone)]
pub struct ComponentDescription {
    name: String,
    render: Arc<RenderFn>,
}

impl ComponentDescription {
    /// Describe a component by its render function
    pub fn new<F>(name: impl Into<String>, render: F) -> Self
    where
        F: Fn() -> Result<Vec<Node>, RenderFailure> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            render: Arc::new(render),
        }
    }

    /// A component that always renders the given nodes
    pub fn from_nodes(name: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self::new(name, move || Ok(nodes.clone()))
    }

    /// A component with a single root element
    pub fn from_element(name: impl Into<String>, root: Element) -> Self {
        Self::from_nodes(name, vec![Node::Element(root)])
    }

    /// A component rendered from a markup template
    ///
    /// The template is parsed on every render, so a broken template surfaces as
    /// a render error of that one component rather than at construction time.
    pub fn from_template(name: impl Into<String>, template: impl Into<String>) -> Self {
        let template = template.into();
        Self::new(name, move || parse_markup(&template).map_err(Into::into))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn invoke(&self) -> Result<Vec<Node>, RenderFailure> {
        (self.render)()
    }
}

impl fmt::Debug for ComponentDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescription")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
