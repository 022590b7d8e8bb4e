//! Rendering a component in isolation
//!
//! [`render`] calls the component's render function exactly once and wraps the
//! result in a [`RenderedTree`]. A render function that returns an error or
//! panics yields a [`RenderError`]; the panic does not escape, so sibling test
//! cases keep running.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

use crate::component::ComponentDescription;
use crate::error::RenderError;
use crate::tree::RenderedTree;

pub fn render(component: &ComponentDescription) -> Result<RenderedTree, RenderError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| component.invoke()));

    match outcome {
        Ok(Ok(roots)) => {
            let tree = RenderedTree::new(component.name(), roots);
            debug!(
                component = component.name(),
                elements = tree.element_count(),
                "rendered"
            );
            Ok(tree)
        }
        Ok(Err(err)) => {
            warn!(component = component.name(), error = %err, "render function failed");
            Err(RenderError::new(component.name(), err.to_string()))
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(component = component.name(), %message, "render function panicked");
            Err(RenderError::new(
                component.name(),
                format!("render function panicked: {message}"),
            ))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
