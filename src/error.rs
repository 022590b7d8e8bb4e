//! Failure taxonomy for a single test case
//!
//! Each stage of `render -> find -> assert` has its own error so that callers
//! can tell a broken component from a missing element from a wrong string.
//! None of them are fatal: a harness records the failure and moves on to the
//! next case.

use thiserror::Error;

/// The render function of a component returned an error or panicked
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to render component '{component}': {message}")]
pub struct RenderError {
    pub component: String,
    pub message: String,
}

impl RenderError {
    pub fn new(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            message: message.into(),
        }
    }
}

/// The selector matched nothing, so there was no node to assert against
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no element matches selector '{selector}'")]
pub struct MissingNodeError {
    pub selector: String,
}

/// The node was found but its text content differs from the expected string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("text of <{tag}> does not match: expected {expected:?}, found {actual:?}")]
pub struct AssertionMismatch {
    pub tag: String,
    pub expected: String,
    pub actual: String,
    pub diff: String,
}

/// Any of the three ways a case can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseFailure {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    MissingNode(#[from] MissingNodeError),

    #[error(transparent)]
    Mismatch(#[from] AssertionMismatch),
}

impl CaseFailure {
    /// Stable short name of the failure kind, used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            CaseFailure::Render(_) => "render-error",
            CaseFailure::MissingNode(_) => "missing-node",
            CaseFailure::Mismatch(_) => "mismatch",
        }
    }
}
