//! Text assertions on located elements
//!
//! [`assert_text_equals`] compares an element's text content to an expected
//! string with exact equality: no trimming, no whitespace folding, no case
//! folding. It does not panic. A mismatch is a failed [`AssertionResult`] that
//! carries both values and a diff, while a lookup that found nothing is a
//! [`MissingNodeError`], so the two causes stay distinguishable.

pub mod text_diff;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AssertionMismatch, MissingNodeError};
use crate::selector::Lookup;

/// Outcome of one text comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionResult {
    pub passed: bool,
    /// Tag of the element that was compared
    pub tag: String,
    pub expected: String,
    pub actual: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl AssertionResult {
    /// Turn a failed result into an error, keeping both values and the diff
    pub fn into_outcome(self) -> Result<(), AssertionMismatch> {
        if self.passed {
            return Ok(());
        }
        let diff = self.diff.unwrap_or_default();
        Err(AssertionMismatch {
            tag: self.tag,
            expected: self.expected,
            actual: self.actual,
            diff,
        })
    }
}

pub fn assert_text_equals(
    lookup: Lookup<'_>,
    expected: &str,
) -> Result<AssertionResult, MissingNodeError> {
    let element = match lookup {
        Lookup::Found(element) => element,
        Lookup::NotFound { selector } => {
            return Err(MissingNodeError {
                selector: selector.to_string(),
            })
        }
    };

    let actual = element.text_content();
    let diff = text_diff::diff_text(expected, &actual);
    debug!(tag = %element.tag, passed = diff.is_none(), "assert_text_equals");

    Ok(AssertionResult {
        passed: diff.is_none(),
        tag: element.tag.clone(),
        expected: expected.to_string(),
        actual,
        diff,
    })
}
