//! Running many independent cases
//!
//! A [`TestCase`] ties a component to a selector and an expected string.
//! [`run_case`] is the whole `render -> find -> assert` pipeline for one case;
//! [`Suite::run`] applies it to every case and collects a [`SuiteReport`].
//! Every case renders its own tree, and a failure in one case (including a
//! panicking render function) never stops the others.

pub mod file;
pub mod report;

pub use file::{SuiteError, SuiteFile};
pub use report::{CaseOutcome, CaseStatus, FailureDetail, SuiteReport};

use tracing::{info, warn};

use crate::assertion::{assert_text_equals, AssertionResult};
use crate::component::ComponentDescription;
use crate::error::CaseFailure;
use crate::formats::treeviz::{to_treeviz_str, DEFAULT_MAX_LABEL_CHARS};
use crate::renderer::render;
use crate::selector::{find, Selector};

#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: String,
    pub component: ComponentDescription,
    pub selector: Selector,
    pub expected: String,
}

impl TestCase {
    pub fn new(
        name: impl Into<String>,
        component: ComponentDescription,
        selector: Selector,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            component,
            selector,
            expected: expected.into(),
        }
    }
}

/// Render, find and assert. `Ok` holds a passing result; every failure,
/// including a text mismatch, comes back as a [`CaseFailure`].
pub fn run_case(
    component: &ComponentDescription,
    selector: &Selector,
    expected: &str,
) -> Result<AssertionResult, CaseFailure> {
    let tree = render(component)?;
    let result = assert_text_equals(find(&tree, selector), expected)?;
    result.clone().into_outcome()?;
    Ok(result)
}

/// Knobs for [`Suite::run_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Attach a treeviz rendering of the component to failed cases
    pub show_tree_on_failure: bool,
    pub max_label_chars: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            show_tree_on_failure: false,
            max_label_chars: DEFAULT_MAX_LABEL_CHARS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Suite {
    cases: Vec<TestCase>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_case(&mut self, case: TestCase) {
        self.cases.push(case);
    }

    pub fn with_case(mut self, case: TestCase) -> Self {
        self.add_case(case);
        self
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn run(&self) -> SuiteReport {
        self.run_with(RunOptions::default())
    }

    pub fn run_with(&self, options: RunOptions) -> SuiteReport {
        info!(cases = self.cases.len(), "running suite");
        let outcomes = self
            .cases
            .iter()
            .map(|case| run_one(case, options))
            .collect();
        let report = SuiteReport::from_outcomes(outcomes);
        info!(
            passed = report.passed,
            failed = report.failed,
            "suite finished"
        );
        report
    }
}

fn run_one(case: &TestCase, options: RunOptions) -> CaseOutcome {
    let outcome = run_case(&case.component, &case.selector, &case.expected);

    let failure = match &outcome {
        Ok(_) => None,
        Err(failure) => {
            warn!(case = %case.name, kind = failure.kind(), "case failed");
            Some(FailureDetail::from(failure))
        }
    };

    // Render errors have no tree to show
    let tree = match &outcome {
        Err(CaseFailure::MissingNode(_)) | Err(CaseFailure::Mismatch(_))
            if options.show_tree_on_failure =>
        {
            render(&case.component)
                .ok()
                .map(|tree| to_treeviz_str(&tree, options.max_label_chars))
        }
        _ => None,
    };

    CaseOutcome {
        name: case.name.clone(),
        component: case.component.name().to_string(),
        selector: case.selector.to_string(),
        status: if failure.is_none() {
            CaseStatus::Passed
        } else {
            CaseStatus::Failed
        },
        failure,
        tree,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Element;

    fn heading() -> ComponentDescription {
        ComponentDescription::from_element("Heading", Element::new("h2").with_text("Links"))
    }

    fn selector(tag: &str) -> Selector {
        Selector::parse(tag).unwrap()
    }

    #[test]
    fn run_case_distinguishes_failures() {
        assert!(run_case(&heading(), &selector("h2"), "Links").is_ok());
        assert_eq!(
            run_case(&heading(), &selector("h2"), "Linx")
                .unwrap_err()
                .kind(),
            "mismatch"
        );
        assert_eq!(
            run_case(&heading(), &selector("h3"), "Links")
                .unwrap_err()
                .kind(),
            "missing-node"
        );
        let broken = ComponentDescription::new("Broken", || Err("nope".into()));
        assert_eq!(
            run_case(&broken, &selector("h2"), "Links")
                .unwrap_err()
                .kind(),
            "render-error"
        );
    }

    #[test]
    fn tree_is_attached_only_when_requested() {
        let suite = Suite::new().with_case(TestCase::new("t", heading(), selector("h3"), "x"));

        let plain = suite.run();
        assert_eq!(plain.cases[0].tree, None);

        let verbose = suite.run_with(RunOptions {
            show_tree_on_failure: true,
            ..RunOptions::default()
        });
        let tree = verbose.cases[0].tree.as_deref().unwrap();
        assert!(tree.contains("<h2> \"Links\""));
    }

    #[test]
    fn passing_case_has_no_tree() {
        let suite = Suite::new().with_case(TestCase::new("t", heading(), selector("h2"), "Links"));
        let report = suite.run_with(RunOptions {
            show_tree_on_failure: true,
            ..RunOptions::default()
        });
        assert!(report.all_passed());
        assert_eq!(report.cases[0].tree, None);
    }
}
