//! Suite reports
//!
//! A [`SuiteReport`] aggregates the outcome of every case. It serializes to
//! JSON for machines and renders a short text summary for people.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::error::CaseFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Passed,
    Failed,
}

/// Why a case failed, flattened for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDetail {
    /// `render-error`, `missing-node` or `mismatch`
    pub kind: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl From<&CaseFailure> for FailureDetail {
    fn from(failure: &CaseFailure) -> Self {
        let (expected, actual, diff) = match failure {
            CaseFailure::Mismatch(m) => (
                Some(m.expected.clone()),
                Some(m.actual.clone()),
                Some(m.diff.clone()),
            ),
            _ => (None, None, None),
        };
        Self {
            kind: failure.kind().to_string(),
            message: failure.to_string(),
            expected,
            actual,
            diff,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub name: String,
    pub component: String,
    pub selector: String,
    pub status: CaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureDetail>,
    /// Treeviz rendering of the component, attached to failures when enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<String>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.status == CaseStatus::Passed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub cases: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn from_outcomes(cases: Vec<CaseOutcome>) -> Self {
        let passed = cases.iter().filter(|c| c.passed()).count();
        Self {
            total: cases.len(),
            passed,
            failed: cases.len() - passed,
            cases,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable summary: one line per case, details under failures
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for case in &self.cases {
            let mark = if case.passed() { "ok  " } else { "FAIL" };
            let _ = writeln!(out, "{mark} {} ({} / {})", case.name, case.component, case.selector);

            if let Some(failure) = &case.failure {
                let _ = writeln!(out, "     [{}] {}", failure.kind, failure.message);
                if let Some(diff) = &failure.diff {
                    for line in diff.lines() {
                        let _ = writeln!(out, "       {line}");
                    }
                }
            }
            if let Some(tree) = &case.tree {
                for line in tree.lines() {
                    let _ = writeln!(out, "       {line}");
                }
            }
        }
        let _ = writeln!(
            out,
            "\n{} cases: {} passed, {} failed",
            self.total, self.passed, self.failed
        );
        out
    }
}
