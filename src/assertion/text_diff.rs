//! Line-based text diffing for assertion failures
//!
//! Compares two strings line by line and reports which lines differ. For the
//! first mismatching line it also points at the first differing character,
//! which is what you usually need for one-line strings like headings.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineDiff<'a> {
    Changed { expected: &'a str, actual: &'a str },
    Missing(&'a str),
    Extra(&'a str),
}

/// `None` when the strings are equal, otherwise a printable report
pub fn diff_text(expected: &str, actual: &str) -> Option<String> {
    if expected == actual {
        return None;
    }

    let expected_lines = split_lines(expected);
    let actual_lines = split_lines(actual);
    let rows = expected_lines.len().max(actual_lines.len());

    let mut report = String::from("Text differs:\n");
    let mut pointed = false;
    for i in 0..rows {
        let line = i + 1;
        match line_diff(expected_lines.get(i).copied(), actual_lines.get(i).copied()) {
            None => {}
            Some(LineDiff::Changed { expected, actual }) => {
                let _ = writeln!(report, "Line {line}: MISMATCH");
                let _ = writeln!(report, "  Expected: {expected:?}");
                let _ = writeln!(report, "  Actual:   {actual:?}");
                if !pointed {
                    pointed = true;
                    let column = common_prefix_chars(expected, actual) + 1;
                    let _ = writeln!(report, "  First difference at column {column}");
                }
            }
            Some(LineDiff::Missing(expected)) => {
                let _ = writeln!(report, "Line {line}: MISSING in actual");
                let _ = writeln!(report, "  Expected: {expected:?}");
            }
            Some(LineDiff::Extra(actual)) => {
                let _ = writeln!(report, "Line {line}: EXTRA in actual");
                let _ = writeln!(report, "  Actual:   {actual:?}");
            }
        }
    }
    Some(report.trim_end().to_string())
}

fn line_diff<'a>(expected: Option<&'a str>, actual: Option<&'a str>) -> Option<LineDiff<'a>> {
    match (expected, actual) {
        (Some(e), Some(a)) if e == a => None,
        (Some(expected), Some(actual)) => Some(LineDiff::Changed { expected, actual }),
        (Some(expected), None) => Some(LineDiff::Missing(expected)),
        (None, Some(actual)) => Some(LineDiff::Extra(actual)),
        (None, None) => None,
    }
}

/// Split on `\n` only. A trailing newline yields an empty final line and a
/// `\r` stays part of its line, so every byte difference lands in some row.
fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

fn common_prefix_chars(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count()
}
