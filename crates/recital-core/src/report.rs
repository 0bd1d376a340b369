//! Scoring and report rendering

use serde::Serialize;
use std::fmt;

use crate::types::TestResult;

/// Fraction of results that match, `None` when there are no results
pub fn score(results: &[TestResult<'_>]) -> Option<f64> {
    if results.is_empty() {
        return None;
    }
    let matched = results.iter().filter(|r| r.matches()).count();
    Some(matched as f64 / results.len() as f64)
}

/// Aggregate outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Number of verses evaluated
    pub total: usize,
    /// Number of exact matches
    pub matched: usize,
    /// `matched / total`, absent for an empty run
    pub accuracy: Option<f64>,
}

impl Summary {
    /// Summarize a result set
    pub fn from_results(results: &[TestResult<'_>]) -> Self {
        Self {
            total: results.len(),
            matched: results.iter().filter(|r| r.matches()).count(),
            accuracy: score(results),
        }
    }

    /// Accuracy as a percentage
    pub fn percentage(&self) -> Option<f64> {
        self.accuracy.map(|a| a * 100.0)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percentage() {
            Some(pct) => write!(
                f,
                "Accuracy: {:.2}% ({}/{} verses)",
                pct, self.matched, self.total
            ),
            None => write!(f, "Accuracy: n/a (no verses evaluated)"),
        }
    }
}

/// Render the per-chapter pass/fail grid
///
/// A new row starts whenever book or chapter changes from the previous
/// result. Each row is `<book>,<chapter>,` followed by `1,` or `0,` per
/// verse; rows are separated by a blank line.
pub fn render_csv(results: &[TestResult<'_>]) -> String {
    let mut out = String::new();
    let mut current: Option<(&str, u32)> = None;

    for result in results {
        let key = (result.verse.book.as_str(), result.verse.chapter);
        if current != Some(key) {
            if current.is_some() {
                out.push_str("\n\n");
            }
            out.push_str(&format!("{},{},", key.0, key.1));
            current = Some(key);
        }
        out.push_str(if result.matches() { "1," } else { "0," });
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'r> {
    summary: Summary,
    results: Vec<JsonEntry<'r>>,
}

#[derive(Serialize)]
struct JsonEntry<'r> {
    book: &'r str,
    chapter: u32,
    verse: u32,
    expected: &'r str,
    actual: &'r str,
    matched: bool,
}

/// Render the full result set as pretty-printed JSON
pub fn render_json(results: &[TestResult<'_>]) -> serde_json::Result<String> {
    let report = JsonReport {
        summary: Summary::from_results(results),
        results: results
            .iter()
            .map(|r| JsonEntry {
                book: &r.verse.book,
                chapter: r.verse.chapter,
                verse: r.verse.verse,
                expected: &r.verse.line,
                actual: &r.actual,
                matched: r.matches(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}
