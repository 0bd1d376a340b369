//! Verse and test result types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single verse of the reference corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Canonical book name (e.g. "2 Peter")
    pub book: String,
    /// Chapter number
    pub chapter: u32,
    /// Verse number within the chapter
    pub verse: u32,
    /// Reference text, already cleaned of whitespace and the `~` terminator
    pub line: String,
}

impl Verse {
    /// Create a new verse
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32, line: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
            line: line.into(),
        }
    }
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// Outcome of asking the model for one verse
///
/// Borrows the verse from the parsed corpus; results never outlive the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult<'a> {
    /// The verse under test
    pub verse: &'a Verse,
    /// Text returned by the model, empty if the call failed
    pub actual: String,
}

impl<'a> TestResult<'a> {
    /// Pair a verse with the model's answer
    pub fn new(verse: &'a Verse, actual: impl Into<String>) -> Self {
        Self {
            verse,
            actual: actual.into(),
        }
    }

    /// Exact, case and whitespace sensitive comparison against the reference text
    pub fn matches(&self) -> bool {
        self.actual == self.verse.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_requires_exact_text() {
        let verse = Verse::new("2 Peter", 1, 1, "Simon Peter, a servant");

        assert!(TestResult::new(&verse, "Simon Peter, a servant").matches());
        assert!(!TestResult::new(&verse, "simon peter, a servant").matches());
        assert!(!TestResult::new(&verse, "Simon Peter, a servant ").matches());
        assert!(!TestResult::new(&verse, "\"Simon Peter, a servant\"").matches());
        assert!(!TestResult::new(&verse, "").matches());
    }

    #[test]
    fn verse_display_uses_reference_form() {
        let verse = Verse::new("2 Peter", 3, 18, "But grow in grace");
        assert_eq!(verse.to_string(), "2 Peter 3:18");
    }
}
