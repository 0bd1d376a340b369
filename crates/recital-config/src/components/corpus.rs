//! Corpus selection configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::invalid;
use crate::error::ConfigResult;

/// Line terminator used by the corpus file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\r\n`, as shipped with the reference corpus
    #[default]
    Crlf,
    /// `\n`
    Lf,
    /// Either of the above
    Any,
}

/// How chapter and verse numbers are read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberPolicy {
    /// Leading digits are used, a field without any reads as 0
    #[default]
    Lenient,
    /// The field must be a positive integer or the record is skipped
    Strict,
}

/// Which file to read and which records to keep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path to the `|`-delimited verse file
    pub path: PathBuf,
    /// Book codes to evaluate (e.g. `Pe2`), ignored when `all_books` is set
    pub books: Vec<String>,
    /// Evaluate every mapped book in the corpus
    pub all_books: bool,
    /// Line terminator of the file
    pub line_ending: LineEnding,
    /// Number parsing policy
    pub numbers: NumberPolicy,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./kjvdat.txt"),
            books: vec!["Pe2".to_string()],
            all_books: false,
            line_ending: LineEnding::default(),
            numbers: NumberPolicy::default(),
        }
    }
}

impl CorpusConfig {
    pub(crate) fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(invalid("corpus.path is empty"));
        }
        if !self.all_books && self.books.is_empty() {
            return Err(invalid(
                "corpus.books is empty; list at least one book code or set all_books",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_book_list_needs_all_books() {
        let mut config = CorpusConfig {
            books: Vec::new(),
            ..CorpusConfig::default()
        };
        assert!(config.validate().is_err());

        config.all_books = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn enums_use_lowercase_names() {
        let config: CorpusConfig =
            toml::from_str("line_ending = \"any\"\nnumbers = \"strict\"").unwrap();
        assert_eq!(config.line_ending, LineEnding::Any);
        assert_eq!(config.numbers, NumberPolicy::Strict);
        assert_eq!(config.books, vec!["Pe2".to_string()]);
    }
}
