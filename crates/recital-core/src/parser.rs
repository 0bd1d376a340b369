//! Verse corpus parser
//!
//! The corpus is a flat file of `|`-delimited records, one verse per line:
//!
//! ```text
//! Pe2|1|1|Simon Peter, a servant and an apostle of Jesus Christ, ...~
//! ```
//!
//! Field 0 is the book code, field 1 the chapter, field 2 the verse number and
//! field 3 the verse text terminated by `~`. Parsing never fails: records that
//! are filtered out, carry an unmapped code or are malformed are skipped.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::books::book_name;
use crate::types::Verse;

pub use recital_config::{LineEnding, NumberPolicy};

/// Book code retained when no selection is configured
pub const DEFAULT_BOOK_CODE: &str = "Pe2";

const FIELD_SEPARATOR: char = '|';
const VERSE_TERMINATOR: char = '~';
const MIN_FIELDS: usize = 4;

/// Which corpus records to keep, matched against the raw book code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookSelection {
    /// Keep every record whose code maps to a known book
    All,
    /// Keep only records with one of these codes
    Codes(BTreeSet<String>),
}

impl BookSelection {
    /// Select a single book code
    pub fn single(code: impl Into<String>) -> Self {
        Self::Codes(BTreeSet::from([code.into()]))
    }

    /// Select a set of book codes
    pub fn codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Codes(codes.into_iter().map(Into::into).collect())
    }

    /// Whether a record with this code passes the filter
    pub fn includes(&self, code: &str) -> bool {
        match self {
            Self::All => true,
            Self::Codes(codes) => codes.contains(code),
        }
    }
}

impl Default for BookSelection {
    fn default() -> Self {
        Self::single(DEFAULT_BOOK_CODE)
    }
}

/// Parser options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Record filter
    pub books: BookSelection,
    /// Line terminator of the corpus file
    pub line_ending: LineEnding,
    /// How chapter and verse fields are read
    pub numbers: NumberPolicy,
}

/// Parses raw corpus text into verses
#[derive(Debug, Clone, Default)]
pub struct CorpusParser {
    options: ParseOptions,
}

impl CorpusParser {
    /// Create a parser with the given options
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// The options this parser was built with
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse the whole corpus, preserving input order
    pub fn parse(&self, raw: &str) -> Vec<Verse> {
        info!("Parsing verses");

        let lines: Box<dyn Iterator<Item = &str>> = match self.options.line_ending {
            LineEnding::Crlf => Box::new(raw.split("\r\n")),
            LineEnding::Lf => Box::new(raw.split('\n')),
            LineEnding::Any => Box::new(raw.lines()),
        };

        let verses: Vec<Verse> = lines
            .enumerate()
            .filter_map(|(index, line)| self.parse_line(index + 1, line))
            .collect();

        debug!(count = verses.len(), "Parsed verses");
        verses
    }

    fn parse_line(&self, line_no: usize, line: &str) -> Option<Verse> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let code = fields[0];

        if !self.options.books.includes(code) {
            return None;
        }

        debug!(line_no, line, "Working on line");

        let Some(book) = book_name(code) else {
            debug!(line_no, code, "Book code does not exist, skipping");
            return None;
        };

        if fields.len() < MIN_FIELDS {
            warn!(
                line_no,
                fields = fields.len(),
                "Record has fewer than {} fields, skipping",
                MIN_FIELDS
            );
            return None;
        }

        let chapter = self.parse_number(line_no, "chapter", fields[1])?;
        let verse = self.parse_number(line_no, "verse", fields[2])?;
        let text = clean_verse_text(fields[3]);

        debug!(line_no, book, chapter, verse, text = %text, "Parsed record");

        Some(Verse {
            book: book.to_string(),
            chapter,
            verse,
            line: text,
        })
    }

    fn parse_number(&self, line_no: usize, field: &'static str, raw: &str) -> Option<u32> {
        match self.options.numbers {
            NumberPolicy::Lenient => Some(lenient_number(raw)),
            NumberPolicy::Strict => {
                let parsed = raw.trim().parse::<u32>().ok().filter(|n| *n > 0);
                if parsed.is_none() {
                    warn!(line_no, field, value = raw, "Malformed number, skipping record");
                }
                parsed
            }
        }
    }
}

/// Parse a corpus with the reference options (`Pe2` only, CRLF, lenient numbers)
pub fn parse_corpus(raw: &str) -> Vec<Verse> {
    CorpusParser::default().parse(raw)
}

/// Trim surrounding whitespace and the trailing `~` verse terminator
///
/// Whitespace and terminators interleaved at the end are all removed, so the
/// cleanup is idempotent.
pub fn clean_verse_text(text: &str) -> String {
    text.trim_start()
        .trim_end_matches(|c: char| c == VERSE_TERMINATOR || c.is_whitespace())
        .to_string()
}

/// Read the leading decimal digits of a field, `0` when there are none
fn lenient_number(field: &str) -> u32 {
    let s = field.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().unwrap_or(0)
}
