//! Book code table
//!
//! Maps the three-character codes used by the reference corpus (`Gen`, `Pe2`,
//! `Jo1`, ...) to canonical book names. Only the 66 books of the Protestant
//! canon are mapped; records for any other code are dropped by the parser.

/// `(code, canonical name)` pairs in canonical order
pub const BOOKS: &[(&str, &str)] = &[
    ("Gen", "Genesis"),
    ("Exo", "Exodus"),
    ("Lev", "Leviticus"),
    ("Num", "Numbers"),
    ("Deu", "Deuteronomy"),
    ("Jos", "Joshua"),
    ("Jdg", "Judges"),
    ("Rut", "Ruth"),
    ("Sa1", "1 Samuel"),
    ("Sa2", "2 Samuel"),
    ("Kg1", "1 Kings"),
    ("Kg2", "2 Kings"),
    ("Ch1", "1 Chronicles"),
    ("Ch2", "2 Chronicles"),
    ("Ezr", "Ezra"),
    ("Neh", "Nehemiah"),
    ("Est", "Esther"),
    ("Job", "Job"),
    ("Psa", "Psalms"),
    ("Pro", "Proverbs"),
    ("Ecc", "Ecclesiastes"),
    ("Sol", "Song of Solomon"),
    ("Isa", "Isaiah"),
    ("Jer", "Jeremiah"),
    ("Lam", "Lamentations"),
    ("Eze", "Ezekiel"),
    ("Dan", "Daniel"),
    ("Hos", "Hosea"),
    ("Joe", "Joel"),
    ("Amo", "Amos"),
    ("Oba", "Obadiah"),
    ("Jon", "Jonah"),
    ("Mic", "Micah"),
    ("Nah", "Nahum"),
    ("Hab", "Habakkuk"),
    ("Zep", "Zephaniah"),
    ("Hag", "Haggai"),
    ("Zac", "Zechariah"),
    ("Mal", "Malachi"),
    ("Mat", "Matthew"),
    ("Mar", "Mark"),
    ("Luk", "Luke"),
    ("Joh", "John"),
    ("Act", "Acts"),
    ("Rom", "Romans"),
    ("Co1", "1 Corinthians"),
    ("Co2", "2 Corinthians"),
    ("Gal", "Galatians"),
    ("Eph", "Ephesians"),
    ("Phi", "Philippians"),
    ("Col", "Colossians"),
    ("Th1", "1 Thessalonians"),
    ("Th2", "2 Thessalonians"),
    ("Ti1", "1 Timothy"),
    ("Ti2", "2 Timothy"),
    ("Tit", "Titus"),
    ("Plm", "Philemon"),
    ("Heb", "Hebrews"),
    ("Jam", "James"),
    ("Pe1", "1 Peter"),
    ("Pe2", "2 Peter"),
    ("Jo1", "1 John"),
    ("Jo2", "2 John"),
    ("Jo3", "3 John"),
    ("Jde", "Jude"),
    ("Rev", "Revelation"),
];

/// Resolve a corpus book code to its canonical name
pub fn book_name(code: &str) -> Option<&'static str> {
    BOOKS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_covers_the_canon() {
        assert_eq!(BOOKS.len(), 66);

        let codes: HashSet<_> = BOOKS.iter().map(|(c, _)| *c).collect();
        let names: HashSet<_> = BOOKS.iter().map(|(_, n)| *n).collect();
        assert_eq!(codes.len(), 66, "codes must be unique");
        assert_eq!(names.len(), 66, "names must be unique");
    }

    #[test]
    fn resolves_known_codes() {
        assert_eq!(book_name("Pe2"), Some("2 Peter"));
        assert_eq!(book_name("Gen"), Some("Genesis"));
        assert_eq!(book_name("Rev"), Some("Revelation"));
    }

    #[test]
    fn unknown_and_apocryphal_codes_are_unmapped() {
        assert_eq!(book_name("Xyz"), None);
        assert_eq!(book_name("Tob"), None);
        assert_eq!(book_name("pe2"), None);
        assert_eq!(book_name(""), None);
    }
}
