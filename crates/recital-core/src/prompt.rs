//! Recitation prompt

use crate::types::Verse;

const INSTRUCTION: &str = "Recite the following bible verse. King James Version. \
Include only the exact text, do not add quotes or add anything extra.";

/// Build the prompt asking the model to recite `verse`
pub fn build_prompt(verse: &Verse) -> String {
    format!(
        "{}\nBook: {}, Chapter: {}, Verse: {}",
        INSTRUCTION, verse.book, verse.chapter, verse.verse
    )
}
