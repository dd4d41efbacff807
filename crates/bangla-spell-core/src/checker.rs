//! Tokenization and dictionary lookup.
//!
//! Text is split on runs of whitespace and the punctuation marks
//! `।` (dari), `,` `.` `?` `!` `;` `(` `)`. Tokens are compared against the
//! dictionary byte-for-byte: no case folding and no Unicode normalization.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::dictionary::Dictionary;

/// Delimiter runs between words. The ASCII information separators
/// U+001C..U+001F count as whitespace here.
static DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x1C-\x1F।,.?!;()]+").expect("valid regex"));

/// Split text into candidate words. Never yields an empty token.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    DELIMITERS.split(text).filter(|token| !token.is_empty())
}

/// Words in `text` that are not in `dictionary`.
///
/// Each unknown word is reported once, in the order it first appears.
#[tracing::instrument(skip_all, fields(text_len = text.len(), dictionary = dictionary.len()))]
pub fn find_misspelled(text: &str, dictionary: &Dictionary) -> Vec<String> {
    let mut seen = HashSet::new();
    let misspelled: Vec<String> = tokenize(text)
        .filter(|token| !dictionary.contains(token))
        .filter(|token| seen.insert(*token))
        .map(str::to_string)
        .collect();
    tracing::debug!(misspelled = misspelled.len(), "text checked");
    misspelled
}
