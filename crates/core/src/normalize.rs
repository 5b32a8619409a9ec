use alloc::string::String;

/// Characters removed by [`clean`].
///
/// Quotation marks and other Unicode punctuation are not part of the set,
/// so `„kot”` keeps its quotes.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Case-folds a word and strips [`PUNCTUATION`] from it.
///
/// Whitespace is left untouched; callers trim beforehand.
#[must_use]
pub fn clean(word: &str) -> String {
    word.chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}
