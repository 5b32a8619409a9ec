use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Summary figures shown under the editor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Verse count, see [`count_lines`].
    pub lines: usize,
    /// Whitespace-separated words.
    pub words: usize,
    /// Sum of per-line syllable estimates.
    pub syllables: usize,
}

impl DocumentStats {
    #[must_use]
    pub fn of(text: &str) -> Self {
        Self {
            lines: count_lines(text),
            words: count_words(text),
            syllables: Document::parse(text).syllables(),
        }
    }
}

/// Number of `'\n'`-delimited lines, or 0 when the text is blank.
#[must_use]
pub fn count_lines(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    text.split('\n').count()
}

/// Number of whitespace-separated words, or 0 when the text is blank.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
