use alloc::vec::Vec;

use crate::syllables::count_syllables;

/// Lines of a text in presentation order.
///
/// Borrowed from the source text and rebuilt on every edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Document<'a> {
    /// Splits on `'\n'`. Empty text has no lines; a `'\r'` before the break
    /// stays in the line and tokenizes as whitespace.
    #[must_use]
    pub fn parse(text: &'a str) -> Self {
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n').collect()
        };
        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    /// Syllable estimate of every line, for the gutter next to the text.
    #[must_use]
    pub fn line_syllables(&self) -> Vec<usize> {
        self.lines.iter().map(|line| count_syllables(line)).collect()
    }

    /// Total syllables, summed line by line.
    #[must_use]
    pub fn syllables(&self) -> usize {
        self.lines.iter().map(|line| count_syllables(line)).sum()
    }
}
