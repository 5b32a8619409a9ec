use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::normalize::clean;
use crate::syllables::is_vowel;

/// How strictly line endings must agree to rhyme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RhymeMode {
    /// Whole tail from the stressed vowel, consonants included.
    #[default]
    Exact,
    /// Vowels of the tail only (assonance).
    Imperfect,
}

impl RhymeMode {
    #[must_use]
    pub const fn from_imperfect(imperfect: bool) -> Self {
        if imperfect { Self::Imperfect } else { Self::Exact }
    }

    #[must_use]
    pub const fn is_imperfect(self) -> bool {
        matches!(self, Self::Imperfect)
    }
}

impl From<bool> for RhymeMode {
    fn from(imperfect: bool) -> Self {
        Self::from_imperfect(imperfect)
    }
}

/// Derives the rhyme signature of a word.
///
/// The anchor is the penultimate vowel of the cleaned word, approximating
/// Polish penultimate stress. Words shorter than two characters or without
/// vowels are their own signature; single-vowel words rhyme from their
/// only vowel onward.
#[must_use]
pub fn rhyme_part(word: &str, mode: RhymeMode) -> String {
    let cleaned = clean(word);
    let chars: Vec<char> = cleaned.chars().collect();
    if chars.len() < 2 {
        return cleaned;
    }

    let vowel_positions: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| is_vowel(**c))
        .map(|(i, _)| i)
        .collect();

    let anchor = match vowel_positions.as_slice() {
        [] => return cleaned,
        [only] => return chars[*only..].iter().collect(),
        [.., penultimate, _] => *penultimate,
    };

    let suffix = &chars[anchor..];
    match mode {
        RhymeMode::Exact => suffix.iter().collect(),
        RhymeMode::Imperfect => suffix.iter().filter(|c| is_vowel(**c)).collect(),
    }
}
