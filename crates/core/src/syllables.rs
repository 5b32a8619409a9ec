// crates/core/src/syllables.rs

/// Polish vowel letters, both cases.
#[inline]
pub(crate) const fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'ą' | 'e' | 'ę' | 'i' | 'o' | 'ó' | 'u' | 'y' | 'A' | 'Ą' | 'E' | 'Ę' | 'I' | 'O' | 'Ó'
            | 'U' | 'Y'
    )
}

/// Vowels that turn a preceding `i` into a glide.
#[inline]
const fn follows_glide(c: char) -> bool {
    is_vowel(c) && !matches!(c, 'i' | 'I')
}

/// Estimates the number of syllables in a line.
///
/// Every vowel counts once; each non-overlapping `i` + vowel pair, scanned
/// left to right, counts as a single unit (`nie` is one syllable). Lines
/// with at least one vowel report at least 1; lines without vowels report 0.
#[must_use]
pub fn count_syllables(line: &str) -> usize {
    let vowels = line.chars().filter(|&c| is_vowel(c)).count();
    if vowels == 0 {
        return 0;
    }
    vowels.saturating_sub(count_glides(line)).max(1)
}

fn count_glides(line: &str) -> usize {
    let mut glides = 0;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if matches!(c, 'i' | 'I') && chars.peek().is_some_and(|&next| follows_glide(next)) {
            chars.next();
            glides += 1;
        }
    }
    glides
}
