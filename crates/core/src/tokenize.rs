use alloc::vec::Vec;

use crate::word::WordId;

/// Splits a line into maximal runs of whitespace and non-whitespace.
///
/// Concatenating the result gives back the line. An empty line has no
/// tokens.
#[must_use]
pub fn tokens(line: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (pos, c) in line.char_indices() {
        let space = c.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                out.push(&line[start..pos]);
                start = pos;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < line.len() {
        out.push(&line[start..]);
    }
    out
}

#[inline]
pub(crate) fn is_word(token: &str) -> bool {
    !token.trim().is_empty()
}

/// Word tokens of a line paired with their positions.
pub fn word_tokens(line_index: usize, line: &str) -> impl Iterator<Item = (WordId, &str)> {
    tokens(line)
        .into_iter()
        .enumerate()
        .filter(|(_, token)| is_word(token))
        .map(move |(token_index, token)| (WordId::new(line_index, token_index), token))
}

/// The last word of a line, or `None` for blank lines.
#[must_use]
pub fn last_word(line_index: usize, line: &str) -> Option<(WordId, &str)> {
    let tokens = tokens(line);
    tokens
        .iter()
        .rposition(|token| is_word(token))
        .map(|token_index| (WordId::new(line_index, token_index), tokens[token_index]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn preserves_whitespace_runs() {
        assert_eq!(tokens("idę  drogą "), vec!["idę", "  ", "drogą", " "]);
        assert_eq!(tokens("\tkot"), vec!["\t", "kot"]);
        assert!(tokens("").is_empty());
    }

    #[test]
    fn concatenation_rebuilds_line() {
        let line = "  Litwo! Ojczyzno\tmoja, ty  jesteś ";
        let rebuilt: String = tokens(line).concat();
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn word_positions_skip_whitespace_tokens() {
        let words: Vec<_> = word_tokens(2, " a bb").collect();
        assert_eq!(
            words,
            vec![(WordId::new(2, 1), "a"), (WordId::new(2, 3), "bb")]
        );
    }

    #[test]
    fn last_word_ignores_trailing_space() {
        assert_eq!(last_word(0, "mam nogą  "), Some((WordId::new(0, 2), "nogą")));
        assert_eq!(last_word(5, "kot"), Some((WordId::new(5, 0), "kot")));
    }

    #[test]
    fn blank_lines_have_no_last_word() {
        assert_eq!(last_word(0, ""), None);
        assert_eq!(last_word(0, " \t "), None);
    }
}
