use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use wersy_core::{Color, ColorMap, DocumentStats, RhymeCandidate};

/// One row of the syllable gutter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineReport {
    pub index: usize,
    pub text: String,
    pub syllables: usize,
}

/// A rhyme group with the color it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeReport {
    /// Position among the surviving groups, from 0.
    pub group: usize,
    pub color: Color,
    pub members: Vec<RhymeCandidate>,
}

impl RhymeReport {
    /// `A`, `B`, ... `Z`, then `AA`, `AB`, ...
    #[must_use]
    pub fn label(&self) -> String {
        group_label(self.group)
    }
}

/// Spreadsheet-style letters for a group index.
#[must_use]
pub fn group_label(mut index: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push(char::from(b'A' + (index % 26) as u8));
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    label.iter().rev().collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub name: String,
    pub stats: DocumentStats,
    pub lines: Vec<LineReport>,
    pub rhymes: Vec<RhymeReport>,
    pub colors: ColorMap,
    #[serde(skip)]
    pub text: String,
}

impl DocumentReport {
    /// The rhyme group a colored line ending belongs to.
    #[must_use]
    pub fn rhyme_of_line(&self, line: usize) -> Option<&RhymeReport> {
        self.rhymes
            .iter()
            .find(|group| group.members.iter().any(|m| m.id.line == line))
    }
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub reports: Vec<DocumentReport>,
    pub errors: Vec<(String, EngineError)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_spreadsheet_columns() {
        assert_eq!(group_label(0), "A");
        assert_eq!(group_label(25), "Z");
        assert_eq!(group_label(26), "AA");
        assert_eq!(group_label(27), "AB");
        assert_eq!(group_label(701), "ZZ");
        assert_eq!(group_label(702), "AAA");
    }
}
