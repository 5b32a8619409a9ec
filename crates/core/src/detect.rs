use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::colors::ColorMap;
use crate::document::Document;
use crate::palette::Palette;
use crate::rhyme::{RhymeMode, rhyme_part};
use crate::tokenize::last_word;
use crate::word::WordId;

/// The last word of a line together with its rhyme signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeCandidate {
    pub id: WordId,
    pub word: String,
    #[serde(skip)]
    pub signature: String,
}

/// Line endings sharing one signature, at least two of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeGroup {
    #[serde(skip)]
    pub signature: String,
    pub members: Vec<RhymeCandidate>,
}

impl RhymeGroup {
    pub fn ids(&self) -> impl Iterator<Item = WordId> + '_ {
        self.members.iter().map(|m| m.id)
    }
}

/// One candidate per non-blank line, top to bottom.
#[must_use]
pub fn candidates(document: &Document<'_>, mode: RhymeMode) -> Vec<RhymeCandidate> {
    document
        .lines()
        .iter()
        .enumerate()
        .filter_map(|(index, line)| last_word(index, line))
        .map(|(id, word)| RhymeCandidate {
            id,
            word: String::from(word),
            signature: rhyme_part(word, mode),
        })
        .collect()
}

/// Groups line endings by signature, in order of first appearance, and
/// drops words that rhyme with nothing.
///
/// Group order depends on scan order, so this is a single sequential pass.
#[must_use]
pub fn detect_groups(document: &Document<'_>, mode: RhymeMode) -> Vec<RhymeGroup> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<RhymeGroup> = Vec::new();

    for candidate in candidates(document, mode) {
        if let Some(&slot) = slots.get(&candidate.signature) {
            groups[slot].members.push(candidate);
        } else {
            slots.insert(candidate.signature.clone(), groups.len());
            groups.push(RhymeGroup {
                signature: candidate.signature.clone(),
                members: alloc::vec![candidate],
            });
        }
    }

    groups.retain(|group| group.members.len() >= 2);
    groups
}

/// Colors every rhyme group with the next palette entry.
///
/// Returns a fresh map; callers replace whatever they held before.
#[must_use]
pub fn detect_rhymes(document: &Document<'_>, mode: RhymeMode, palette: &Palette) -> ColorMap {
    color_groups(&detect_groups(document, mode), palette)
}

/// Gives group `i` palette color `i` on every member.
#[must_use]
pub fn color_groups(groups: &[RhymeGroup], palette: &Palette) -> ColorMap {
    groups
        .iter()
        .enumerate()
        .flat_map(|(index, group)| {
            let color = palette.color(index);
            group.ids().map(move |id| (id, color))
        })
        .collect()
}
