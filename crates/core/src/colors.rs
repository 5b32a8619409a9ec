use alloc::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::palette::Color;
use crate::word::WordId;

/// Highlight colors keyed by word position.
///
/// Rhyme detection and manual painting write into the same map; the last
/// write for a position wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorMap {
    entries: BTreeMap<WordId, Color>,
}

impl ColorMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: WordId) -> Option<Color> {
        self.entries.get(&id).copied()
    }

    /// Sets `color` on `id`, or removes it if `id` already has that color.
    ///
    /// Returns the color now attached to `id`.
    pub fn paint(&mut self, id: WordId, color: Color) -> Option<Color> {
        if self.entries.get(&id) == Some(&color) {
            self.entries.remove(&id);
            None
        } else {
            self.entries.insert(id, color);
            Some(color)
        }
    }

    /// Unconditionally attaches `color` to `id`.
    pub fn set(&mut self, id: WordId, color: Color) {
        self.entries.insert(id, color);
    }

    pub fn erase(&mut self, id: WordId) -> Option<Color> {
        self.entries.remove(&id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, Color)> + '_ {
        self.entries.iter().map(|(id, color)| (*id, *color))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(WordId, Color)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (WordId, Color)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
