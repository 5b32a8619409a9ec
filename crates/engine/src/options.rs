use serde::{Deserialize, Serialize};
use wersy_core::{Color, WordId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Line numbers, syllable gutter and rhyme letters
    #[default]
    Table,
    Json,
    Yaml,
    Jsonl,
    Md,
    /// Text re-rendered with highlighted words
    Paint,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WatchOutput {
    /// Clear the screen before every cycle
    #[default]
    Full,
    /// Append one JSON record per line
    Jsonl,
}

/// A manual highlight request: a word position and an optional color.
///
/// Without a color the first palette swatch is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paint {
    pub id: WordId,
    pub color: Option<Color>,
}

impl Paint {
    #[must_use]
    pub const fn new(id: WordId, color: Option<Color>) -> Self {
        Self { id, color }
    }
}
