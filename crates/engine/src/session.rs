// crates/engine/src/session.rs
use crate::error::{EngineError, Result};
use log::debug;
use wersy_core::{
    Color, ColorMap, Document, Palette, RhymeGroup, RhymeMode, WordId, color_groups, count_lines,
    count_words, detect_groups, tokenize::word_tokens,
};

/// Editing state owned by a front end: the text, its highlight colors, the
/// palette and the rhyme mode.
///
/// Edits do not touch the colors; only [`Session::detect_rhymes`] and
/// [`Session::clear`] reset them.
#[derive(Debug, Clone, Default)]
pub struct Session {
    text: String,
    colors: ColorMap,
    palette: Palette,
    mode: RhymeMode,
}

impl Session {
    #[must_use]
    pub fn new(palette: Palette, mode: RhymeMode) -> Self {
        Self {
            palette,
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn colors(&self) -> &ColorMap {
        &self.colors
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub const fn mode(&self) -> RhymeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RhymeMode) {
        self.mode = mode;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn document(&self) -> Document<'_> {
        Document::parse(&self.text)
    }

    /// Replaces the color map with a fresh detection pass over the text.
    pub fn detect_rhymes(&mut self) -> &ColorMap {
        self.detect_rhyme_groups();
        &self.colors
    }

    /// Same pass as [`Session::detect_rhymes`], also returning the groups
    /// the colors were derived from. Group `i` has palette color `i`.
    pub fn detect_rhyme_groups(&mut self) -> Vec<RhymeGroup> {
        let groups = detect_groups(&self.document(), self.mode);
        self.colors = color_groups(&groups, &self.palette);
        debug!(
            "rhyme pass ({:?}) colored {} words in {} groups",
            self.mode,
            self.colors.len(),
            groups.len()
        );
        groups
    }

    /// Toggles `color` on the word at `id`, falling back to the first swatch.
    ///
    /// # Errors
    /// Returns [`EngineError::UnknownWord`] if `id` does not address a word
    /// of the current text.
    pub fn paint(&mut self, id: WordId, color: Option<Color>) -> Result<Option<Color>> {
        if !self.has_word(id) {
            return Err(EngineError::UnknownWord(id));
        }
        let color = color.unwrap_or_else(|| self.palette.first());
        Ok(self.colors.paint(id, color))
    }

    fn has_word(&self, id: WordId) -> bool {
        self.document()
            .line(id.line)
            .is_some_and(|line| word_tokens(id.line, line).any(|(pos, _)| pos == id))
    }

    /// Empties both the text and the colors.
    pub fn clear(&mut self) {
        self.text.clear();
        self.colors.clear();
    }

    /// Text followed by its line and word counts, as copied to the clipboard.
    #[must_use]
    pub fn export(&self) -> String {
        export_text(&self.text)
    }
}

/// Clipboard export of `text`: the text, a separator and its summary.
#[must_use]
pub fn export_text(text: &str) -> String {
    format!(
        "{text}\n\n--- Statystyki ---\nWersy: {} | Słowa: {}",
        count_lines(text),
        count_words(text)
    )
}
