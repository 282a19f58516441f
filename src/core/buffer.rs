//! Session text buffer.
//!
//! Invariant: offsets are extended grapheme cluster positions counted from the
//! start of the buffer (0 = beginning), and the content is only ever mutated
//! through [`TextBuffer::append`] and [`TextBuffer::truncate`].

use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Length in grapheme clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Content between grapheme offsets `start` (inclusive) and `end`
    /// (exclusive). Out-of-range offsets clamp to the buffer end; an inverted
    /// range reads as empty.
    #[must_use]
    pub fn read(&self, start: usize, end: usize) -> &str {
        let start_byte = self.byte_index(start);
        let end_byte = self.byte_index(end);
        if start_byte >= end_byte {
            return "";
        }
        &self.text[start_byte..end_byte]
    }

    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Drops everything at and after grapheme offset `index`. Offsets past the
    /// end leave the buffer unchanged.
    pub fn truncate(&mut self, index: usize) {
        let byte = self.byte_index(index);
        self.text.truncate(byte);
    }

    fn byte_index(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(byte, _)| byte)
    }
}
