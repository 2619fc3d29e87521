//! Display targets written by the quote loader and the notes page.

use crate::render::NoteRow;

/// Quote text and author display elements.
pub trait QuoteTargets {
    /// Whether this surface has anywhere to show a quote.
    fn has_quote_targets(&self) -> bool {
        true
    }
    fn set_quote_text(&mut self, text: &str);
    fn set_quote_author(&mut self, author: &str);
}

/// Note input field and notes list container.
pub trait NoteTargets {
    /// Whether this surface has a notes list to render into.
    fn has_note_targets(&self) -> bool {
        true
    }
    /// Current raw value of the note input field.
    fn note_input(&self) -> String;
    fn clear_note_input(&mut self);
    /// Replaces the whole notes list with `rows`.
    fn show_note_rows(&mut self, rows: &[NoteRow]);
}

/// In-memory surface that keeps whatever was last written to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    pub quote_text: String,
    pub quote_author: String,
    pub input: String,
    pub rows: Vec<NoteRow>,
    /// Every `(text, author)` pair written, in order.
    pub quote_history: Vec<(String, String)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuoteTargets for RecordingSurface {
    fn set_quote_text(&mut self, text: &str) {
        self.quote_text = text.to_string();
    }

    fn set_quote_author(&mut self, author: &str) {
        self.quote_author = author.to_string();
        self.quote_history
            .push((self.quote_text.clone(), self.quote_author.clone()));
    }
}

impl NoteTargets for RecordingSurface {
    fn note_input(&self) -> String {
        self.input.clone()
    }

    fn clear_note_input(&mut self) {
        self.input.clear();
    }

    fn show_note_rows(&mut self, rows: &[NoteRow]) {
        self.rows = rows.to_vec();
    }
}
