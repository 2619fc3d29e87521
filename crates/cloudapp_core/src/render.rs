//! Notes list rendering.
//!
//! # Responsibility
//! - Turn the stored note sequence into display rows.
//! - Escape note text so it can never be interpreted as markup.
//!
//! # Invariants
//! - An empty sequence renders exactly one placeholder row.
//! - Row `index` is the note's current position, not its id.

use crate::model::note::Note;

/// Placeholder shown when there are no notes.
pub const EMPTY_NOTES_MESSAGE: &str = "Belum ada catatan. Tambahkan catatan pertama!";
/// Label of the per-row delete action.
pub const DELETE_ACTION_LABEL: &str = "Hapus";

/// One row of the notes list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteRow {
    Item {
        /// Position in the current sequence; target of the delete action.
        index: usize,
        /// HTML-escaped note text.
        escaped_text: String,
    },
    Placeholder {
        message: &'static str,
    },
}

impl NoteRow {
    /// Serializes the row as a list item.
    pub fn to_html(&self) -> String {
        match self {
            Self::Item {
                index,
                escaped_text,
            } => format!(
                "<li class=\"note-item\"><span class=\"note-text\">{escaped_text}</span>\
                 <button class=\"note-delete\" data-index=\"{index}\">{DELETE_ACTION_LABEL}</button></li>"
            ),
            Self::Placeholder { message } => {
                format!("<li class=\"empty-notes\">{message}</li>")
            }
        }
    }
}

/// Builds display rows for `notes`.
pub fn render_note_rows(notes: &[Note]) -> Vec<NoteRow> {
    if notes.is_empty() {
        return vec![NoteRow::Placeholder {
            message: EMPTY_NOTES_MESSAGE,
        }];
    }

    notes
        .iter()
        .enumerate()
        .map(|(index, note)| NoteRow::Item {
            index,
            escaped_text: escape_html(&note.text),
        })
        .collect()
}

/// Escapes `&`, `<`, `>`, `"` and `'`.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
