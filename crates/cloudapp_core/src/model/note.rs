//! Note domain model.
//!
//! # Responsibility
//! - Define the record stored in the notes slot.
//! - Own text normalization and id allocation rules.
//!
//! # Invariants
//! - `id` is unique within one stored sequence and strictly greater than
//!   every id allocated before it.
//! - `created_at` is kept as the exact string written, so round-trips through
//!   the slot are lossless.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Creation timestamp in epoch milliseconds, doubling as the note identity.
pub type NoteId = i64;

/// Persisted user-authored note.
///
/// Serialized as `{ "id", "text", "createdAt" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    /// Trimmed, non-empty text.
    pub text: String,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub created_at: String,
}

impl Note {
    /// Builds a note from raw input text.
    ///
    /// `previous_max_id` is the largest id already present in the target
    /// sequence, if any.
    ///
    /// # Errors
    /// - Returns `NoteValidationError::EmptyText` when `raw_text` trims to
    ///   nothing.
    /// - Returns `NoteValidationError::IdSpaceExhausted` when the sequence
    ///   already holds `i64::MAX`.
    pub fn create(
        raw_text: &str,
        now: DateTime<Utc>,
        previous_max_id: Option<NoteId>,
    ) -> Result<Self, NoteValidationError> {
        let text = normalize_note_text(raw_text)?;
        Ok(Self {
            id: allocate_note_id(now.timestamp_millis(), previous_max_id)
                .ok_or(NoteValidationError::IdSpaceExhausted)?,
            text,
            created_at: format_created_at(now),
        })
    }
}

/// Validation failures for note input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    EmptyText,
    /// No id greater than every existing one is left.
    IdSpaceExhausted,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "note text must not be empty"),
            Self::IdSpaceExhausted => write!(f, "no note id left above the stored maximum"),
        }
    }
}

impl Error for NoteValidationError {}

/// Trims note input and rejects blank values.
pub fn normalize_note_text(raw_text: &str) -> Result<String, NoteValidationError> {
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        return Err(NoteValidationError::EmptyText);
    }
    Ok(trimmed.to_string())
}

/// Picks the id for a new note.
///
/// Uses the clock reading unless it would collide with or precede an
/// existing id. Returns `None` when the existing maximum is `i64::MAX`.
pub fn allocate_note_id(now_millis: i64, previous_max_id: Option<NoteId>) -> Option<NoteId> {
    match previous_max_id {
        Some(max_id) if now_millis <= max_id => max_id.checked_add(1),
        _ => Some(now_millis),
    }
}

/// Formats a creation timestamp, e.g. `2026-10-18T09:30:00.123Z`.
pub fn format_created_at(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::{allocate_note_id, format_created_at, normalize_note_text, Note};
    use super::NoteValidationError;
    use chrono::{TimeZone, Utc};

    #[test]
    fn normalize_trims_and_rejects_blank_text() {
        assert_eq!(normalize_note_text("  buy milk \n").unwrap(), "buy milk");
        assert_eq!(
            normalize_note_text(" \t ").unwrap_err(),
            NoteValidationError::EmptyText
        );
    }

    #[test]
    fn allocate_id_never_reuses_or_goes_backwards() {
        assert_eq!(allocate_note_id(1_000, None), Some(1_000));
        assert_eq!(allocate_note_id(1_000, Some(999)), Some(1_000));
        assert_eq!(allocate_note_id(1_000, Some(1_000)), Some(1_001));
        assert_eq!(allocate_note_id(500, Some(1_000)), Some(1_001));
    }

    #[test]
    fn allocate_id_reports_exhaustion_at_max() {
        assert_eq!(allocate_note_id(1_000, Some(i64::MAX)), None);
        assert_eq!(allocate_note_id(1_000, Some(i64::MAX - 1)), Some(i64::MAX));
    }

    #[test]
    fn created_at_uses_millisecond_utc_format() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(format_created_at(now), "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn note_serializes_with_camel_case_keys() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let note = Note::create("hello", now, None).unwrap();
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["id"], 1_700_000_000_123_i64);
        assert_eq!(json["text"], "hello");
        assert_eq!(json["createdAt"], "2023-11-14T22:13:20.123Z");
    }
}
