//! Notes store use-cases over one persisted slot.
//!
//! # Responsibility
//! - List, append and delete-by-position notes kept as a JSON array.
//! - Gate deletion behind the injected confirmation prompt.
//!
//! # Invariants
//! - Every write replaces the whole slot with the full serialized sequence.
//! - A rejected append or declined/out-of-range delete never writes.
//! - An absent slot, or one that is not a JSON array, lists as empty.
//! - Array records that are not valid notes are hidden from listings but
//!   written back untouched.

use crate::clock::{Clock, SystemClock};
use crate::model::note::{Note, NoteId, NoteValidationError};
use crate::repo::slot_repo::{RepoError, SlotRepository};
use crate::ui::prompt::{UserPrompt, DELETE_NOTE_CONFIRM};
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default slot key holding the notes array.
pub const NOTES_KEY: &str = "cloudapp_notes";

/// Error for notes store use-cases.
#[derive(Debug)]
pub enum NotesError {
    /// Note text was empty after trimming.
    Validation(NoteValidationError),
    /// Delete target outside `[0, len)`.
    IndexOutOfRange { index: i64, len: usize },
    /// Slot storage failure.
    Storage(RepoError),
    /// Note sequence could not be serialized.
    Serialize(serde_json::Error),
}

impl Display for NotesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "note index {index} out of range for {len} note(s)")
            }
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize notes: {err}"),
        }
    }
}

impl NotesError {
    /// Stable short code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(NoteValidationError::EmptyText) => "empty_text",
            Self::Validation(NoteValidationError::IdSpaceExhausted) => "id_space_exhausted",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::Storage(_) => "storage",
            Self::Serialize(_) => "serialize",
        }
    }
}

impl Error for NotesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<NoteValidationError> for NotesError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for NotesError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

pub type NotesResult<T> = Result<T, NotesError>;

/// Notes store over a slot repository.
pub struct NoteStore<R: SlotRepository, C: Clock = SystemClock> {
    repo: R,
    clock: C,
    key: String,
}

impl<R: SlotRepository> NoteStore<R> {
    /// Creates a store on the default `NOTES_KEY` slot and system clock.
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, SystemClock)
    }
}

impl<R: SlotRepository, C: Clock> NoteStore<R, C> {
    pub fn with_clock(repo: R, clock: C) -> Self {
        Self {
            repo,
            clock,
            key: NOTES_KEY.to_string(),
        }
    }

    /// Uses a different slot key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Reads the persisted notes in insertion order.
    ///
    /// Records that are not valid notes are left out of the listing but stay
    /// in the slot.
    ///
    /// # Errors
    /// - Returns `Storage` when the slot cannot be read. A slot that is not a
    ///   JSON array is logged and read as empty.
    pub fn list(&self) -> NotesResult<Vec<Note>> {
        Ok(notes_of(&self.load()?).cloned().collect())
    }

    /// Appends a note built from `text` and persists the sequence.
    ///
    /// # Errors
    /// - Returns `Validation` for blank text or an exhausted id space;
    ///   nothing is written.
    pub fn append(&self, text: &str) -> NotesResult<Note> {
        let mut entries = self.load()?;
        let previous_max_id = entries.iter().filter_map(SlotEntry::id).max();
        let note = Note::create(text, self.clock.now(), previous_max_id)?;

        entries.push(SlotEntry::Note(note.clone()));
        self.save(&entries)?;
        info!(
            "event=note_append module=notes status=ok id={} text_len={} count={}",
            note.id,
            note.text.chars().count(),
            notes_of(&entries).count()
        );
        Ok(note)
    }

    /// Removes the note at `index` after the user confirms.
    ///
    /// `index` counts listed notes only. Returns `Ok(None)` when the user
    /// declines.
    ///
    /// # Errors
    /// - Returns `IndexOutOfRange` for `index < 0` or `index >= len`; the
    ///   prompt is not shown.
    pub fn delete_at(&self, index: i64, prompt: &dyn UserPrompt) -> NotesResult<Option<Note>> {
        let mut entries = self.load()?;
        let len = notes_of(&entries).count();
        let (position, removed) = usize::try_from(index)
            .ok()
            .and_then(|wanted| {
                entries
                    .iter()
                    .enumerate()
                    .filter_map(|(position, entry)| match entry {
                        SlotEntry::Note(note) => Some((position, note.clone())),
                        SlotEntry::Foreign(_) => None,
                    })
                    .nth(wanted)
            })
            .ok_or(NotesError::IndexOutOfRange { index, len })?;

        if !prompt.confirm(DELETE_NOTE_CONFIRM) {
            info!("event=note_delete module=notes status=cancelled index={index}");
            return Ok(None);
        }

        entries.remove(position);
        self.save(&entries)?;
        info!(
            "event=note_delete module=notes status=ok index={} id={} count={}",
            index,
            removed.id,
            len - 1
        );
        Ok(Some(removed))
    }

    fn load(&self) -> NotesResult<Vec<SlotEntry>> {
        let Some(raw) = self.repo.read_slot(&self.key)? else {
            return Ok(Vec::new());
        };

        let records = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    "event=notes_load module=notes status=degraded reason=unparseable_slot key={} error={}",
                    self.key, err
                );
                return Ok(Vec::new());
            }
        };

        let entries = records
            .into_iter()
            .map(SlotEntry::decode)
            .collect::<Vec<_>>();
        let skipped = entries
            .iter()
            .filter(|entry| matches!(entry, SlotEntry::Foreign(_)))
            .count();
        if skipped > 0 {
            warn!(
                "event=notes_load module=notes status=degraded reason=invalid_records key={} skipped={}",
                self.key, skipped
            );
        }
        Ok(entries)
    }

    fn save(&self, entries: &[SlotEntry]) -> NotesResult<()> {
        let payload = serde_json::to_string(entries).map_err(NotesError::Serialize)?;
        self.repo.write_slot(&self.key, &payload)?;
        info!(
            "event=notes_save module=notes status=ok key={} count={}",
            self.key,
            entries.len()
        );
        Ok(())
    }
}

/// One element of the stored array.
///
/// Records that do not decode as a valid `Note` are carried through writes
/// unchanged.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum SlotEntry {
    Note(Note),
    Foreign(Value),
}

impl SlotEntry {
    fn decode(record: Value) -> Self {
        match serde_json::from_value::<Note>(record.clone()) {
            Ok(note) if !note.text.trim().is_empty() => Self::Note(note),
            _ => Self::Foreign(record),
        }
    }

    /// Integer id, also for foreign records that carry one.
    fn id(&self) -> Option<NoteId> {
        match self {
            Self::Note(note) => Some(note.id),
            Self::Foreign(record) => record.get("id").and_then(Value::as_i64),
        }
    }
}

fn notes_of(entries: &[SlotEntry]) -> impl Iterator<Item = &Note> {
    entries.iter().filter_map(|entry| match entry {
        SlotEntry::Note(note) => Some(note),
        SlotEntry::Foreign(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::{NoteStore, NotesError, NOTES_KEY};
    use crate::clock::ManualClock;
    use crate::repo::slot_repo::{MemorySlotRepository, SlotRepository};
    use crate::ui::prompt::FixedAnswerPrompt;
    use chrono::{TimeZone, Utc};

    fn store_at(millis: i64) -> NoteStore<MemorySlotRepository, ManualClock> {
        let clock = ManualClock::new(Utc.timestamp_millis_opt(millis).unwrap());
        NoteStore::with_clock(MemorySlotRepository::new(), clock)
    }

    #[test]
    fn append_stores_trimmed_text_with_clock_id() {
        let store = store_at(1_000);
        let note = store.append("  hello  ").unwrap();
        assert_eq!(note.id, 1_000);
        assert_eq!(note.text, "hello");
        assert_eq!(store.list().unwrap(), vec![note]);
    }

    #[test]
    fn frozen_clock_still_yields_unique_ids() {
        let store = store_at(1_000);
        let first = store.append("a").unwrap();
        let second = store.append("b").unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn negative_index_is_out_of_range() {
        let store = store_at(1_000);
        store.append("a").unwrap();
        let err = store
            .delete_at(-1, &FixedAnswerPrompt::always_yes())
            .unwrap_err();
        assert!(matches!(
            err,
            NotesError::IndexOutOfRange { index: -1, len: 1 }
        ));
    }

    #[test]
    fn custom_key_leaves_default_slot_untouched() {
        let store = store_at(1_000).with_key("other_notes");
        store.append("a").unwrap();
        assert_eq!(store.key(), "other_notes");
        assert!(store.repo.read_slot(NOTES_KEY).unwrap().is_none());
    }
}
