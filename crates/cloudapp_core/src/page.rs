//! Page controller: routes UI events to the notes store and quote loader.
//!
//! # Responsibility
//! - Run the actions subscribed to each `UiEvent`.
//! - Translate store/loader results into display updates and prompts.
//!
//! # Invariants
//! - No error escapes `dispatch`; every failure degrades to a visible,
//!   non-blocking state (fallback quote, unchanged list, unchanged input).
//! - The notes list is re-rendered after every successful mutation.

use crate::clock::{Clock, SystemClock};
use crate::model::note::{Note, NoteValidationError};
use crate::net::quote_source::QuoteSource;
use crate::render::render_note_rows;
use crate::repo::slot_repo::SlotRepository;
use crate::service::note_store::{NoteStore, NotesError};
use crate::service::quote_loader::{QuoteLoader, QuoteOutcome};
use crate::ui::debounce::{ResizeDebouncer, ViewportSize};
use crate::ui::event::{EventRegistry, PageAction, UiEvent, SUBMIT_KEY};
use crate::ui::prompt::{UserPrompt, EMPTY_NOTE_ALERT};
use crate::ui::targets::{NoteTargets, QuoteTargets};
use log::{debug, error, info, warn};
use std::time::Instant;

/// What one subscribed action did.
#[derive(Debug)]
pub enum ActionOutcome {
    Quote(QuoteOutcome),
    NotesRendered { count: usize },
    NoteAdded(Note),
    /// Blank input; the user was alerted and nothing was stored.
    NoteRejected,
    NoteDeleted(Note),
    DeleteCancelled,
    /// Delete target was out of range; logged only.
    DeleteOutOfRange { index: i64, len: usize },
    /// Store operation failed; logged, display left unchanged.
    Failed,
    ResizeScheduled,
    /// The action did not apply to this event or surface.
    Ignored,
}

pub struct Page<R: SlotRepository, S: QuoteSource, C: Clock = SystemClock> {
    notes: NoteStore<R, C>,
    quotes: QuoteLoader<S>,
    registry: EventRegistry,
    resize: ResizeDebouncer,
}

impl<R: SlotRepository, S: QuoteSource, C: Clock> Page<R, S, C> {
    /// Creates a page with the default event wiring.
    pub fn new(notes: NoteStore<R, C>, quotes: QuoteLoader<S>) -> Self {
        Self {
            notes,
            quotes,
            registry: EventRegistry::page_default(),
            resize: ResizeDebouncer::default(),
        }
    }

    pub fn with_registry(mut self, registry: EventRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn notes(&self) -> &NoteStore<R, C> {
        &self.notes
    }

    /// Runs every action subscribed to `event`, in order.
    pub async fn dispatch<D>(
        &mut self,
        event: UiEvent,
        surface: &mut D,
        prompt: &dyn UserPrompt,
        now: Instant,
    ) -> Vec<ActionOutcome>
    where
        D: QuoteTargets + NoteTargets,
    {
        debug!("event=ui_event module=page status=received name={}", event.name());
        let actions = self.registry.actions_for(event.kind()).to_vec();
        let mut outcomes = Vec::with_capacity(actions.len());
        for action in actions {
            let outcome = match action {
                PageAction::FetchQuote => {
                    ActionOutcome::Quote(self.quotes.load(&mut *surface).await)
                }
                PageAction::RenderNotes => self.render_notes(&mut *surface),
                PageAction::AddNote => self.add_note(&mut *surface, prompt),
                PageAction::AddNoteOnSubmitKey => match &event {
                    UiEvent::NoteInputKey(key) if key == SUBMIT_KEY => {
                        self.add_note(&mut *surface, prompt)
                    }
                    _ => ActionOutcome::Ignored,
                },
                PageAction::DeleteNote => match &event {
                    UiEvent::DeleteNoteRequested(index) => {
                        self.delete_note(*index, &mut *surface, prompt)
                    }
                    _ => ActionOutcome::Ignored,
                },
                PageAction::DebounceResize => match &event {
                    UiEvent::Resized { width, height } => {
                        let size = ViewportSize {
                            width: *width,
                            height: *height,
                        };
                        self.resize.record(size, now);
                        ActionOutcome::ResizeScheduled
                    }
                    _ => ActionOutcome::Ignored,
                },
            };
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Flushes time-based work; returns the settled viewport size, if any.
    pub fn tick(&mut self, now: Instant) -> Option<ViewportSize> {
        let settled = self.resize.poll(now)?;
        info!(
            "event=window_resized module=page status=ok width={} height={}",
            settled.width, settled.height
        );
        Some(settled)
    }

    /// Re-reads the store and replaces the displayed list.
    pub fn render_notes(&self, surface: &mut dyn NoteTargets) -> ActionOutcome {
        if !surface.has_note_targets() {
            info!("event=notes_render module=page status=skipped reason=no_targets");
            return ActionOutcome::Ignored;
        }

        match self.notes.list() {
            Ok(notes) => {
                surface.show_note_rows(&render_note_rows(&notes));
                info!(
                    "event=notes_render module=page status=ok count={}",
                    notes.len()
                );
                ActionOutcome::NotesRendered { count: notes.len() }
            }
            Err(err) => action_failed("notes_render", &err),
        }
    }

    fn add_note(&self, surface: &mut dyn NoteTargets, prompt: &dyn UserPrompt) -> ActionOutcome {
        if !surface.has_note_targets() {
            return ActionOutcome::Ignored;
        }

        match self.notes.append(&surface.note_input()) {
            Ok(note) => {
                surface.clear_note_input();
                self.render_notes(surface);
                ActionOutcome::NoteAdded(note)
            }
            Err(NotesError::Validation(NoteValidationError::EmptyText)) => {
                warn!("event=note_add module=page status=rejected reason=empty_text");
                prompt.alert(EMPTY_NOTE_ALERT);
                ActionOutcome::NoteRejected
            }
            Err(err) => action_failed("note_add", &err),
        }
    }

    fn delete_note(
        &self,
        index: i64,
        surface: &mut dyn NoteTargets,
        prompt: &dyn UserPrompt,
    ) -> ActionOutcome {
        match self.notes.delete_at(index, prompt) {
            Ok(Some(note)) => {
                self.render_notes(surface);
                ActionOutcome::NoteDeleted(note)
            }
            Ok(None) => ActionOutcome::DeleteCancelled,
            Err(NotesError::IndexOutOfRange { index, len }) => {
                error!(
                    "event=note_delete module=page status=error error_code=index_out_of_range index={} len={}",
                    index, len
                );
                ActionOutcome::DeleteOutOfRange { index, len }
            }
            Err(err) => action_failed("note_delete", &err),
        }
    }
}

fn action_failed(event: &str, err: &NotesError) -> ActionOutcome {
    error!(
        "event={event} module=page status=error error_code={} error={err}",
        err.code()
    );
    ActionOutcome::Failed
}
