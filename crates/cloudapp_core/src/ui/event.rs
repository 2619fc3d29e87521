//! UI events and the subscription registry that maps them to page actions.
//!
//! # Invariants
//! - Actions run in the order they were subscribed.
//! - Events with no subscriptions are ignored.

use std::collections::BTreeMap;

/// Key that submits the note input.
pub const SUBMIT_KEY: &str = "Enter";

/// Event raised by the display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Page finished loading.
    PageReady,
    /// "New quote" trigger activated.
    NewQuoteRequested,
    /// "Add note" trigger activated.
    AddNoteRequested,
    /// Key pressed inside the note input field.
    NoteInputKey(String),
    /// Delete action of the row at this position activated.
    DeleteNoteRequested(i64),
    /// Viewport size changed.
    Resized { width: u32, height: u32 },
}

impl UiEvent {
    pub fn kind(&self) -> UiEventKind {
        match self {
            Self::PageReady => UiEventKind::PageReady,
            Self::NewQuoteRequested => UiEventKind::NewQuoteRequested,
            Self::AddNoteRequested => UiEventKind::AddNoteRequested,
            Self::NoteInputKey(_) => UiEventKind::NoteInputKey,
            Self::DeleteNoteRequested(_) => UiEventKind::DeleteNoteRequested,
            Self::Resized { .. } => UiEventKind::Resized,
        }
    }

    /// Stable name used in log lines.
    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}

/// Subscription key for `UiEvent`, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UiEventKind {
    PageReady,
    NewQuoteRequested,
    AddNoteRequested,
    NoteInputKey,
    DeleteNoteRequested,
    Resized,
}

impl UiEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PageReady => "page_ready",
            Self::NewQuoteRequested => "new_quote_requested",
            Self::AddNoteRequested => "add_note_requested",
            Self::NoteInputKey => "note_input_key",
            Self::DeleteNoteRequested => "delete_note_requested",
            Self::Resized => "resized",
        }
    }
}

/// Work the page performs in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    FetchQuote,
    RenderNotes,
    AddNote,
    /// Adds a note only when the event key is `SUBMIT_KEY`.
    AddNoteOnSubmitKey,
    DeleteNote,
    DebounceResize,
}

/// Explicit event subscriptions.
#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    subscriptions: BTreeMap<UiEventKind, Vec<PageAction>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wiring used by the notes/quote page.
    pub fn page_default() -> Self {
        let mut registry = Self::new();
        registry.subscribe(UiEventKind::PageReady, PageAction::FetchQuote);
        registry.subscribe(UiEventKind::PageReady, PageAction::RenderNotes);
        registry.subscribe(UiEventKind::NewQuoteRequested, PageAction::FetchQuote);
        registry.subscribe(UiEventKind::AddNoteRequested, PageAction::AddNote);
        registry.subscribe(UiEventKind::NoteInputKey, PageAction::AddNoteOnSubmitKey);
        registry.subscribe(UiEventKind::DeleteNoteRequested, PageAction::DeleteNote);
        registry.subscribe(UiEventKind::Resized, PageAction::DebounceResize);
        registry
    }

    pub fn subscribe(&mut self, kind: UiEventKind, action: PageAction) {
        self.subscriptions.entry(kind).or_default().push(action);
    }

    /// Removes every subscription for `kind`.
    pub fn unsubscribe_all(&mut self, kind: UiEventKind) {
        self.subscriptions.remove(&kind);
    }

    /// Actions subscribed to `kind`, in subscription order.
    pub fn actions_for(&self, kind: UiEventKind) -> &[PageAction] {
        self.subscriptions
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::{EventRegistry, PageAction, UiEvent, UiEventKind};

    #[test]
    fn page_ready_fetches_quote_then_renders_notes() {
        let registry = EventRegistry::page_default();
        assert_eq!(
            registry.actions_for(UiEvent::PageReady.kind()),
            &[PageAction::FetchQuote, PageAction::RenderNotes]
        );
    }

    #[test]
    fn unsubscribed_kind_has_no_actions() {
        let mut registry = EventRegistry::page_default();
        registry.unsubscribe_all(UiEventKind::Resized);
        assert!(registry.actions_for(UiEventKind::Resized).is_empty());
    }
}
