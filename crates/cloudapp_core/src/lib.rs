//! Core logic for CloudApp notes and quote-of-the-day.
//! This crate owns the note invariants and the quote fallback flow; display
//! surfaces plug in through the traits in `ui`.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod net;
pub mod page;
pub mod render;
pub mod repo;
pub mod service;
pub mod ui;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AppConfig, ConfigOverrides};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteId, NoteValidationError};
pub use model::quote::Quote;
pub use net::quote_source::{HttpQuoteSource, QuoteFetchError, QuoteSource};
pub use page::{ActionOutcome, Page};
pub use render::{escape_html, render_note_rows, NoteRow};
pub use repo::slot_repo::{
    MemorySlotRepository, RepoError, RepoResult, SlotRepository, SqliteSlotRepository,
};
pub use service::note_store::{NoteStore, NotesError, NotesResult, NOTES_KEY};
pub use service::quote_loader::{QuoteLoader, QuoteOutcome, QuotePhase};
pub use ui::debounce::{ResizeDebouncer, ViewportSize};
pub use ui::event::{EventRegistry, PageAction, UiEvent, UiEventKind};
pub use ui::prompt::{FixedAnswerPrompt, ScriptedPrompt, UserPrompt};
pub use ui::targets::{NoteTargets, QuoteTargets, RecordingSurface};

