//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate slot storage into the notes store use-cases.
//! - Drive the quote loader state machine over a `QuoteSource`.
//! - Keep display surfaces decoupled from storage and transport details.

pub mod note_store;
pub mod quote_loader;
