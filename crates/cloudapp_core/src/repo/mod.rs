//! Repository layer for persisted key-value slots.
//!
//! # Responsibility
//! - Define the slot read/write contract used by the notes store.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - A write replaces the whole slot value; there are no partial updates.
//! - An absent slot reads as `None`, never as an error.

pub mod slot_repo;
