//! Domain model for notes and quotes.
//!
//! # Responsibility
//! - Define the persisted `Note` record and its JSON shape.
//! - Define the transient `Quote` payload and the fixed fallback pair.
//!
//! # Invariants
//! - A `Note` is never mutated in place after creation.
//! - `Note::text` is never empty or whitespace-only at rest.

pub mod note;
pub mod quote;
