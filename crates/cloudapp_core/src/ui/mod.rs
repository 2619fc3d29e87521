//! Page-facing contracts: display targets, user prompts and UI events.
//!
//! # Responsibility
//! - Describe what the core needs from a display surface, without tying it
//!   to any rendering toolkit.
//! - Model UI callbacks as explicit subscriptions on an event registry.

pub mod debounce;
pub mod event;
pub mod prompt;
pub mod targets;
