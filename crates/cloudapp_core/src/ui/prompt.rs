//! Blocking user prompts injected into note operations.

use std::cell::RefCell;
use std::collections::VecDeque;

/// Shown when the user tries to add a blank note.
pub const EMPTY_NOTE_ALERT: &str = "Silakan tulis catatan terlebih dahulu!";
/// Asked before a note is deleted.
pub const DELETE_NOTE_CONFIRM: &str = "Apakah Anda yakin ingin menghapus catatan ini?";

/// Alert/confirm capability provided by the display surface.
pub trait UserPrompt {
    /// Shows a message and returns once acknowledged.
    fn alert(&self, message: &str);
    /// Asks a yes/no question; `true` means the user confirmed.
    fn confirm(&self, message: &str) -> bool;
}

/// Prompt that answers every confirmation the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswerPrompt {
    pub answer: bool,
}

impl FixedAnswerPrompt {
    pub fn always_yes() -> Self {
        Self { answer: true }
    }

    pub fn always_no() -> Self {
        Self { answer: false }
    }
}

impl UserPrompt for FixedAnswerPrompt {
    fn alert(&self, _message: &str) {}

    fn confirm(&self, _message: &str) -> bool {
        self.answer
    }
}

/// Prompt that replays queued answers and records every message shown.
///
/// Confirmations beyond the queued answers are declined.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<bool>>,
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }
}

impl UserPrompt for ScriptedPrompt {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }
}
