//! Quote loader state machine.
//!
//! `Idle -> Loading -> {Success, Failure} -> Idle`. Entering `Loading` writes
//! placeholders to both targets; leaving it writes either the fetched quote
//! or the fixed fallback pair. Failures never escape this module.

use crate::model::quote::{Quote, QUOTE_LOADING_AUTHOR, QUOTE_LOADING_TEXT};
use crate::net::quote_source::{QuoteFetchError, QuoteSource};
use crate::ui::targets::QuoteTargets;
use log::{error, info};
use std::cell::Cell;

/// Observable loader phase between renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotePhase {
    Idle,
    Loading,
}

/// Result of one load cycle, after the targets were written.
#[derive(Debug)]
pub enum QuoteOutcome {
    /// Fetched quote is on display.
    Success(Quote),
    /// Fallback pair is on display.
    Failure(QuoteFetchError),
    /// Surface has no quote targets; nothing was fetched.
    Skipped,
}

impl QuoteOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

pub struct QuoteLoader<S: QuoteSource> {
    source: S,
    phase: Cell<QuotePhase>,
}

impl<S: QuoteSource> QuoteLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            phase: Cell::new(QuotePhase::Idle),
        }
    }

    pub fn phase(&self) -> QuotePhase {
        self.phase.get()
    }

    /// Runs one full load cycle against `targets`.
    pub async fn load(&self, targets: &mut dyn QuoteTargets) -> QuoteOutcome {
        if !targets.has_quote_targets() {
            info!("event=quote_load module=quote status=skipped reason=no_targets");
            return QuoteOutcome::Skipped;
        }

        info!("event=quote_load module=quote status=start");
        self.phase.set(QuotePhase::Loading);
        targets.set_quote_text(QUOTE_LOADING_TEXT);
        targets.set_quote_author(QUOTE_LOADING_AUTHOR);

        let result = self.source.fetch_quote().await;
        self.phase.set(QuotePhase::Idle);

        match result {
            Ok(quote) => {
                info!(
                    "event=quote_load module=quote status=ok content_len={}",
                    quote.content.chars().count()
                );
                show(targets, &quote);
                QuoteOutcome::Success(quote)
            }
            Err(err) => {
                error!(
                    "event=quote_load module=quote status=error error_code={} error={}",
                    err.code(),
                    err
                );
                show(targets, &Quote::fallback());
                QuoteOutcome::Failure(err)
            }
        }
    }
}

fn show(targets: &mut dyn QuoteTargets, quote: &Quote) {
    targets.set_quote_text(&quote.display_text());
    targets.set_quote_author(&quote.display_author());
}
