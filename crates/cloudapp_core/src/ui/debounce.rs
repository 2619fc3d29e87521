//! Trailing-edge debounce for resize events.

use std::time::{Duration, Instant};

/// Quiet period after the last resize before it is reported.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(500);

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

/// Coalesces bursts of resize events into one settled size.
///
/// Time is supplied by the caller; nothing here sleeps or spawns.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<(ViewportSize, Instant)>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE)
    }
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records a resize, restarting the quiet period.
    pub fn record(&mut self, size: ViewportSize, at: Instant) {
        self.pending = Some((size, at));
    }

    /// Returns the settled size once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<ViewportSize> {
        match self.pending {
            Some((size, at)) if now.saturating_duration_since(at) >= self.delay => {
                self.pending = None;
                Some(size)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
