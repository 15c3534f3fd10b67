//! Cancellable deferred callback, polled from the UI loop.

use std::time::{Duration, Instant};

/// One-shot timer. Has no callback of its own: the owner polls it each
/// frame and acts when [`poll`](Self::poll) reports that it fired.
#[derive(Debug, Default, Clone)]
pub struct DeferredTimer {
    deadline: Option<Instant>,
}

impl DeferredTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to fire `delay` after `now`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Disarms the timer. Idempotent; a no-op after firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
