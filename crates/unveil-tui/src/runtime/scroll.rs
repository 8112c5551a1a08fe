//! Deferred scroll-into-view.
//!
//! The reducer asks for a scroll after every change that moves the current
//! line. The request is held until a frame containing the change has been
//! drawn and the settle delay has passed, so the scroll uses the new layout.
//! Only the newest request is kept.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct Pending {
    generation: u64,
    due: Instant,
    drawn: bool,
}

#[derive(Debug)]
pub struct ScrollTimer {
    delay: Duration,
    pending: Option<Pending>,
}

impl ScrollTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replaces any pending request.
    pub fn schedule(&mut self, generation: u64, now: Instant) {
        self.pending = Some(Pending {
            generation,
            due: now + self.delay,
            drawn: false,
        });
    }

    /// Records that a frame was drawn after the request was made.
    pub fn mark_drawn(&mut self) {
        if let Some(pending) = &mut self.pending {
            pending.drawn = true;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the request can fire, if one is waiting on the clock.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .filter(|p| p.drawn)
            .map(|p| p.due.saturating_duration_since(now))
    }

    /// Takes the generation of a request that is drawn and due.
    pub fn take_due(&mut self, now: Instant) -> Option<u64> {
        match self.pending {
            Some(p) if p.drawn && now >= p.due => {
                self.pending = None;
                Some(p.generation)
            }
            _ => None,
        }
    }
}
