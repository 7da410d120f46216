// web_app/listing/debounce.rs - Last-write-wins debouncing of search keystrokes
//
// The debouncer owns no timer. Every keystroke gets a `DebounceTicket`;
// whoever drives time (a Leptos `set_timeout`, a tokio task) hands the
// ticket back after the quiet period and only the newest ticket settles.

use std::time::Duration;

/// Proof of one pushed keystroke
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

/// Working copy of a value that is committed only after input goes quiet
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<String>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Quiet period the driver should wait before settling a ticket.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new value, superseding every earlier ticket.
    pub fn push(&mut self, value: impl Into<String>) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value.into());
        DebounceTicket(self.generation)
    }

    /// Take the pending value if `ticket` is still the newest one.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<String> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Latest value not yet settled, if any
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Drop the pending value and invalidate outstanding tickets.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}
