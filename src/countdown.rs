//! Round countdown owned by the runner.
//!
//! Driven by the same fixed-timestep tick as the round's idle timer. The core
//! never looks at it; when it expires the runner ends the round.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration_ms: u32,
    remaining_ms: u32,
    running: bool,
    expired: bool,
}

impl Countdown {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            remaining_ms: duration_ms,
            running: false,
            expired: false,
        }
    }

    pub fn start(&mut self) {
        if !self.expired {
            self.running = true;
        }
    }

    /// Halt without expiring (the round was won).
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Back to the full duration, stopped.
    pub fn reset(&mut self) {
        *self = Self::new(self.duration_ms);
    }

    /// Advance by `elapsed_ms`. Returns true on the tick that reaches zero, never again.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.running {
            return false;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.running = false;
            self.expired = true;
            return true;
        }
        false
    }

    pub fn expired(&self) -> bool {
        self.expired
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    /// Whole seconds left, rounded up so "1" shows until the very end.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_ms.div_ceil(1000)
    }
}
