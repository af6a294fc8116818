//! Drift-free one-second ticker
//!
//! Keeps a baseline instant and advances it by exactly one period each
//! time it fires, instead of re-reading the clock. A late poll therefore
//! leaves the excess pending for the next poll rather than losing it, and
//! the ticker never fires early.

use segtimer_hal::elapsed_ms;

/// Countdown period
pub const SECOND_MS: u32 = 1000;

/// Accumulating one-second ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SecondTicker {
    /// Instant of the last accounted second
    last_ms: u32,
}

impl SecondTicker {
    /// Create a ticker whose first second ends at `now_ms + 1000`
    pub fn new(now_ms: u32) -> Self {
        Self { last_ms: now_ms }
    }

    /// Restart counting from `now_ms`, discarding any partial second
    pub fn rebase(&mut self, now_ms: u32) {
        self.last_ms = now_ms;
    }

    /// Fire at most once if a full second has accumulated
    pub fn poll(&mut self, now_ms: u32) -> bool {
        if elapsed_ms(self.last_ms, now_ms) >= SECOND_MS {
            self.last_ms = self.last_ms.wrapping_add(SECOND_MS);
            true
        } else {
            false
        }
    }

    /// Milliseconds accumulated towards the next second
    pub fn pending_ms(&self, now_ms: u32) -> u32 {
        elapsed_ms(self.last_ms, now_ms)
    }
}
