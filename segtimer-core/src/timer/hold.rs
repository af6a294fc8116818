//! Timed message holds
//!
//! A hold pins a short text message on the display until a deadline. While
//! a hold is pending the controller suspends state evaluation; the main
//! loop keeps multiplexing the message and resumes the controller once the
//! deadline has passed.

use segtimer_hal::{deadline_reached, elapsed_ms};

use crate::display::Text;

/// A message shown until a deadline
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MessageHold {
    text: Text,
    started_ms: u32,
    duration_ms: u32,
}

impl MessageHold {
    /// Start holding `text` at `now_ms` for `duration_ms`
    pub fn new(text: Text, now_ms: u32, duration_ms: u32) -> Self {
        Self {
            text,
            started_ms: now_ms,
            duration_ms,
        }
    }

    /// Message being held
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Total hold duration
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Check if the deadline has passed
    pub fn is_expired(&self, now_ms: u32) -> bool {
        deadline_reached(self.started_ms, self.duration_ms, now_ms)
    }

    /// Milliseconds left until the deadline
    pub fn remaining_ms(&self, now_ms: u32) -> u32 {
        self.duration_ms
            .saturating_sub(elapsed_ms(self.started_ms, now_ms))
    }
}
