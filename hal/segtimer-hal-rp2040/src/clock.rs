//! Millisecond clock backed by the embassy time driver

use embassy_time::Instant;
use segtimer_hal::Clock;

/// Free-running millisecond counter
///
/// The embassy tick counter is 64-bit; the timer only needs the low 32 bits
/// because every comparison is wrapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl EmbassyClock {
    /// Create the clock handle
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
