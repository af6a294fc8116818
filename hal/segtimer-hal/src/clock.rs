//! Monotonic millisecond clock
//!
//! The timer runs against a free-running `u32` millisecond counter that
//! wraps after ~49.7 days. All comparisons go through [`elapsed_ms`] so a
//! rollover between two readings is harmless.

/// Free-running millisecond counter
pub trait Clock {
    /// Milliseconds since an arbitrary epoch, wrapping on overflow
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        T::now_ms(self)
    }
}

/// Milliseconds from `since` to `now`, rollover-safe
#[inline]
pub fn elapsed_ms(since: u32, now: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Check whether `duration_ms` has passed since `since`
#[inline]
pub fn deadline_reached(since: u32, duration_ms: u32, now: u32) -> bool {
    elapsed_ms(since, now) >= duration_ms
}
