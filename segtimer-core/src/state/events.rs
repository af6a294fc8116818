//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Set-point handling
    /// Set-point converted into the remaining duration
    Loaded,
    /// Encoder moved the set-point
    Adjusted,

    // Countdown control
    /// Button pressed with a non-zero set-point
    Start,
    /// Relay engaged, countdown begins
    Engaged,
    /// Button pressed while counting down
    Pause,
    /// Button pressed while paused
    Resume,
    /// Button long-pressed while paused
    Abort,

    // Clock events
    /// Remaining time reached 00:00
    Expired,
    /// End of cycle, timer goes back to its set-point
    Reset,
}

impl Event {
    /// Check if this event is caused by the user
    pub fn is_user_event(&self) -> bool {
        matches!(
            self,
            Event::Adjusted | Event::Start | Event::Pause | Event::Resume | Event::Abort
        )
    }
}
