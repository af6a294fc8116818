//! State machine definition
//!
//! Relay behavior and display content are a function of the current state;
//! the next state is a function of the current state and an event.

use super::events::Event;

/// Timer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Set-point is being converted into the remaining duration
    Init,
    /// Waiting for the user to dial a duration and press start
    Idle,
    /// Start accepted, relay energized, countdown baseline taken
    Armed,
    /// Counting down
    Running,
    /// Countdown frozen by the user, relay still energized
    Paused,
    /// Countdown finished or aborted, relay released
    Ended,
}

impl State {
    /// Check if the relay must be energized in this state
    pub fn relay_energized(&self) -> bool {
        matches!(self, State::Armed | State::Running | State::Paused)
    }

    /// Check if the set-point may be edited in this state
    pub fn accepts_adjustment(&self) -> bool {
        matches!(self, State::Idle)
    }

    /// Process an event and return the next state
    ///
    /// Events that have no meaning in the current state leave it unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Init, Loaded) => Idle,

            (Idle, Adjusted) => Init,
            (Idle, Start) => Armed,

            (Armed, Engaged) => Running,

            (Running, Pause) => Paused,
            (Running, Expired) => Ended,

            (Paused, Resume) => Running,
            (Paused, Abort) => Ended,

            (Ended, Reset) => Init,

            // Default: stay in current state
            _ => self,
        }
    }
}
