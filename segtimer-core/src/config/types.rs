//! Configuration type definitions

use crate::display::{text, Text};
use crate::timer::SetPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default seconds per encoder detent
pub const DEFAULT_STEP_SECONDS: u16 = 5;

/// Longest allowed step (one minute per detent)
pub const MAX_STEP_SECONDS: u16 = 60;

/// Errors reported by [`TimerConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Step size outside 1..=60 seconds
    InvalidStep,
    /// A message has no characters
    EmptyMessage,
}

/// Timer behavior configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimerConfig {
    /// Seconds added or removed per encoder detent
    pub step_seconds: u16,
    /// Message shown at power-on
    pub startup_text: Text,
    /// How long the power-on message stays up (ms)
    pub startup_hold_ms: u32,
    /// Message shown when the countdown is paused
    pub pause_text: Text,
    /// How long the pause message stays up before the frozen time shows (ms)
    pub pause_hold_ms: u32,
    /// Message shown when the countdown ends or is aborted
    pub end_text: Text,
    /// How long the end message stays up (ms)
    pub end_hold_ms: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            step_seconds: DEFAULT_STEP_SECONDS,
            startup_text: text("HI"),
            startup_hold_ms: 1000,
            pause_text: text("PAUS"),
            pause_hold_ms: 1000,
            end_text: text("END"),
            end_hold_ms: 2000,
        }
    }
}

impl TimerConfig {
    /// Largest set-point for the configured step size
    pub fn max_set_point(&self) -> u16 {
        SetPoint::max_steps(self.step_seconds)
    }

    /// Check the configuration for values the controller cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_seconds == 0 || self.step_seconds > MAX_STEP_SECONDS {
            return Err(ConfigError::InvalidStep);
        }

        if self.startup_text.is_empty() || self.pause_text.is_empty() || self.end_text.is_empty()
        {
            return Err(ConfigError::EmptyMessage);
        }

        Ok(())
    }

    /// This configuration if it validates, the defaults otherwise
    pub fn or_default(self) -> Result<Self, (ConfigError, Self)> {
        match self.validate() {
            Ok(()) => Ok(self),
            Err(e) => Err((e, Self::default())),
        }
    }
}
