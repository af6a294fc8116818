//! Set-point and remaining-time arithmetic
//!
//! The user dials a [`SetPoint`] in whole steps (5 s by default). Entering
//! the active branch converts it once into a [`Remaining`] minutes/seconds
//! pair, which is then decremented one second at a time.

/// Largest minutes value a 4-digit `MM.SS` display can show
pub const MAX_MINUTES: u8 = 99;

/// Largest duration in seconds (99:59)
pub const MAX_TOTAL_SECONDS: u32 = MAX_MINUTES as u32 * 60 + 59;

/// Number of steps dialed on the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SetPoint(u16);

impl SetPoint {
    /// Zero steps
    pub const ZERO: Self = Self(0);

    /// Create a set-point, saturating at `max`
    pub fn new(steps: u16, max: u16) -> Self {
        Self(steps.min(max))
    }

    /// Largest set-point representable with the given step size
    pub fn max_steps(step_seconds: u16) -> u16 {
        (MAX_TOTAL_SECONDS / u32::from(step_seconds.max(1))) as u16
    }

    /// Number of steps
    pub fn steps(self) -> u16 {
        self.0
    }

    /// Check if no time has been dialed
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// One step up, stopping at `max`
    pub fn step_up(self, max: u16) -> Self {
        Self(self.0.saturating_add(1).min(max))
    }

    /// One step down, stopping at zero
    pub fn step_down(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Total seconds represented by this set-point
    pub fn total_seconds(self, step_seconds: u16) -> u32 {
        u32::from(self.0) * u32::from(step_seconds)
    }

    /// Convert to minutes and seconds, clamping minutes to 99
    pub fn to_remaining(self, step_seconds: u16) -> Remaining {
        Remaining::from_total_seconds(self.total_seconds(step_seconds))
    }
}

/// Countdown value as minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Remaining {
    minutes: u8,
    seconds: u8,
}

impl Remaining {
    /// 00:00
    pub const ZERO: Self = Self {
        minutes: 0,
        seconds: 0,
    };

    /// Create from minutes and seconds
    ///
    /// Minutes are clamped to 99 and seconds to 59.
    pub fn new(minutes: u8, seconds: u8) -> Self {
        Self {
            minutes: minutes.min(MAX_MINUTES),
            seconds: seconds.min(59),
        }
    }

    /// Split a number of seconds into minutes and seconds
    ///
    /// Minutes above 99 are clamped; the seconds part is kept as is.
    pub fn from_total_seconds(total: u32) -> Self {
        let minutes = (total / 60).min(u32::from(MAX_MINUTES)) as u8;
        let seconds = (total % 60) as u8;
        Self { minutes, seconds }
    }

    /// Minutes part
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds part
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Total seconds
    pub fn total_seconds(&self) -> u32 {
        u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }

    /// Check if the countdown is at 00:00
    pub fn is_zero(&self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }

    /// One second less, borrowing from minutes
    ///
    /// Returns `None` at 00:00; the value never goes negative.
    pub fn decrement(self) -> Option<Self> {
        match (self.minutes, self.seconds) {
            (0, 0) => None,
            (m, 0) => Some(Self {
                minutes: m - 1,
                seconds: 59,
            }),
            (m, s) => Some(Self {
                minutes: m,
                seconds: s - 1,
            }),
        }
    }

    /// Value for a 4-digit `MMSS` display
    pub fn display_value(&self) -> u16 {
        u16::from(self.minutes) * 100 + u16::from(self.seconds)
    }
}
