//! What the 4-digit display should show
//!
//! The controller only decides the content; painting it onto segments is
//! the display crate's job.

use heapless::String;

use crate::timer::Remaining;

/// Number of digit positions on the panel
pub const DIGIT_COUNT: usize = 4;

/// Largest value that fits on the panel
pub const MAX_VALUE: u16 = 9999;

/// Maximum message length
pub const MESSAGE_LEN: usize = DIGIT_COUNT;

/// Digit whose decimal point separates minutes from seconds (`MM.SS`)
pub const MINUTES_SEPARATOR_DIGIT: u8 = 1;

/// Short message text
pub type Text = String<MESSAGE_LEN>;

/// Build a message text, dropping anything past four characters
pub fn text(s: &str) -> Text {
    let mut out = Text::new();
    for ch in s.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// Content for one rendering instant
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayContent {
    /// Four-digit number with an optional decimal point (0 = leftmost)
    Digits {
        value: u16,
        decimal_point: Option<u8>,
    },
    /// Text message and how much longer it should stay up
    Message { text: Text, hold_ms: u32 },
}

impl DisplayContent {
    /// Remaining time as `MM.SS`
    pub fn countdown(remaining: Remaining) -> Self {
        DisplayContent::Digits {
            value: remaining.display_value(),
            decimal_point: Some(MINUTES_SEPARATOR_DIGIT),
        }
    }

    /// Check if this is a text message
    pub fn is_message(&self) -> bool {
        matches!(self, DisplayContent::Message { .. })
    }
}
