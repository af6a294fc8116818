//! Segment patterns for one rendering instant

use segtimer_core::display::{DisplayContent, DIGIT_COUNT, MAX_VALUE, MESSAGE_LEN};

use crate::backend::DisplayError;
use crate::font;

/// Four segment patterns, index 0 = leftmost digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame([u8; DIGIT_COUNT]);

impl Frame {
    /// All digits dark
    pub const BLANK: Self = Self([font::BLANK; DIGIT_COUNT]);

    /// Four-digit number, most significant digit leftmost
    ///
    /// Leading zeros are drawn. `decimal_point` counts from the left.
    pub fn from_digits(value: u16, decimal_point: Option<u8>) -> Result<Self, DisplayError> {
        if value > MAX_VALUE {
            return Err(DisplayError::ValueOutOfRange);
        }

        let mut patterns = [font::BLANK; DIGIT_COUNT];
        let mut rest = value;
        for slot in patterns.iter_mut().rev() {
            *slot = font::digit((rest % 10) as u8);
            rest /= 10;
        }

        if let Some(index) = decimal_point {
            let slot = patterns
                .get_mut(usize::from(index))
                .ok_or(DisplayError::InvalidDecimalPoint)?;
            *slot |= font::DECIMAL_POINT;
        }

        Ok(Self(patterns))
    }

    /// Up to four characters, left aligned
    pub fn from_text(text: &str) -> Result<Self, DisplayError> {
        if text.chars().count() > MESSAGE_LEN {
            return Err(DisplayError::MessageTooLong);
        }

        let mut patterns = [font::BLANK; DIGIT_COUNT];
        for (slot, ch) in patterns.iter_mut().zip(text.chars()) {
            *slot = font::glyph(ch);
        }
        Ok(Self(patterns))
    }

    /// Frame for whatever the controller wants shown
    pub fn from_content(content: &DisplayContent) -> Result<Self, DisplayError> {
        match content {
            DisplayContent::Digits {
                value,
                decimal_point,
            } => Self::from_digits(*value, *decimal_point),
            DisplayContent::Message { text, .. } => Self::from_text(text.as_str()),
        }
    }

    /// Pattern for one digit position
    pub fn pattern(&self, index: usize) -> u8 {
        self.0.get(index).copied().unwrap_or(font::BLANK)
    }

    /// All four patterns
    pub fn patterns(&self) -> [u8; DIGIT_COUNT] {
        self.0
    }
}
