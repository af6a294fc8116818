//! Segment drive backend trait
//!
//! Defines the single capability that differs between drive mechanisms.

/// Display errors
///
/// Drive lines cannot fail; these only report arguments outside the
/// rendering contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Numeric value above 9999
    ValueOutOfRange,
    /// Decimal point index outside 0..=3
    InvalidDecimalPoint,
    /// Message longer than four characters
    MessageTooLong,
}

/// Commit a segment pattern to the segment lines
///
/// Implementations must map bit 0..6 to segments A..G and bit 7 to the
/// decimal point, so every backend lights the same segments for the same
/// byte. Polarity inversion is applied by the caller.
pub trait SegmentWriter {
    /// Drive the segment lines with `pattern`
    fn write_segments(&mut self, pattern: u8);
}

impl<T: SegmentWriter + ?Sized> SegmentWriter for &mut T {
    fn write_segments(&mut self, pattern: u8) {
        T::write_segments(self, pattern);
    }
}
