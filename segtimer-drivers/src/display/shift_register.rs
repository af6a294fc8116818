//! 74HC595 segment driver
//!
//! The segment byte is shifted out MSB first, so the decimal point lands
//! on QH and segment A on QA. Outputs only change on the latch pulse.

use segtimer_display::SegmentWriter;
use segtimer_hal::OutputPin;

/// Segment lines behind a serial-in, parallel-out shift register
pub struct ShiftRegisterSegments<C, D, L> {
    /// SRCLK
    clock: C,
    /// SER
    data: D,
    /// RCLK
    latch: L,
}

impl<C: OutputPin, D: OutputPin, L: OutputPin> ShiftRegisterSegments<C, D, L> {
    /// Create the driver with clock and latch idle low
    pub fn new(mut clock: C, mut data: D, mut latch: L) -> Self {
        clock.set_low();
        data.set_low();
        latch.set_low();
        Self { clock, data, latch }
    }

    /// Release the pins
    pub fn into_inner(self) -> (C, D, L) {
        (self.clock, self.data, self.latch)
    }
}

impl<C: OutputPin, D: OutputPin, L: OutputPin> SegmentWriter for ShiftRegisterSegments<C, D, L> {
    fn write_segments(&mut self, pattern: u8) {
        for bit in (0..8).rev() {
            self.data.set_state(pattern & (1 << bit) != 0);
            self.clock.set_high();
            self.clock.set_low();
        }

        self.latch.set_high();
        self.latch.set_low();
    }
}
