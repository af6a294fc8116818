//! Direct GPIO segment lines
//!
//! One pin per segment: index 0..6 = A..G, index 7 = decimal point.

use segtimer_display::SegmentWriter;
use segtimer_hal::OutputPin;

/// Eight segment lines driven straight from the MCU
pub struct ParallelSegments<P> {
    pins: [P; 8],
}

impl<P: OutputPin> ParallelSegments<P> {
    /// Create from pins ordered A, B, C, D, E, F, G, DP
    pub fn new(pins: [P; 8]) -> Self {
        Self { pins }
    }

    /// Release the pins
    pub fn into_inner(self) -> [P; 8] {
        self.pins
    }
}

impl<P: OutputPin> SegmentWriter for ParallelSegments<P> {
    fn write_segments(&mut self, pattern: u8) {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            pin.set_state(pattern & (1 << bit) != 0);
        }
    }
}
