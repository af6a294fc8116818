//! GPIO wrappers for RP2040
//!
//! Newtypes around the embassy-rp pin drivers so they can implement the
//! board-agnostic pin traits.

use embassy_rp::gpio::{Input, Output};
use segtimer_hal::{InputPin, OutputPin};

/// Push-pull output pin
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    /// Wrap an already configured output
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }

    /// Release the underlying embassy pin
    pub fn into_inner(self) -> Output<'d> {
        self.0
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Digital input pin
pub struct RpInput<'d>(Input<'d>);

impl<'d> RpInput<'d> {
    /// Wrap an already configured input
    pub fn new(pin: Input<'d>) -> Self {
        Self(pin)
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
