//! GPIO relay output
//!
//! Drives the load relay from a single pin, directly or through a
//! transistor/optocoupler stage.

use segtimer_core::traits::RelayOutput;
use segtimer_hal::OutputPin;

/// GPIO relay output
///
/// Many relay modules pull the coil in when their input is low, so the
/// pin can be configured as active-high or active-low.
pub struct GpioRelay<P> {
    pin: P,
    /// If true, relay energized = pin LOW
    active_low: bool,
    energized: bool,
}

impl<P: OutputPin> GpioRelay<P> {
    /// Create a relay output, released
    pub fn new(pin: P, active_low: bool) -> Self {
        let mut relay = Self {
            pin,
            active_low,
            energized: false,
        };
        relay.set_energized(false);
        relay
    }

    /// Relay energized when the pin is high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Relay energized when the pin is low
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Release the pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> RelayOutput for GpioRelay<P> {
    fn set_energized(&mut self, on: bool) {
        self.energized = on;
        self.pin.set_state(on != self.active_low);
    }

    fn is_energized(&self) -> bool {
        self.energized
    }
}
