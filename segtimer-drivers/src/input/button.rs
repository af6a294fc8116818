//! Debounced push button with long-press detection
//!
//! Timing uses the caller's millisecond clock reading, so the button can
//! be polled from a plain loop without its own timer.

use segtimer_core::traits::ButtonEvent;
use segtimer_hal::{elapsed_ms, InputPin};

/// Button timing and wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// A level change must be stable this long before it counts (ms)
    pub debounce_ms: u32,
    /// Hold time that turns a press into a long press (ms)
    pub long_press_ms: u32,
    /// Pressed reads low (button to ground with pull-up)
    pub active_low: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 20,
            long_press_ms: 1000,
            active_low: true,
        }
    }
}

/// Push button producing [`ButtonEvent`]s
///
/// A short press is reported on release. A long press is reported once,
/// as soon as the hold time is reached, and its release is silent.
pub struct DebouncedButton<P> {
    pin: P,
    config: ButtonConfig,
    /// Last raw reading
    raw: bool,
    /// When the raw reading last changed
    raw_since_ms: u32,
    /// Debounced state
    pressed: bool,
    /// When the debounced press began
    pressed_at_ms: u32,
    /// The current press already produced its event
    consumed: bool,
}

impl<P: InputPin> DebouncedButton<P> {
    /// Create a button; a press already held at creation is ignored until released
    pub fn new(pin: P, config: ButtonConfig, now_ms: u32) -> Self {
        let raw = pin.is_high() != config.active_low;
        Self {
            pin,
            config,
            raw,
            raw_since_ms: now_ms,
            pressed: raw,
            pressed_at_ms: now_ms,
            consumed: raw,
        }
    }

    /// Sample the pin and report a completed gesture
    pub fn poll(&mut self, now_ms: u32) -> ButtonEvent {
        let raw = self.pin.is_high() != self.config.active_low;
        if raw != self.raw {
            self.raw = raw;
            self.raw_since_ms = now_ms;
        }

        if raw != self.pressed && elapsed_ms(self.raw_since_ms, now_ms) >= self.config.debounce_ms
        {
            self.pressed = raw;
            if raw {
                self.pressed_at_ms = self.raw_since_ms;
                self.consumed = false;
            } else if !self.consumed {
                self.consumed = true;
                return ButtonEvent::Press;
            }
        }

        if self.pressed
            && !self.consumed
            && elapsed_ms(self.pressed_at_ms, now_ms) >= self.config.long_press_ms
        {
            self.consumed = true;
            return ButtonEvent::LongPress;
        }

        ButtonEvent::None
    }

    /// Check if the button is currently held (debounced)
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}
