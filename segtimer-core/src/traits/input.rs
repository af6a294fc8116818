//! Input source trait and its event alphabet
//!
//! The encoder and button are decoded and debounced by the source; the
//! controller only ever sees these closed symbol sets.

/// Encoder movement since the last poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderStep {
    /// No detent passed
    #[default]
    None,
    /// One detent clockwise
    Clockwise,
    /// One detent counter-clockwise
    CounterClockwise,
}

/// Button gesture completed since the last poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Nothing happened
    #[default]
    None,
    /// Short press
    Press,
    /// Held past the long-press threshold
    LongPress,
}

/// Trait for the rotary encoder and push button
///
/// Both polls are non-blocking and called once per loop iteration. A
/// single physical action must never be reported twice.
pub trait InputSource {
    /// Poll the encoder for a completed detent
    fn poll_encoder(&mut self) -> EncoderStep;

    /// Poll the button for a completed gesture
    ///
    /// `now_ms` is the loop's clock reading, used for debounce and
    /// long-press timing.
    fn poll_button(&mut self, now_ms: u32) -> ButtonEvent;
}

/// Inputs gathered in one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Input {
    pub encoder: EncoderStep,
    pub button: ButtonEvent,
}

impl Input {
    /// No input at all
    pub const NONE: Self = Self {
        encoder: EncoderStep::None,
        button: ButtonEvent::None,
    };

    /// Poll both channels of a source
    pub fn poll<S: InputSource + ?Sized>(source: &mut S, now_ms: u32) -> Self {
        Self {
            encoder: source.poll_encoder(),
            button: source.poll_button(now_ms),
        }
    }

    /// Only an encoder step
    pub fn turn(step: EncoderStep) -> Self {
        Self {
            encoder: step,
            ..Self::NONE
        }
    }

    /// Only a button event
    pub fn button(event: ButtonEvent) -> Self {
        Self {
            button: event,
            ..Self::NONE
        }
    }

    /// Short press only
    pub fn press() -> Self {
        Self::button(ButtonEvent::Press)
    }

    /// Long press only
    pub fn long_press() -> Self {
        Self::button(ButtonEvent::LongPress)
    }

    /// Check if nothing happened
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}
