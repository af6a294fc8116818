//! Encoder knob with integrated push button

use segtimer_core::traits::{ButtonEvent, EncoderStep, InputSource};
use segtimer_hal::InputPin;

use super::button::DebouncedButton;
use super::encoder::QuadratureEncoder;

/// The timer's only input device
pub struct KnobInput<A, B, S> {
    encoder: QuadratureEncoder<A, B>,
    button: DebouncedButton<S>,
}

impl<A: InputPin, B: InputPin, S: InputPin> KnobInput<A, B, S> {
    /// Combine a decoded encoder and a debounced button
    pub fn new(encoder: QuadratureEncoder<A, B>, button: DebouncedButton<S>) -> Self {
        Self { encoder, button }
    }
}

impl<A: InputPin, B: InputPin, S: InputPin> InputSource for KnobInput<A, B, S> {
    fn poll_encoder(&mut self) -> EncoderStep {
        self.encoder.poll()
    }

    fn poll_button(&mut self, now_ms: u32) -> ButtonEvent {
        self.button.poll(now_ms)
    }
}
