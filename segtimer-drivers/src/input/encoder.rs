//! Rotary encoder decoder
//!
//! Decodes quadrature encoder signals into detent steps.
//! Uses a state machine so contact bounce within a detent is rejected.

use segtimer_core::traits::EncoderStep;
use segtimer_hal::InputPin;

/// Decoder states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    Idle,
    CwStep1,
    CwStep2,
    CcwStep1,
    CcwStep2,
}

/// Quadrature encoder on two pulled-up input pins
pub struct QuadratureEncoder<A, B> {
    a: A,
    b: B,
    phase: Phase,
    last_a: bool,
    last_b: bool,
}

impl<A: InputPin, B: InputPin> QuadratureEncoder<A, B> {
    /// Create a decoder, sampling the current pin levels as the rest position
    pub fn new(a: A, b: B) -> Self {
        let last_a = a.is_high();
        let last_b = b.is_high();

        Self {
            a,
            b,
            phase: Phase::Idle,
            last_a,
            last_b,
        }
    }

    /// Sample the pins and report a completed detent
    ///
    /// Must be called often enough to see every intermediate phase
    /// (every few milliseconds for a hand-turned knob).
    pub fn poll(&mut self) -> EncoderStep {
        let a = self.a.is_high();
        let b = self.b.is_high();

        if a == self.last_a && b == self.last_b {
            return EncoderStep::None;
        }

        let step = self.decode(a, b);

        self.last_a = a;
        self.last_b = b;

        step
    }

    /// Advance the decoder with a new pin reading
    ///
    /// CW:  A falls first. Idle (1,1) -> (0,1) -> (0,0) -> either rises -> step
    /// CCW: B falls first. Idle (1,1) -> (1,0) -> (0,0) -> either rises -> step
    fn decode(&mut self, a: bool, b: bool) -> EncoderStep {
        match self.phase {
            Phase::Idle => {
                if !a && b {
                    self.phase = Phase::CwStep1;
                } else if a && !b {
                    self.phase = Phase::CcwStep1;
                }
                EncoderStep::None
            }
            Phase::CwStep1 | Phase::CcwStep1 => {
                if !a && !b {
                    self.phase = if self.phase == Phase::CwStep1 {
                        Phase::CwStep2
                    } else {
                        Phase::CcwStep2
                    };
                } else if a && b {
                    // Bounced back to rest
                    self.phase = Phase::Idle;
                }
                EncoderStep::None
            }
            Phase::CwStep2 => self.complete(a, b, EncoderStep::Clockwise),
            Phase::CcwStep2 => self.complete(a, b, EncoderStep::CounterClockwise),
        }
    }

    fn complete(&mut self, a: bool, b: bool, step: EncoderStep) -> EncoderStep {
        if a || b {
            self.phase = Phase::Idle;
            step
        } else {
            EncoderStep::None
        }
    }
}
