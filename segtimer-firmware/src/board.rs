//! Board wiring
//!
//! Pin assignment for a Raspberry Pi Pico:
//!
//! | Function               | GPIO             |
//! |------------------------|------------------|
//! | Segments A-G, DP       | 2-9              |
//! | 74HC595 SER/SRCLK/RCLK | 2 / 3 / 4        |
//! | Digit select 1-4       | 10-13 (1 = left) |
//! | Encoder A / B          | 14 / 15          |
//! | Encoder push button    | 16               |
//! | Relay                  | 17               |
//!
//! With the `shift-register` feature GPIO 5-9 are left unused.

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;
use segtimer_display::Multiplexer;
use segtimer_drivers::input::{DebouncedButton, KnobInput, QuadratureEncoder};
use segtimer_drivers::relay::GpioRelay;
use segtimer_hal_rp2040::{RpInput, RpOutput};

#[cfg(not(feature = "shift-register"))]
use segtimer_drivers::display::ParallelSegments;
#[cfg(feature = "shift-register")]
use segtimer_drivers::display::ShiftRegisterSegments;

use crate::config;

pub type Relay = GpioRelay<RpOutput<'static>>;

pub type Knob = KnobInput<RpInput<'static>, RpInput<'static>, RpInput<'static>>;

#[cfg(not(feature = "shift-register"))]
pub type Segments = ParallelSegments<RpOutput<'static>>;

#[cfg(feature = "shift-register")]
pub type Segments =
    ShiftRegisterSegments<RpOutput<'static>, RpOutput<'static>, RpOutput<'static>>;

pub type Display = Multiplexer<Segments, RpOutput<'static>>;

/// Everything the control loop drives
pub struct Board {
    pub relay: Relay,
    pub knob: Knob,
    pub display: Display,
}

fn output(pin: Output<'static>) -> RpOutput<'static> {
    RpOutput::new(pin)
}

fn input(pin: Input<'static>) -> RpInput<'static> {
    RpInput::new(pin)
}

/// Claim the pins and build the drivers
///
/// The relay pin starts at its released level so the load never sees a
/// glitch during boot.
pub fn init(p: Peripherals, now_ms: u32) -> Board {
    let relay_idle = Level::from(config::RELAY_ACTIVE_LOW);
    let relay = GpioRelay::new(
        output(Output::new(p.PIN_17, relay_idle)),
        config::RELAY_ACTIVE_LOW,
    );

    let encoder = QuadratureEncoder::new(
        input(Input::new(p.PIN_14, Pull::Up)),
        input(Input::new(p.PIN_15, Pull::Up)),
    );
    let button = DebouncedButton::new(
        input(Input::new(p.PIN_16, Pull::Up)),
        config::BUTTON,
        now_ms,
    );
    let knob = KnobInput::new(encoder, button);

    #[cfg(not(feature = "shift-register"))]
    let segments = {
        let off = Level::from(config::DISPLAY.polarity.segment_active_low);
        ParallelSegments::new([
            output(Output::new(p.PIN_2, off)),
            output(Output::new(p.PIN_3, off)),
            output(Output::new(p.PIN_4, off)),
            output(Output::new(p.PIN_5, off)),
            output(Output::new(p.PIN_6, off)),
            output(Output::new(p.PIN_7, off)),
            output(Output::new(p.PIN_8, off)),
            output(Output::new(p.PIN_9, off)),
        ])
    };

    // SRCLK, SER, RCLK
    #[cfg(feature = "shift-register")]
    let segments = ShiftRegisterSegments::new(
        output(Output::new(p.PIN_3, Level::Low)),
        output(Output::new(p.PIN_2, Level::Low)),
        output(Output::new(p.PIN_4, Level::Low)),
    );

    let digit_idle = Level::from(config::DISPLAY.polarity.digit_active_low);
    let digits = [
        output(Output::new(p.PIN_10, digit_idle)),
        output(Output::new(p.PIN_11, digit_idle)),
        output(Output::new(p.PIN_12, digit_idle)),
        output(Output::new(p.PIN_13, digit_idle)),
    ];
    let display = Multiplexer::new(segments, digits, config::DISPLAY);

    Board {
        relay,
        knob,
        display,
    }
}
