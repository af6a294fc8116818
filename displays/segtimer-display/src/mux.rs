//! Digit multiplexing
//!
//! Only one digit is ever enabled. Each scan step disables every digit,
//! commits the next segment pattern and then enables exactly that digit,
//! so a pattern is never visible on the wrong position.

use embedded_hal::delay::DelayNs;
use embedded_hal_async::delay::DelayNs as AsyncDelayNs;
use segtimer_core::display::{DisplayContent, DIGIT_COUNT};
use segtimer_hal::{deadline_reached, Clock, OutputPin};

use crate::backend::{DisplayError, SegmentWriter};
use crate::font;
use crate::frame::Frame;

/// Electrical polarity of the panel lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Polarity {
    /// Digit select lines enable their digit when driven low
    pub digit_active_low: bool,
    /// Segment lines light their segment when driven low
    pub segment_active_low: bool,
}

impl Polarity {
    /// Common-cathode panel with digits sunk directly by the MCU
    pub const COMMON_CATHODE: Self = Self {
        digit_active_low: true,
        segment_active_low: false,
    };

    /// Common-anode panel with digits sourced directly by the MCU
    pub const COMMON_ANODE: Self = Self {
        digit_active_low: false,
        segment_active_low: true,
    };

    /// Segment byte as it must appear on the lines
    pub fn segments(self, pattern: u8) -> u8 {
        if self.segment_active_low {
            !pattern
        } else {
            pattern
        }
    }

    /// Pin level that enables (`on`) or disables a digit
    pub fn digit_level(self, on: bool) -> bool {
        on != self.digit_active_low
    }
}

impl Default for Polarity {
    fn default() -> Self {
        Self::COMMON_CATHODE
    }
}

/// Multiplexer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MuxConfig {
    /// How long each digit stays lit per refresh pass (us)
    pub dwell_us: u32,
    /// Panel line polarity
    pub polarity: Polarity,
}

impl Default for MuxConfig {
    fn default() -> Self {
        Self {
            dwell_us: 2000,
            polarity: Polarity::default(),
        }
    }
}

/// Scans a [`Frame`] onto four digit-select lines
pub struct Multiplexer<W, P> {
    writer: W,
    digits: [P; DIGIT_COUNT],
    config: MuxConfig,
    frame: Frame,
    cursor: usize,
}

impl<W: SegmentWriter, P: OutputPin> Multiplexer<W, P> {
    /// Create a multiplexer; the panel starts dark
    pub fn new(writer: W, digits: [P; DIGIT_COUNT], config: MuxConfig) -> Self {
        let mut mux = Self {
            writer,
            digits,
            config,
            frame: Frame::BLANK,
            cursor: 0,
        };
        mux.blank();
        mux
    }

    /// Frame currently being scanned
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Replace the frame; takes effect from the next scan step
    pub fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }

    /// Load a four-digit number
    ///
    /// On error the previous frame is kept.
    pub fn set_digits(&mut self, value: u16, decimal_point: Option<u8>) -> Result<(), DisplayError> {
        self.frame = Frame::from_digits(value, decimal_point)?;
        Ok(())
    }

    /// Load a message of up to four characters
    pub fn set_message(&mut self, text: &str) -> Result<(), DisplayError> {
        self.frame = Frame::from_text(text)?;
        Ok(())
    }

    /// Load whatever the controller wants shown
    pub fn show(&mut self, content: &DisplayContent) -> Result<(), DisplayError> {
        self.frame = Frame::from_content(content)?;
        Ok(())
    }

    /// Light the next digit of the current frame
    pub fn scan_next(&mut self) {
        self.deselect_all();

        let pattern = self.config.polarity.segments(self.frame.pattern(self.cursor));
        self.writer.write_segments(pattern);

        let level = self.config.polarity.digit_level(true);
        self.digits[self.cursor].set_state(level);

        self.cursor = (self.cursor + 1) % DIGIT_COUNT;
    }

    /// Turn every digit and segment off
    pub fn blank(&mut self) {
        self.deselect_all();
        self.writer
            .write_segments(self.config.polarity.segments(font::BLANK));
        self.cursor = 0;
    }

    /// One full pass over all four digits, blocking for the dwell time on each
    ///
    /// The panel is left dark afterwards so no digit stays lit while the
    /// caller does other work.
    pub fn refresh<D: DelayNs>(&mut self, delay: &mut D) {
        for _ in 0..DIGIT_COUNT {
            self.scan_next();
            delay.delay_us(self.config.dwell_us);
        }
        self.deselect_all();
    }

    /// One full pass over all four digits, yielding during each dwell
    pub async fn refresh_async<D: AsyncDelayNs>(&mut self, delay: &mut D) {
        for _ in 0..DIGIT_COUNT {
            self.scan_next();
            delay.delay_us(self.config.dwell_us).await;
        }
        self.deselect_all();
    }

    /// Show a number for one refresh pass
    pub fn render_digits<D: DelayNs>(
        &mut self,
        value: u16,
        decimal_point: Option<u8>,
        delay: &mut D,
    ) -> Result<(), DisplayError> {
        self.set_digits(value, decimal_point)?;
        self.refresh(delay);
        Ok(())
    }

    /// Show a message for `duration_ms`, blocking the caller
    ///
    /// The panel is refreshed for the whole duration and blanked at the end.
    pub fn render_message<C: Clock, D: DelayNs>(
        &mut self,
        text: &str,
        duration_ms: u32,
        clock: &C,
        delay: &mut D,
    ) -> Result<(), DisplayError> {
        self.set_message(text)?;

        let started = clock.now_ms();
        while !deadline_reached(started, duration_ms, clock.now_ms()) {
            self.refresh(delay);
        }

        self.blank();
        Ok(())
    }

    /// Show a message for `duration_ms` without blocking other tasks
    pub async fn render_message_async<C: Clock, D: AsyncDelayNs>(
        &mut self,
        text: &str,
        duration_ms: u32,
        clock: &C,
        delay: &mut D,
    ) -> Result<(), DisplayError> {
        self.set_message(text)?;

        let started = clock.now_ms();
        while !deadline_reached(started, duration_ms, clock.now_ms()) {
            self.refresh_async(delay).await;
        }

        self.blank();
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &MuxConfig {
        &self.config
    }

    /// Release the segment writer and digit pins
    pub fn release(self) -> (W, [P; DIGIT_COUNT]) {
        (self.writer, self.digits)
    }

    fn deselect_all(&mut self) {
        let level = self.config.polarity.digit_level(false);
        for digit in self.digits.iter_mut() {
            digit.set_state(level);
        }
    }
}
