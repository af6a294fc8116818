//! Relay drivers

mod gpio;

pub use gpio::GpioRelay;
