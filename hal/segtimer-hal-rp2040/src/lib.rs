//! RP2040-specific HAL for the relay timer firmware
//!
//! Bridges `embassy-rp` GPIO and the `embassy-time` driver to the
//! `segtimer-hal` traits:
//! - Output and input pin wrappers
//! - Millisecond clock backed by the embassy time driver

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;

pub use clock::EmbassyClock;
pub use gpio::{RpInput, RpOutput};
