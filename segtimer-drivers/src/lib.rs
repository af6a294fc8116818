//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in segtimer-core and segtimer-display on top of the segtimer-hal pins:
//!
//! - Relay output (active-high or active-low)
//! - Segment writers (direct GPIO lines, 74HC595 shift register)
//! - Knob input (quadrature encoder, debounced push button)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
pub mod relay;
