//! 7-segment display rendering for the relay timer
//!
//! This crate provides:
//! - Fixed segment tables for digits and the letters A-Z
//! - `Frame`, the four segment patterns for one rendering instant
//! - `SegmentWriter`, the one primitive a drive backend has to supply
//! - `Multiplexer`, which scans a frame onto the digit-select lines
//!
//! # Architecture
//!
//! Both supported backends (direct GPIO segment lines and a serial-in
//! shift register) share the digit-select lines and the scan order; only
//! the way a segment byte reaches the segment lines differs. Backends
//! therefore implement `SegmentWriter` and nothing else.
//!
//! Bit layout of a segment byte: bit 0..6 = segments A..G, bit 7 = decimal
//! point.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod font;
pub mod frame;
pub mod mux;

// Re-export key types
pub use backend::{DisplayError, SegmentWriter};
pub use frame::Frame;
pub use mux::{MuxConfig, Multiplexer, Polarity};
