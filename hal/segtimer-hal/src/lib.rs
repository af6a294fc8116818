//! Segtimer Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the timer needs.
//! Chip-specific crates implement them, so the controller, display and
//! input logic can be exercised on the host with mock pins and clocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (segtimer-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segtimer-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ segtimer-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`clock::Clock`] - Free-running millisecond counter

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;

pub use clock::{deadline_reached, elapsed_ms, Clock};
pub use gpio::{InputPin, OutputPin};
