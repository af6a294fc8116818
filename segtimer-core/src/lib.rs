//! Board-agnostic core logic for the relay countdown timer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware:
//!
//! - State machine for the timer lifecycle
//! - Set-point and remaining-time arithmetic
//! - Drift-free one-second ticker and message holds
//! - The [`TimerController`] tying them to a relay output
//! - Collaborator traits (relay, input source) and configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod display;
pub mod state;
pub mod timer;
pub mod traits;

pub use controller::TimerController;
