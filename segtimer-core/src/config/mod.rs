//! Configuration types
//!
//! Defines the tunable behavior of the timer. The firmware fills these from
//! its build-time validated `timer.toml`.

pub mod types;

pub use types::*;
