//! Countdown arithmetic and timing primitives

pub mod duration;
pub mod hold;
pub mod ticker;

pub use duration::{Remaining, SetPoint, MAX_MINUTES, MAX_TOTAL_SECONDS};
pub use hold::MessageHold;
pub use ticker::{SecondTicker, SECOND_MS};
