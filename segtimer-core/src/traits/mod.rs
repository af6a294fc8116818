//! Hardware collaborator traits
//!
//! These traits define the interface between the timer logic and the
//! drivers that implement them.

pub mod input;
pub mod relay;

pub use input::{ButtonEvent, EncoderStep, Input, InputSource};
pub use relay::RelayOutput;
