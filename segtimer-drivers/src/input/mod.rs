//! Knob input drivers

mod button;
mod encoder;
mod knob;

pub use button::{ButtonConfig, DebouncedButton};
pub use encoder::QuadratureEncoder;
pub use knob::KnobInput;
