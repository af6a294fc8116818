//! State machine for the timer lifecycle
//!
//! The state machine is explicit, finite, and deterministic. Entry actions
//! (relay writes, conversions, message holds) live in the controller.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
