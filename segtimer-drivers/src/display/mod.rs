//! Segment line drivers
//!
//! Both writers take the same segment byte (bit 0..6 = A..G, bit 7 = DP).

mod parallel;
mod shift_register;

pub use parallel::ParallelSegments;
pub use shift_register::ShiftRegisterSegments;
