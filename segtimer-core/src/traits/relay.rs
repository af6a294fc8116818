//! Relay output trait

/// Trait for the load relay
///
/// Implementations map the logical "energized" state onto the physical
/// line level (active-high or active-low drivers).
pub trait RelayOutput {
    /// Energize or release the relay
    fn set_energized(&mut self, on: bool);

    /// Check if the relay is currently energized
    fn is_energized(&self) -> bool;
}

impl<T: RelayOutput + ?Sized> RelayOutput for &mut T {
    fn set_energized(&mut self, on: bool) {
        T::set_energized(self, on);
    }

    fn is_energized(&self) -> bool {
        T::is_energized(self)
    }
}
