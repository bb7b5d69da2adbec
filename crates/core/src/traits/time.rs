//! Tick source abstraction for platform-agnostic timing.
//!
//! This module provides the `TickSource` trait that abstracts over different
//! monotonic clocks (Embassy, mock, etc.) to enable host testing without
//! embedded dependencies.

use core::cell::Cell;

/// Indivisible unit of the monotonic clock.
///
/// One tick is one millisecond on every shipped platform. Periods, budgets
/// and timeouts are all expressed in ticks.
pub type Tick = u64;

/// Monotonic tick counter consumed by the scheduler.
///
/// This trait abstracts over different time providers:
/// - `EmbassyTicks` (in the root crate) for targets using Embassy
/// - `MockTicks` for host testing with controllable time
///
/// # Example
///
/// ```
/// use pico_cadence_core::traits::{MockTicks, TickSource};
///
/// let ticks = MockTicks::new();
/// let start = ticks.now();
/// ticks.advance(20);
/// assert_eq!(ticks.elapsed_since(start), 20);
/// ```
pub trait TickSource: Clone + Send + Sync {
    /// Returns the current tick count. Never decreases.
    fn now(&self) -> Tick;

    /// Returns ticks elapsed since a reference point.
    ///
    /// Uses saturating subtraction so a reference in the future reads as 0.
    fn elapsed_since(&self, reference: Tick) -> Tick {
        self.now().saturating_sub(reference)
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock tick source for testing with controllable time advancement.
///
/// # Example
///
/// ```
/// use pico_cadence_core::traits::{MockTicks, TickSource};
///
/// let ticks = MockTicks::with_initial(100);
/// ticks.advance(50);
/// assert_eq!(ticks.now(), 150);
/// ```
#[derive(Clone, Default)]
pub struct MockTicks {
    current: Cell<Tick>,
}

// Safety: MockTicks is only used in single-threaded test contexts
// where Cell is safe. The Send+Sync bounds on TickSource are required
// for shared runtime state, but MockTicks is never shared across threads.
unsafe impl Send for MockTicks {}
unsafe impl Sync for MockTicks {}

impl MockTicks {
    /// Creates a new `MockTicks` starting at tick 0.
    pub fn new() -> Self {
        Self {
            current: Cell::new(0),
        }
    }

    /// Creates a new `MockTicks` starting at the specified tick.
    pub fn with_initial(tick: Tick) -> Self {
        Self {
            current: Cell::new(tick),
        }
    }

    /// Sets the current tick to an absolute value.
    pub fn set(&self, tick: Tick) {
        self.current.set(tick);
    }

    /// Advances the current tick by the specified amount.
    pub fn advance(&self, ticks: Tick) {
        self.current.set(self.current.get() + ticks);
    }
}

impl TickSource for MockTicks {
    fn now(&self) -> Tick {
        self.current.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ticks_initial_value() {
        let ticks = MockTicks::new();
        assert_eq!(ticks.now(), 0);
    }

    #[test]
    fn mock_ticks_set_and_advance() {
        let ticks = MockTicks::with_initial(10);
        ticks.advance(5);
        assert_eq!(ticks.now(), 15);

        ticks.set(1_000);
        assert_eq!(ticks.now(), 1_000);
    }

    #[test]
    fn mock_ticks_elapsed_since_saturates() {
        let ticks = MockTicks::with_initial(100);
        assert_eq!(ticks.elapsed_since(40), 60);
        assert_eq!(ticks.elapsed_since(500), 0);
    }
}
