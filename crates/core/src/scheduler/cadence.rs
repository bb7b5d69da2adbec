//! Absolute (drift-free) wake-up arithmetic
//!
//! A periodic task keeps a cursor holding the tick at which its previous
//! period boundary was scheduled. Each cycle the next boundary is computed
//! from that intended boundary, never from the actual wake time, so jitter
//! in the loop body does not accumulate.

use crate::traits::Tick;

/// Result of advancing a wake cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayOutcome {
    /// The boundary was still ahead (or exactly now); the caller suspends until it
    OnTime,
    /// The caller was already past the boundary and must not suspend
    Overrun {
        /// Ticks between the boundary and the moment of the call
        late_by: Tick,
    },
}

impl DelayOutcome {
    /// Whether the caller missed its boundary
    #[inline]
    pub const fn is_overrun(&self) -> bool {
        matches!(self, DelayOutcome::Overrun { .. })
    }
}

/// Next wake-up decided by [`advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wake {
    /// Absolute tick to sleep until
    pub target: Tick,
    /// Whether the target is still ahead of `now`
    pub outcome: DelayOutcome,
}

/// Advance `cursor` by exactly one `period` and classify the wake-up
///
/// The cursor always moves to `cursor + period`, however late `now` is.
pub fn advance(cursor: &mut Tick, period: Tick, now: Tick) -> Wake {
    let target = cursor.wrapping_add(period);
    *cursor = target;

    let outcome = if now > target {
        DelayOutcome::Overrun {
            late_by: now - target,
        }
    } else {
        DelayOutcome::OnTime
    };

    Wake { target, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockTicks, TickSource};

    #[test]
    fn test_advance_on_time() {
        let mut cursor = 100;
        let wake = advance(&mut cursor, 50, 120);
        assert_eq!(wake.target, 150);
        assert_eq!(wake.outcome, DelayOutcome::OnTime);
        assert_eq!(cursor, 150);
    }

    #[test]
    fn test_advance_exactly_at_boundary_is_on_time() {
        let mut cursor = 0;
        let wake = advance(&mut cursor, 20, 20);
        assert_eq!(wake.outcome, DelayOutcome::OnTime);
    }

    #[test]
    fn test_advance_overrun_still_moves_one_period() {
        let mut cursor = 0;
        let wake = advance(&mut cursor, 10, 27);
        assert_eq!(wake.target, 10);
        assert_eq!(wake.outcome, DelayOutcome::Overrun { late_by: 17 });
        assert!(wake.outcome.is_overrun());
        assert_eq!(cursor, 10);
    }

    #[test]
    fn test_drift_free_over_many_cycles() {
        let ticks = MockTicks::with_initial(1_000);
        let period = 50;
        let mut cursor = ticks.now();
        let start = cursor;

        for k in 1..=200u64 {
            // Uneven loop-body duration, always shorter than the period
            ticks.advance(k % 37);
            let wake = advance(&mut cursor, period, ticks.now());
            assert_eq!(wake.outcome, DelayOutcome::OnTime);
            // Sleep until the boundary
            ticks.set(wake.target);
            assert_eq!(cursor, start + k * period);
        }
    }

    #[test]
    fn test_wake_late_does_not_shift_schedule() {
        let ticks = MockTicks::new();
        let mut cursor = 0;

        let wake = advance(&mut cursor, 20, ticks.now());
        // Woken 3 ticks late by a higher-priority task
        ticks.set(wake.target + 3);
        let wake = advance(&mut cursor, 20, ticks.now());
        assert_eq!(wake.target, 40);
    }
}
