//! Absolute-delay primitive
//!
//! The only suspension point in a periodic task's normal cadence.

use embassy_time::Timer;
use pico_cadence_core::scheduler::cadence;
use pico_cadence_core::scheduler::DelayOutcome;
use pico_cadence_core::traits::Tick;

use crate::core::time;

/// Suspend until `cursor + period`, then leave `cursor` on that boundary
///
/// The cursor advances by exactly one `period` on every call, so after `k`
/// calls it equals its initial value plus `k * period` regardless of how late
/// any wake-up was.
///
/// If the caller is already past the boundary (its own work overran the
/// period) the call returns immediately with [`DelayOutcome::Overrun`]
/// instead of suspending.
pub async fn delay_until(cursor: &mut Tick, period: Tick) -> DelayOutcome {
    let wake = cadence::advance(cursor, period, time::now());

    if !wake.outcome.is_overrun() {
        Timer::at(time::instant_at(wake.target)).await;
    }

    wake.outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[serial_test::serial]
    async fn test_delay_until_waits_for_boundary() {
        let mut cursor = time::now();
        let start = cursor;

        let outcome = delay_until(&mut cursor, 20).await;

        assert_eq!(outcome, DelayOutcome::OnTime);
        assert_eq!(cursor, start + 20);
        assert!(time::now() >= start + 20);
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_delay_until_is_drift_free() {
        let mut cursor = time::now();
        let start = cursor;

        for k in 1..=5u64 {
            // Loop body shorter than the period
            std::thread::sleep(std::time::Duration::from_millis(3));
            delay_until(&mut cursor, 15).await;
            assert_eq!(cursor, start + k * 15);
        }
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_delay_until_overrun_returns_immediately() {
        // Make sure the clock has run long enough to place a cursor behind it
        let _ = time::now();
        std::thread::sleep(std::time::Duration::from_millis(30));
        let now = time::now();

        // Boundary at now - 15 has already gone by
        let mut cursor = now - 25;
        let before = cursor;

        let outcome = delay_until(&mut cursor, 10).await;

        assert!(outcome.is_overrun());
        assert_eq!(cursor, before + 10);
        // No suspension happened
        assert!(time::now() < now + 10);
    }
}
