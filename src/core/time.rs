//! Embassy-based tick source implementation.
//!
//! This module provides the `EmbassyTicks` implementation of the
//! `TickSource` trait using Embassy's time driver. One scheduler tick is one
//! millisecond of Embassy time, independent of the driver's native tick rate.

use embassy_time::{Duration, Instant};
use pico_cadence_core::traits::{Tick, TickSource};

/// Embassy-based tick source using the Embassy time driver.
///
/// # Example
///
/// ```ignore
/// use pico_cadence::core::time::EmbassyTicks;
/// use pico_cadence_core::traits::TickSource;
///
/// let ticks = EmbassyTicks;
/// let now = ticks.now();
/// ```
#[derive(Clone, Copy, Default, Debug)]
pub struct EmbassyTicks;

impl TickSource for EmbassyTicks {
    fn now(&self) -> Tick {
        Instant::now().as_millis()
    }
}

/// Current scheduler tick
#[inline]
pub fn now() -> Tick {
    Instant::now().as_millis()
}

/// Embassy instant at which scheduler tick `tick` begins
#[inline]
pub fn instant_at(tick: Tick) -> Instant {
    Instant::from_millis(tick)
}

/// Embassy duration spanning `ticks` scheduler ticks
#[inline]
pub fn duration_of(ticks: Tick) -> Duration {
    Duration::from_millis(ticks)
}
