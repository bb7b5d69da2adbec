//! Synthetic CPU-bound work for load simulation
//!
//! Empty counting loops are removed by optimizing compilers, so the work is
//! expressed either as a clock-polling spin (observable elapsed time) or as
//! a counted loop whose counter is hidden behind `black_box`.

use core::hint::{black_box, spin_loop};

use crate::traits::{Tick, TickSource};

/// CPU-bound work consumed by a load-simulation task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticLoad {
    /// Spin until the tick source has advanced by `ticks`
    ClockSpin {
        /// Busy duration in ticks
        ticks: Tick,
    },
    /// Run a fixed number of loop iterations
    Counted {
        /// Iterations to execute
        iterations: u32,
    },
}

impl SyntheticLoad {
    /// Clock-polling work lasting `ticks`
    pub const fn for_ticks(ticks: Tick) -> Self {
        SyntheticLoad::ClockSpin { ticks }
    }

    /// Counted work sized for `target_ticks` at `iterations_per_tick`
    ///
    /// Saturates at `u32::MAX` iterations.
    pub const fn calibrated(target_ticks: Tick, iterations_per_tick: u32) -> Self {
        let iterations = target_ticks.saturating_mul(iterations_per_tick as u64);
        let iterations = if iterations > u32::MAX as u64 {
            u32::MAX
        } else {
            iterations as u32
        };
        SyntheticLoad::Counted { iterations }
    }

    /// Burn CPU time and return the ticks that actually elapsed
    pub fn run<T: TickSource>(&self, clock: &T) -> Tick {
        let start = clock.now();
        match *self {
            SyntheticLoad::ClockSpin { ticks } => {
                while clock.elapsed_since(start) < ticks {
                    spin_loop();
                }
            }
            SyntheticLoad::Counted { iterations } => {
                black_box(count_to(iterations));
            }
        }
        clock.elapsed_since(start)
    }
}

fn count_to(iterations: u32) -> u32 {
    let mut i = 0u32;
    while black_box(i) < iterations {
        i += 1;
    }
    i
}
