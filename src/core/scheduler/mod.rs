//! Periodic task scheduler built on Embassy timers
//!
//! Every periodic task runs an unbounded loop whose cadence comes from the
//! absolute-delay primitive: the next wake-up is always computed from the
//! previously intended boundary, so execution jitter never accumulates.
//! The scheduler provides:
//!
//! - Drift-free suspension (`delay_until`)
//! - Task registration and launch with rollback on failure
//! - CPU load tracking from per-iteration timing samples
//! - Periodic load reporting
//!
//! # Example
//!
//! ```rust,ignore
//! #[embassy_executor::task]
//! async fn sampler(ctx: TaskContext<'static>) {
//!     let mut cursor = ctx.start_cursor();
//!     loop {
//!         let iteration = ctx.begin();
//!         sample_inputs();
//!         ctx.complete(iteration);
//!         ctx.wait_next_period(&mut cursor).await;
//!     }
//! }
//! ```

pub mod delay;
pub mod load;
pub mod monitor;
pub mod runtime;

pub use delay::*;
pub use load::*;
pub use monitor::*;
pub use runtime::*;

pub use pico_cadence_core::scheduler::{
    DelayOutcome, SyntheticLoad, TaskEntry, TaskMetadata, TaskStats, TimingSample,
};
