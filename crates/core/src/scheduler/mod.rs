//! Periodic scheduling types, drift-free wake-up math and load accounting
//!
//! This module provides core types for task scheduling without any
//! async runtime dependencies. The actual suspension is handled
//! by the root crate using Embassy timers.
//!
//! # Components
//!
//! - [`types`]: Core types (TaskMetadata, TaskStats, TimingSample)
//! - [`cadence`]: Absolute wake-up cursor arithmetic
//! - [`load`]: Per-task and global CPU load accumulation
//! - [`synthetic`]: Calibrated CPU-bound work for load simulation
//!
//! # Example
//!
//! ```rust
//! use pico_cadence_core::scheduler::{LoadAccumulator, TaskMetadata, TimingSample};
//!
//! let mut load: LoadAccumulator<4> = LoadAccumulator::new(0);
//! let id = load
//!     .register(TaskMetadata::new("sampler", 50, 1))
//!     .unwrap();
//! load.record(id, TimingSample::new(0, 5));
//! assert_eq!(load.load_percent(50), 10);
//! ```

pub mod cadence;
pub mod load;
pub mod synthetic;
pub mod types;

pub use cadence::*;
pub use load::*;
pub use synthetic::*;
pub use types::*;
