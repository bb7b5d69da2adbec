#![cfg_attr(not(test), no_std)]

//! pico_cadence - Periodic real-time tasks for single-core microcontrollers
//!
//! This library provides drift-free periodic scheduling on top of Embassy,
//! two inter-task queue disciplines (overwrite-latest sampling and bounded
//! byte streaming) and CPU load accounting from per-iteration timing.

#[cfg(all(not(test), feature = "mock"))]
extern crate std;

// Platform abstraction layer: pins, byte output, target bindings
pub mod platform;

// Core systems: logging, tick source, scheduler runtime
pub mod core;

// Inter-task queues
pub mod queue;

// Periodic application tasks and their fixed configuration
pub mod app;

pub use pico_cadence_core::{ConfigError, QueueError, SpawnError, Tick, TickSource};

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
// are exported at crate root via #[macro_export] in core::logging
