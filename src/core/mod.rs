//! Core scheduling infrastructure
//!
//! This module contains the runtime half of the scheduler: logging, the
//! Embassy tick source, interrupt-safe shared state and the periodic task
//! runtime. Pure algorithms live in `pico_cadence_core` and are re-exported
//! from here where callers need them.

pub mod logging;
pub mod scheduler;
pub mod time;
pub mod traits;
