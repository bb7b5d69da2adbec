//! pico_cadence_core - Pure no_std logic for the pico_cadence periodic scheduler
//!
//! This crate contains platform-agnostic algorithms and types
//! that can be tested on host without any feature flags or embassy dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Platform services injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic trait abstractions (TickSource)
//! - [`scheduler`]: Drift-free wake-up math, task metadata, statistics and load accounting
//! - [`queue`]: Overwrite-latest slot and edge encoding for sampled inputs
//! - [`error`]: Error types shared by the runtime and the application

#![no_std]

pub mod error;
pub mod queue;
pub mod scheduler;
pub mod traits;

pub use error::{ConfigError, QueueError, SpawnError};
pub use traits::{MockTicks, Tick, TickSource};
