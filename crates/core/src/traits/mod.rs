//! Core traits for platform-agnostic scheduling.
//!
//! This module provides trait abstractions that decouple the scheduling
//! logic from platform-specific implementations (Embassy, etc.).
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations (Embassy) live in the root crate

pub mod time;

pub use time::{MockTicks, Tick, TickSource};
