//! Inter-task queues
//!
//! The only state shared between periodic tasks. Each queue synchronizes its
//! own buffer; callers only ever see copies of values going in or out.
//!
//! - [`SamplingQueue`]: single-slot overwrite-latest channel for sampled state
//! - [`StreamQueue`]: bounded FIFO byte stream with timed send
//!
//! Each instance is meant for exactly one writer and one reader.

pub mod sampling;
pub mod stream;

pub use pico_cadence_core::queue::{Edge, PinLevel};
pub use sampling::SamplingQueue;
pub use stream::StreamQueue;
