//! Queue building blocks shared by the runtime queues
//!
//! - [`slot`]: Single-slot overwrite-latest state machine
//! - [`edge`]: Pin levels and the edge tag carried by sampling queues

pub mod edge;
pub mod slot;

pub use edge::{Edge, PinLevel};
pub use slot::LatestSlot;
