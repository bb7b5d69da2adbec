//! Platform abstraction layer
//!
//! Hardware the periodic tasks touch: button and probe pins plus a byte
//! output sink. All target-specific code stays in this module.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico2_w")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{GpioInterface, GpioMode, UartInterface};
