//! RP2350 platform implementation for Raspberry Pi Pico 2 W
//!
//! Concrete implementations of the platform traits on top of `embassy-rp`.
//!
//! # Feature Gate
//!
//! This module is only available when the `pico2_w` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! pico_cadence = { version = "0.1", features = ["pico2_w"] }
//! ```

mod gpio;
mod uart;

pub use gpio::RpGpio;
pub use uart::RpUart;
