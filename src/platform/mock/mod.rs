//! Mock platform implementation for testing
//!
//! In-memory pins and output sink for unit and integration tests. Both mocks
//! hand out cloneable probes so a test can drive or inspect a device after
//! moving it into a task running on another thread.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use pico_cadence::platform::mock::MockUart;
//! use pico_cadence::platform::traits::UartInterface;
//!
//! let mut uart = MockUart::new();
//! let tx = uart.probe();
//! uart.write_bytes(b"test").unwrap();
//! assert_eq!(tx.contents(), b"test");
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod uart;

pub use gpio::{MockGpio, MockPinProbe};
pub use uart::{MockUart, MockUartProbe};
