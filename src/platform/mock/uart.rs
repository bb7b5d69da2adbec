//! Mock UART implementation for testing

use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use crate::platform::{
    Result,
    error::{PlatformError, UartError},
    traits::UartInterface,
};

#[derive(Debug, Default)]
struct TxShared {
    buffer: Mutex<Vec<u8>>,
    fail_writes: AtomicBool,
}

/// Mock UART implementation
///
/// Appends every write to an in-memory transmit buffer, allowing tests to
/// verify output without hardware.
///
/// # Example
///
/// ```ignore
/// use pico_cadence::platform::mock::MockUart;
/// use pico_cadence::platform::traits::UartInterface;
///
/// let mut uart = MockUart::new();
/// let tx = uart.probe();
///
/// uart.write_bytes(b"Hello").unwrap();
/// uart.write_byte(b'!').unwrap();
/// assert_eq!(tx.contents(), b"Hello!");
/// ```
#[derive(Debug, Default)]
pub struct MockUart {
    shared: Arc<TxShared>,
}

/// Test-side handle onto a [`MockUart`]'s transmit buffer
#[derive(Debug, Clone)]
pub struct MockUartProbe {
    shared: Arc<TxShared>,
}

impl MockUart {
    /// Create a new mock UART with an empty transmit buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for inspecting transmitted data from a test
    pub fn probe(&self) -> MockUartProbe {
        MockUartProbe {
            shared: self.shared.clone(),
        }
    }

    fn tx(&self) -> std::sync::MutexGuard<'_, Vec<u8>> {
        // A poisoned buffer only means another test thread panicked mid-write
        self.shared
            .buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MockUartProbe {
    /// Copy of everything transmitted so far
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Take and clear the transmitted data
    pub fn take(&self) -> Vec<u8> {
        core::mem::take(&mut *self.lock())
    }

    /// Make subsequent writes fail with `UartError::WriteFailed`
    pub fn set_fail_writes(&self, fail: bool) {
        self.shared.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<u8>> {
        self.shared
            .buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl UartInterface for MockUart {
    fn write_bytes(&mut self, data: &[u8]) -> Result<usize> {
        if self.shared.fail_writes.load(Ordering::SeqCst) {
            return Err(PlatformError::Uart(UartError::WriteFailed));
        }
        self.tx().extend_from_slice(data);
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_uart_write() {
        let mut uart = MockUart::new();
        let tx = uart.probe();

        let written = uart.write_bytes(b"Hello, World!").unwrap();
        assert_eq!(written, 13);
        assert_eq!(tx.contents(), b"Hello, World!");
    }

    #[test]
    fn test_mock_uart_write_byte() {
        let mut uart = MockUart::new();
        let tx = uart.probe();

        uart.write_byte(b'\n').unwrap();
        uart.write_byte(b'x').unwrap();
        assert_eq!(tx.take(), b"\nx");
        assert!(tx.contents().is_empty());
    }

    #[test]
    fn test_mock_uart_failure() {
        let mut uart = MockUart::new();
        let tx = uart.probe();
        tx.set_fail_writes(true);

        assert_eq!(
            uart.write_bytes(b"lost"),
            Err(PlatformError::Uart(UartError::WriteFailed))
        );
        assert!(tx.contents().is_empty());
    }
}
