//! UART output trait
//!
//! The receiver task's output sink. Writes are synchronous from the caller's
//! point of view and run inside the task's measured work.

use crate::platform::Result;

/// Byte output sink
///
/// # Safety Invariants
///
/// - Only one owner per UART peripheral instance
/// - No concurrent access to the same UART from multiple contexts
pub trait UartInterface {
    /// Write all of `data`, returning the number of bytes written
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the write operation fails.
    fn write_bytes(&mut self, data: &[u8]) -> Result<usize>;

    /// Write a single byte
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the write operation fails.
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_bytes(&[byte]).map(|_| ())
    }
}
