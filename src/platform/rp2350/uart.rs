//! Embassy-RP UART output wrapper
//!
//! Transmit-only blocking UART used as the receiver task's output sink.

use embassy_rp::uart::{Blocking, Instance, UartTx};

use crate::platform::{
    error::{PlatformError, UartError},
    traits::UartInterface,
    Result,
};

/// Embassy-RP UART transmitter
///
/// Wraps `embassy_rp::uart::UartTx` in blocking mode; the peripheral must
/// already be configured (baud rate, framing) when it is handed over.
pub struct RpUart<'d, T: Instance> {
    tx: UartTx<'d, T, Blocking>,
}

impl<'d, T: Instance> RpUart<'d, T> {
    /// Wrap a configured blocking transmitter
    pub fn new(tx: UartTx<'d, T, Blocking>) -> Self {
        Self { tx }
    }
}

impl<T: Instance> UartInterface for RpUart<'_, T> {
    fn write_bytes(&mut self, data: &[u8]) -> Result<usize> {
        self.tx
            .blocking_write(data)
            .map_err(|_| PlatformError::Uart(UartError::WriteFailed))?;
        Ok(data.len())
    }
}
