//! Platform error types

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum PlatformError {
    /// GPIO operation failed
    Gpio(GpioError),
    /// UART operation failed
    Uart(UartError),
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum GpioError {
    /// Operation not valid in the pin's current mode
    InvalidMode,
    /// Mode not supported by this pin driver
    UnsupportedMode,
}

/// UART-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum UartError {
    /// Write operation failed
    WriteFailed,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::Uart(e) => write!(f, "UART error: {:?}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(
            PlatformError::Gpio(GpioError::InvalidMode).to_string(),
            "GPIO error: InvalidMode"
        );
        assert_eq!(
            PlatformError::Uart(UartError::WriteFailed).to_string(),
            "UART error: WriteFailed"
        );
        assert_eq!(
            PlatformError::Gpio(GpioError::UnsupportedMode).to_string(),
            "GPIO error: UnsupportedMode"
        );
    }
}
