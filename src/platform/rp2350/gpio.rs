//! RP2350 GPIO implementation
//!
//! Wraps `embassy_rp::gpio::Flex` so one driver covers both the button
//! inputs and the tick probe output.

use embassy_rp::gpio::{Flex, Pull};
use pico_cadence_core::queue::PinLevel;

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};

/// RP2350 GPIO implementation
pub struct RpGpio<'d> {
    pin: Flex<'d>,
    mode: GpioMode,
}

impl<'d> RpGpio<'d> {
    /// Wrap `pin` and configure it for `mode`
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::UnsupportedMode)` for
    /// open-drain output, which `Flex` does not provide.
    pub fn new(pin: Flex<'d>, mode: GpioMode) -> Result<Self> {
        let mut gpio = Self {
            pin,
            mode: GpioMode::Input,
        };
        gpio.set_mode(mode)?;
        Ok(gpio)
    }

    fn require_output(&self) -> Result<()> {
        if self.mode.is_output() {
            Ok(())
        } else {
            Err(PlatformError::Gpio(GpioError::InvalidMode))
        }
    }
}

impl GpioInterface for RpGpio<'_> {
    fn set_high(&mut self) -> Result<()> {
        self.require_output()?;
        self.pin.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.require_output()?;
        self.pin.set_low();
        Ok(())
    }

    fn toggle(&mut self) -> Result<()> {
        self.require_output()?;
        self.pin.toggle();
        Ok(())
    }

    fn read(&self) -> PinLevel {
        PinLevel::from_bool(self.pin.is_high())
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        match mode {
            GpioMode::Input => {
                self.pin.set_pull(Pull::None);
                self.pin.set_as_input();
            }
            GpioMode::InputPullUp => {
                self.pin.set_pull(Pull::Up);
                self.pin.set_as_input();
            }
            GpioMode::InputPullDown => {
                self.pin.set_pull(Pull::Down);
                self.pin.set_as_input();
            }
            GpioMode::OutputPushPull => {
                self.pin.set_pull(Pull::None);
                self.pin.set_as_output();
            }
            GpioMode::OutputOpenDrain => {
                return Err(PlatformError::Gpio(GpioError::UnsupportedMode));
            }
        }
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}
