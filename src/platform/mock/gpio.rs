//! Mock GPIO implementation for testing

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use pico_cadence_core::queue::PinLevel;

use crate::platform::{
    Result,
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
};

#[derive(Debug, Default)]
struct PinShared {
    high: AtomicBool,
    rising_edges: AtomicU32,
}

/// Mock GPIO implementation
///
/// Tracks pin level and mode for test verification. The level lives behind
/// an `Arc` so a [`MockPinProbe`] can simulate an external signal while the
/// pin itself is owned by a task.
#[derive(Debug)]
pub struct MockGpio {
    shared: Arc<PinShared>,
    mode: GpioMode,
}

/// Test-side handle onto a [`MockGpio`]
#[derive(Debug, Clone)]
pub struct MockPinProbe {
    shared: Arc<PinShared>,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode, driven low
    pub fn new_output() -> Self {
        Self {
            shared: Arc::new(PinShared::default()),
            mode: GpioMode::OutputPushPull,
        }
    }

    /// Create a new mock GPIO in input mode, reading low
    pub fn new_input() -> Self {
        Self {
            shared: Arc::new(PinShared::default()),
            mode: GpioMode::Input,
        }
    }

    /// Handle for driving or inspecting this pin from a test
    pub fn probe(&self) -> MockPinProbe {
        MockPinProbe {
            shared: self.shared.clone(),
        }
    }

    fn drive(&mut self, high: bool) -> Result<()> {
        if !self.mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        let was_high = self.shared.high.swap(high, Ordering::SeqCst);
        if high && !was_high {
            self.shared.rising_edges.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}

impl MockPinProbe {
    /// Simulate an external signal on an input pin
    pub fn set_level(&self, level: PinLevel) {
        self.shared.high.store(level.is_high(), Ordering::SeqCst);
    }

    /// Current pin level
    pub fn level(&self) -> PinLevel {
        PinLevel::from_bool(self.shared.high.load(Ordering::SeqCst))
    }

    /// Number of low-to-high transitions driven by the pin owner
    pub fn rising_edges(&self) -> u32 {
        self.shared.rising_edges.load(Ordering::SeqCst)
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        self.drive(true)
    }

    fn set_low(&mut self) -> Result<()> {
        self.drive(false)
    }

    fn toggle(&mut self) -> Result<()> {
        let high = self.shared.high.load(Ordering::SeqCst);
        self.drive(!high)
    }

    fn read(&self) -> PinLevel {
        PinLevel::from_bool(self.shared.high.load(Ordering::SeqCst))
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}
