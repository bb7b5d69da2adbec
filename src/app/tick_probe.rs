//! Tick probe
//!
//! Pulses a diagnostic pin once per scheduler tick so the tick rate can be
//! checked with a logic analyser alongside task activity.

use embassy_time::Ticker;

use crate::core::time;
use crate::platform::{GpioInterface, Result};

/// Output pin pulsed once per tick
pub struct TickProbe<P: GpioInterface> {
    pin: P,
    pulses: u32,
}

impl<P: GpioInterface> TickProbe<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, pulses: 0 }
    }

    /// Drive the pin high then immediately low
    pub fn pulse(&mut self) -> Result<()> {
        self.pin.set_high()?;
        self.pin.set_low()?;
        self.pulses = self.pulses.wrapping_add(1);
        Ok(())
    }

    /// Completed pulses (wrapping)
    pub fn pulses(&self) -> u32 {
        self.pulses
    }
}

/// Pulse `probe` every tick forever
///
/// A failing pin is reported once; pulsing keeps being attempted.
pub async fn tick_probe<P: GpioInterface>(mut probe: TickProbe<P>) {
    let mut ticker = Ticker::every(time::duration_of(1));
    let mut failing = false;

    loop {
        match probe.pulse() {
            Ok(()) => failing = false,
            Err(e) if !failing => {
                crate::log_warn!("Tick probe pulse failed: {}", e);
                failing = true;
            }
            Err(_) => {}
        }
        ticker.next().await;
    }
}
