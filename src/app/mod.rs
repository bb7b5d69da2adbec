//! Periodic application tasks
//!
//! The fixed task set: two button monitors feeding sampling queues, a
//! transmitter feeding the message stream, a receiver writing everything to
//! the output sink, and two synthetic load tasks. Loop bodies are plain async
//! functions over the platform traits so they run unchanged on the board and
//! in host tests.

pub mod buttons;
pub mod config;
pub mod load_sim;
pub mod receiver;
pub mod tick_probe;
pub mod transmitter;

#[cfg(feature = "pico2_w")]
pub mod tasks;

pub use buttons::{button_monitor, ButtonMonitor};
pub use config::SystemConfig;
pub use load_sim::load_simulation;
pub use receiver::{uart_receiver, ReceiverStep, UartReceiver};
pub use tick_probe::{tick_probe, TickProbe};
pub use transmitter::{periodic_transmitter, send_message};

use pico_cadence_core::queue::Edge;

use crate::queue::{SamplingQueue, StreamQueue};
use config::STREAM_CAPACITY;

/// Every queue shared between the application tasks
pub struct AppQueues {
    /// Button 1 monitor to receiver
    pub button_1: SamplingQueue<Edge>,
    /// Button 2 monitor to receiver
    pub button_2: SamplingQueue<Edge>,
    /// Transmitter to receiver
    pub stream: StreamQueue<STREAM_CAPACITY>,
}

impl AppQueues {
    /// All queues empty
    pub const fn new() -> Self {
        Self {
            button_1: SamplingQueue::new(),
            button_2: SamplingQueue::new(),
            stream: StreamQueue::new(),
        }
    }
}

impl Default for AppQueues {
    fn default() -> Self {
        Self::new()
    }
}
