//! Embassy task wrappers for the RP2350 build
//!
//! `#[embassy_executor::task]` functions cannot be generic, so each wrapper
//! pins the loop bodies to the concrete RP2350 drivers.

use embassy_rp::peripherals::UART0;
use pico_cadence_core::error::SpawnError;
use pico_cadence_core::queue::Edge;
use pico_cadence_core::scheduler::SyntheticLoad;
use pico_cadence_core::traits::Tick;

use super::config::STREAM_CAPACITY;
use super::receiver::UartReceiver;
use super::tick_probe::TickProbe;
use crate::core::scheduler::{CpuLoad, TaskContext};
use crate::platform::rp2350::{RpGpio, RpUart};
use crate::queue::{SamplingQueue, StreamQueue};

/// Receiver bound to the board's UART0 transmitter
pub type BoardReceiver = UartReceiver<'static, RpUart<'static, UART0>, STREAM_CAPACITY>;

/// Map an executor spawn failure onto the runtime's error
///
/// Embassy only fails a spawn when the task's pool has no free slot.
pub fn pool_exhausted(_: embassy_executor::SpawnError) -> SpawnError {
    SpawnError::PoolExhausted
}

#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(
    ctx: TaskContext<'static>,
    pin: RpGpio<'static>,
    queue: &'static SamplingQueue<Edge>,
) {
    super::buttons::button_monitor(ctx, pin, queue).await
}

#[embassy_executor::task]
pub async fn transmitter_task(
    ctx: TaskContext<'static>,
    queue: &'static StreamQueue<STREAM_CAPACITY>,
    message: &'static [u8],
    timeout: Tick,
) {
    super::transmitter::periodic_transmitter(ctx, queue, message, timeout).await
}

#[embassy_executor::task]
pub async fn receiver_task(ctx: TaskContext<'static>, receiver: BoardReceiver) {
    super::receiver::uart_receiver(ctx, receiver).await
}

#[embassy_executor::task(pool_size = 2)]
pub async fn load_task(ctx: TaskContext<'static>, work: SyntheticLoad) {
    super::load_sim::load_simulation(ctx, work).await
}

#[embassy_executor::task]
pub async fn monitor_task(load: &'static CpuLoad, period: Tick) {
    crate::core::scheduler::monitor(load, period).await
}

#[embassy_executor::task]
pub async fn tick_probe_task(probe: TickProbe<RpGpio<'static>>) {
    super::tick_probe::tick_probe(probe).await
}
