//! Periodic task set demonstration
//!
//! Brings up the full application on a Raspberry Pi Pico 2 W:
//! - Two button monitors (GPIO 2 and 3, 50 ms)
//! - Periodic transmitter (100 ms) feeding the message stream
//! - UART receiver (20 ms) writing edges and messages to UART0 (GPIO 0)
//! - Two synthetic load tasks (5 ms every 10 ms, 12 ms every 100 ms)
//! - Tick probe on GPIO 9 and a load report every second over defmt
//!
//! # Usage
//!
//! ```bash
//! cargo build --release --features pico2_w --example cadence_demo
//! probe-rs run --chip RP2350 target/thumbv8m.main-none-eabihf/release/examples/cadence_demo
//! ```

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::gpio::Flex;
use embassy_rp::uart::{self, UartTx};
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use pico_cadence::app::tasks::{
    button_task, load_task, monitor_task, pool_exhausted, receiver_task, tick_probe_task,
    transmitter_task, BoardReceiver,
};
use pico_cadence::app::{AppQueues, SystemConfig, TickProbe, UartReceiver};
use pico_cadence::core::scheduler::{CpuLoad, TaskRuntime};
use pico_cadence::platform::rp2350::{RpGpio, RpUart};
use pico_cadence::platform::GpioMode;
use pico_cadence::SpawnError;

static LOAD: StaticCell<CpuLoad> = StaticCell::new();
static QUEUES: StaticCell<AppQueues> = StaticCell::new();

/// Board resources handed to the tasks
struct Board {
    button_1: RpGpio<'static>,
    button_2: RpGpio<'static>,
    probe: RpGpio<'static>,
    receiver: BoardReceiver,
}

/// Spawn the six periodic tasks, then the monitor and tick probe
///
/// Stops at the first failure so a partial task set never runs.
fn spawn_all(
    spawner: &Spawner,
    runtime: &mut TaskRuntime<'static>,
    config: &SystemConfig,
    queues: &'static AppQueues,
    board: Board,
) -> Result<(), SpawnError> {
    let Board {
        button_1,
        button_2,
        probe,
        receiver,
    } = board;

    runtime.spawn(config.button_1, |ctx| {
        spawner
            .spawn(button_task(ctx, button_1, &queues.button_1))
            .map_err(pool_exhausted)
    })?;
    runtime.spawn(config.button_2, |ctx| {
        spawner
            .spawn(button_task(ctx, button_2, &queues.button_2))
            .map_err(pool_exhausted)
    })?;
    runtime.spawn(config.transmitter, |ctx| {
        spawner
            .spawn(transmitter_task(
                ctx,
                &queues.stream,
                config.message,
                config.send_timeout,
            ))
            .map_err(pool_exhausted)
    })?;
    runtime.spawn(config.receiver, |ctx| {
        spawner
            .spawn(receiver_task(ctx, receiver))
            .map_err(pool_exhausted)
    })?;
    runtime.spawn(config.load_1, |ctx| {
        spawner
            .spawn(load_task(ctx, config.load_1_work()))
            .map_err(pool_exhausted)
    })?;
    runtime.spawn(config.load_2, |ctx| {
        spawner
            .spawn(load_task(ctx, config.load_2_work()))
            .map_err(pool_exhausted)
    })?;

    spawner
        .spawn(monitor_task(runtime.load(), config.monitor_period))
        .map_err(pool_exhausted)?;
    spawner
        .spawn(tick_probe_task(TickProbe::new(probe)))
        .map_err(pool_exhausted)?;

    Ok(())
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = hal::init(Default::default());

    info!("pico_cadence periodic task demo");
    info!("===============================");

    let config = SystemConfig::default();
    if let Err(e) = config.validate() {
        defmt::panic!("Invalid task configuration: {}", Display2Format(&e));
    }

    let load: &'static CpuLoad = LOAD.init(CpuLoad::new());
    let queues: &'static AppQueues = QUEUES.init(AppQueues::new());

    let pins = (
        RpGpio::new(Flex::new(p.PIN_2), GpioMode::InputPullDown),
        RpGpio::new(Flex::new(p.PIN_3), GpioMode::InputPullDown),
        RpGpio::new(Flex::new(p.PIN_9), GpioMode::OutputPushPull),
    );
    let (button_1, button_2, probe) = match pins {
        (Ok(b1), Ok(b2), Ok(pr)) => (b1, b2, pr),
        _ => defmt::panic!("GPIO configuration failed"),
    };

    let tx = UartTx::new_blocking(p.UART0, p.PIN_0, uart::Config::default());
    let receiver = UartReceiver::new(
        RpUart::new(tx),
        &queues.button_1,
        &queues.button_2,
        &queues.stream,
        config.message.len(),
    );

    let board = Board {
        button_1,
        button_2,
        probe,
        receiver,
    };

    let mut runtime = TaskRuntime::new(load);
    if let Err(e) = spawn_all(&spawner, &mut runtime, &config, queues, board) {
        defmt::panic!("Bring-up failed: {}", e.as_str());
    }

    info!("{} periodic tasks running", runtime.spawned());

    loop {
        Timer::after(Duration::from_secs(10)).await;
    }
}
