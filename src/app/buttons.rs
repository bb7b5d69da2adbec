//! Button edge sampling
//!
//! Each monitor remembers the level it saw on its previous period and
//! publishes the transition (or its absence) to a sampling queue. The reader
//! only ever sees the latest classification.

use pico_cadence_core::queue::{Edge, PinLevel};

use crate::core::scheduler::TaskContext;
use crate::platform::GpioInterface;
use crate::queue::SamplingQueue;

/// Edge detector over one input pin
pub struct ButtonMonitor<P: GpioInterface> {
    pin: P,
    last: PinLevel,
}

impl<P: GpioInterface> ButtonMonitor<P> {
    /// Wrap `pin`; the current level becomes the reference for the first sample
    pub fn new(pin: P) -> Self {
        let last = pin.read();
        Self { pin, last }
    }

    /// Read the pin and classify the change since the previous sample
    pub fn sample(&mut self) -> Edge {
        let level = self.pin.read();
        let edge = Edge::detect(self.last, level);
        self.last = level;
        edge
    }

    /// Level seen by the most recent sample
    pub fn last_level(&self) -> PinLevel {
        self.last
    }
}

/// Button monitor loop: sample once per period and overwrite `queue`
pub async fn button_monitor<P: GpioInterface>(
    ctx: TaskContext<'_>,
    pin: P,
    queue: &SamplingQueue<Edge>,
) {
    let mut monitor = ButtonMonitor::new(pin);
    let mut cursor = ctx.start_cursor();

    crate::log_info!("{} started", ctx.meta().name);

    loop {
        let iteration = ctx.begin();

        let edge = monitor.sample();
        if edge.is_transition() {
            crate::log_trace!("{}: edge '{}'", ctx.meta().name, edge.to_byte() as char);
        }
        queue.write(edge);

        ctx.complete(iteration);
        ctx.wait_next_period(&mut cursor).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::{CpuLoad, TaskRuntime};
    use crate::platform::mock::MockGpio;
    use core::cell::Cell;
    use embassy_futures::select::select;
    use embassy_time::Timer;
    use pico_cadence_core::scheduler::TaskMetadata;

    #[test]
    fn test_first_sample_uses_initial_level() {
        let pin = MockGpio::new_input();
        let probe = pin.probe();
        probe.set_level(PinLevel::High);

        let mut monitor = ButtonMonitor::new(pin);
        assert_eq!(monitor.last_level(), PinLevel::High);
        assert_eq!(monitor.sample(), Edge::Unchanged);
    }

    #[test]
    fn test_edge_sequence() {
        let pin = MockGpio::new_input();
        let probe = pin.probe();
        let mut monitor = ButtonMonitor::new(pin);

        probe.set_level(PinLevel::High);
        assert_eq!(monitor.sample(), Edge::Rising);
        assert_eq!(monitor.sample(), Edge::Unchanged);

        probe.set_level(PinLevel::Low);
        assert_eq!(monitor.sample(), Edge::Falling);
        assert_eq!(monitor.sample(), Edge::Unchanged);
    }

    #[test]
    fn test_press_between_samples_is_missed() {
        let pin = MockGpio::new_input();
        let probe = pin.probe();
        let mut monitor = ButtonMonitor::new(pin);

        // Pulse shorter than one period
        probe.set_level(PinLevel::High);
        probe.set_level(PinLevel::Low);
        assert_eq!(monitor.sample(), Edge::Unchanged);
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_monitor_loop_publishes_edges() {
        let load = CpuLoad::new();
        let mut runtime = TaskRuntime::new(&load);
        let slot = Cell::new(None);
        runtime
            .spawn(TaskMetadata::new("BUTTON 1 MONITOR", 10, 1), |ctx| {
                slot.set(Some(ctx));
                Ok(())
            })
            .unwrap();
        let ctx = slot.get().unwrap();

        let queue = SamplingQueue::new();
        let pin = MockGpio::new_input();
        let probe = pin.probe();

        select(button_monitor(ctx, pin, &queue), async {
            Timer::after_millis(25).await;
            probe.set_level(PinLevel::High);
            Timer::after_millis(30).await;
        })
        .await;

        // The rising edge was sampled and later overwritten by Unchanged
        assert!(load.stats(0).unwrap().execution_count >= 3);
        assert_eq!(queue.try_read(), Some(Edge::Unchanged));
    }
}
