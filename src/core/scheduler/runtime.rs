//! Periodic task runtime
//!
//! Registers each task in the shared load table and hands a [`TaskContext`]
//! to a platform launch closure that starts the task's loop body. On Embassy
//! the closure calls `Spawner::spawn`; on the host it can start a thread.
//!
//! A launch failure rolls the registration back and is returned to the
//! caller, who must abort bring-up rather than start a partial task set.

use pico_cadence_core::error::SpawnError;
use pico_cadence_core::scheduler::{DelayOutcome, TaskMetadata, TimingSample};
use pico_cadence_core::traits::Tick;

use super::delay::delay_until;
use super::load::CpuLoad;

/// Identifies a spawned task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskHandle {
    id: usize,
    name: &'static str,
}

impl TaskHandle {
    /// Index into the load table
    #[inline]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Task name
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Tick at which an iteration's work began
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationStart(Tick);

impl IterationStart {
    /// Start tick
    #[inline]
    pub const fn tick(&self) -> Tick {
        self.0
    }
}

/// Everything a periodic loop body needs from the runtime
///
/// Owned by the task; the wake cursor it hands out is a plain local that no
/// other task ever sees.
#[derive(Clone, Copy)]
pub struct TaskContext<'a> {
    handle: TaskHandle,
    meta: TaskMetadata,
    load: &'a CpuLoad,
}

impl<'a> TaskContext<'a> {
    /// Handle of this task
    #[inline]
    pub fn handle(&self) -> TaskHandle {
        self.handle
    }

    /// Metadata this task was spawned with
    #[inline]
    pub fn meta(&self) -> &TaskMetadata {
        &self.meta
    }

    /// Shared load accumulator
    #[inline]
    pub fn load(&self) -> &'a CpuLoad {
        self.load
    }

    /// Initial wake cursor: the task-start tick
    pub fn start_cursor(&self) -> Tick {
        self.load.now()
    }

    /// Mark the start of one iteration's work
    pub fn begin(&self) -> IterationStart {
        IterationStart(self.load.now())
    }

    /// Mark the end of one iteration's work and record its timing sample
    pub fn complete(&self, start: IterationStart) -> TimingSample {
        let sample = TimingSample::new(start.0, self.load.now());
        self.load.record(self.handle.id, sample);
        sample
    }

    /// Suspend until this task's next period boundary
    ///
    /// Overruns are counted in the task's statistics and the call returns
    /// immediately; the cursor still advances by exactly one period.
    pub async fn wait_next_period(&self, cursor: &mut Tick) -> DelayOutcome {
        let outcome = delay_until(cursor, self.meta.period).await;

        if let DelayOutcome::Overrun { late_by } = outcome {
            self.load.note_overrun(self.handle.id);
            crate::log_warn!(
                "Task '{}' overran its period by {} ticks",
                self.meta.name,
                late_by
            );
        }

        outcome
    }
}

/// Creates periodic tasks against a shared load table
pub struct TaskRuntime<'a> {
    load: &'a CpuLoad,
    spawned: usize,
}

impl<'a> TaskRuntime<'a> {
    /// Runtime recording into `load`
    pub fn new(load: &'a CpuLoad) -> Self {
        Self { load, spawned: 0 }
    }

    /// Register and launch one periodic task
    ///
    /// `launch` receives the task's context and must start the loop body
    /// (or report why it could not).
    ///
    /// # Errors
    ///
    /// - [`SpawnError::InvalidPeriod`] for a zero-tick period
    /// - [`SpawnError::RegistryFull`] when the task table is full
    /// - whatever `launch` returns, after the registration is rolled back
    pub fn spawn<F>(&mut self, meta: TaskMetadata, launch: F) -> Result<TaskHandle, SpawnError>
    where
        F: FnOnce(TaskContext<'a>) -> Result<(), SpawnError>,
    {
        if meta.period == 0 {
            crate::log_error!("Task '{}': period must be at least one tick", meta.name);
            return Err(SpawnError::InvalidPeriod);
        }

        let id = self.load.register(meta).map_err(|e| {
            crate::log_error!("Task '{}': {}", meta.name, e.as_str());
            e
        })?;

        let handle = TaskHandle {
            id,
            name: meta.name,
        };
        let ctx = TaskContext {
            handle,
            meta,
            load: self.load,
        };

        if let Err(e) = launch(ctx) {
            self.load.unregister_last();
            crate::log_error!("Task '{}' failed to start: {}", meta.name, e.as_str());
            return Err(e);
        }

        self.spawned += 1;
        crate::log_info!(
            "Spawned '{}' (period={} ticks, priority={})",
            meta.name,
            meta.period,
            meta.priority
        );

        Ok(handle)
    }

    /// Number of tasks successfully spawned by this runtime
    pub fn spawned(&self) -> usize {
        self.spawned
    }

    /// Shared load accumulator
    pub fn load(&self) -> &'a CpuLoad {
        self.load
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_spawn_registers_and_launches() {
        let load = CpuLoad::new();
        let mut runtime = TaskRuntime::new(&load);
        let launched = Cell::new(None);

        let handle = runtime
            .spawn(TaskMetadata::new("UART RECEIVER", 20, 1), |ctx| {
                launched.set(Some(ctx.handle()));
                Ok(())
            })
            .unwrap();

        assert_eq!(handle.id(), 0);
        assert_eq!(handle.name(), "UART RECEIVER");
        assert_eq!(launched.get(), Some(handle));
        assert_eq!(runtime.spawned(), 1);
        assert_eq!(load.task(0).unwrap().meta.period, 20);
    }

    #[test]
    fn test_spawn_failure_rolls_back() {
        let load = CpuLoad::new();
        let mut runtime = TaskRuntime::new(&load);

        runtime
            .spawn(TaskMetadata::new("a", 10, 1), |_| Ok(()))
            .unwrap();
        let result = runtime.spawn(TaskMetadata::new("b", 10, 1), |_| {
            Err(SpawnError::PoolExhausted)
        });

        assert_eq!(result, Err(SpawnError::PoolExhausted));
        assert_eq!(load.task_count(), 1);
        assert_eq!(runtime.spawned(), 1);
        assert_eq!(load.find_task_by_name("b"), None);
    }

    #[test]
    fn test_spawn_rejects_zero_period() {
        let load = CpuLoad::new();
        let mut runtime = TaskRuntime::new(&load);
        let result = runtime.spawn(TaskMetadata::new("bad", 0, 1), |_| {
            panic!("must not launch")
        });
        assert_eq!(result, Err(SpawnError::InvalidPeriod));
        assert_eq!(load.task_count(), 0);
    }

    #[test]
    fn test_spawn_registry_full_never_launches() {
        let load = CpuLoad::new();
        let mut runtime = TaskRuntime::new(&load);
        for _ in 0..super::super::load::MAX_TASKS {
            runtime
                .spawn(TaskMetadata::new("t", 10, 1), |_| Ok(()))
                .unwrap();
        }
        let result = runtime.spawn(TaskMetadata::new("extra", 10, 1), |_| {
            panic!("must not launch")
        });
        assert_eq!(result, Err(SpawnError::RegistryFull));
    }

    #[test]
    fn test_context_records_iteration() {
        let load = CpuLoad::new();
        let mut runtime = TaskRuntime::new(&load);
        let ctx_slot = Cell::new(None);
        runtime
            .spawn(TaskMetadata::new("t", 10, 1), |ctx| {
                ctx_slot.set(Some(ctx));
                Ok(())
            })
            .unwrap();
        let ctx = ctx_slot.get().unwrap();

        let start = ctx.begin();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let sample = ctx.complete(start);

        assert!(sample.busy() >= 1);
        let stats = load.stats(ctx.handle().id()).unwrap();
        assert_eq!(stats.execution_count, 1);
        assert_eq!(stats.last_execution, sample.busy());
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_wait_next_period_counts_overrun() {
        let load = CpuLoad::new();
        let mut runtime = TaskRuntime::new(&load);
        let ctx_slot = Cell::new(None);
        runtime
            .spawn(TaskMetadata::new("t", 5, 1), |ctx| {
                ctx_slot.set(Some(ctx));
                Ok(())
            })
            .unwrap();
        let ctx = ctx_slot.get().unwrap();

        let mut cursor = ctx.start_cursor();
        // Work for three periods before waiting
        std::thread::sleep(std::time::Duration::from_millis(15));
        let outcome = ctx.wait_next_period(&mut cursor).await;

        assert!(outcome.is_overrun());
        assert_eq!(load.stats(0).unwrap().overruns, 1);
    }
}
