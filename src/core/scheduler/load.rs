//! Shared CPU load accounting
//!
//! Wraps the pure `LoadAccumulator` together with a tick source behind a
//! critical section so every task can record its timing samples and the
//! monitor can read and reset the window.

use pico_cadence_core::error::SpawnError;
use pico_cadence_core::scheduler::{LoadAccumulator, TaskEntry, TaskMetadata, TaskStats, TimingSample};
use pico_cadence_core::traits::{Tick, TickSource};

use crate::core::time::EmbassyTicks;
use crate::core::traits::{CsState, SharedState};

/// Maximum number of periodic tasks
pub const MAX_TASKS: usize = 16;

/// Snapshot of the current load window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSnapshot {
    /// Busy ticks in the window
    pub busy: Tick,
    /// Ticks since the window started
    pub elapsed: Tick,
    /// `100 * busy / elapsed`, clamped to 0..=100
    pub load_percent: u8,
}

/// CPU load accumulator shared by all periodic tasks
///
/// Also holds the task table; task ids handed out by [`CpuLoad::register`]
/// index into it.
pub struct CpuLoad<C: TickSource = EmbassyTicks> {
    clock: C,
    state: CsState<LoadAccumulator<MAX_TASKS>>,
}

impl CpuLoad<EmbassyTicks> {
    /// Accumulator on the Embassy clock, window starting now
    pub fn new() -> Self {
        Self::with_clock(EmbassyTicks)
    }
}

impl Default for CpuLoad<EmbassyTicks> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TickSource> CpuLoad<C> {
    /// Accumulator on an explicit tick source, window starting now
    pub fn with_clock(clock: C) -> Self {
        let now = clock.now();
        Self {
            clock,
            state: CsState::new(LoadAccumulator::new(now)),
        }
    }

    /// Tick source used for elapsed time
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current tick on this accumulator's clock
    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    /// Add a task to the table
    pub fn register(&self, meta: TaskMetadata) -> Result<usize, SpawnError> {
        self.state.with_mut(|acc| acc.register(meta))
    }

    /// Roll back the most recent registration
    pub fn unregister_last(&self) -> Option<TaskMetadata> {
        self.state.with_mut(|acc| acc.unregister_last())
    }

    /// Attribute one iteration's busy time to `task_id`
    pub fn record(&self, task_id: usize, sample: TimingSample) {
        self.state.with_mut(|acc| acc.record(task_id, sample));
    }

    /// Count a late wake-up for `task_id`
    pub fn note_overrun(&self, task_id: usize) {
        self.state.with_mut(|acc| acc.note_overrun(task_id));
    }

    /// Ticks since construction or the last reset
    pub fn elapsed(&self) -> Tick {
        let now = self.clock.now();
        self.state.with(|acc| acc.elapsed(now))
    }

    /// Global load percentage for the current window
    pub fn load_percent(&self) -> u8 {
        let now = self.clock.now();
        self.state.with(|acc| acc.load_percent(now))
    }

    /// Load percentage attributable to one task
    pub fn task_load_percent(&self, task_id: usize) -> Option<u8> {
        let now = self.clock.now();
        self.state.with(|acc| acc.task_load_percent(task_id, now))
    }

    /// Busy, elapsed and percentage read under one lock
    pub fn snapshot(&self) -> LoadSnapshot {
        let now = self.clock.now();
        self.state.with(|acc| LoadSnapshot {
            busy: acc.busy(),
            elapsed: acc.elapsed(now),
            load_percent: acc.load_percent(now),
        })
    }

    /// Zero the window sums and restart the window now
    pub fn reset(&self) {
        let now = self.clock.now();
        self.state.with_mut(|acc| acc.reset(now));
    }

    /// Number of registered tasks
    pub fn task_count(&self) -> usize {
        self.state.with(|acc| acc.task_count())
    }

    /// Copy of a task's table entry
    pub fn task(&self, task_id: usize) -> Option<TaskEntry> {
        self.state.with(|acc| acc.task(task_id).copied())
    }

    /// Copy of a task's lifetime statistics
    pub fn stats(&self, task_id: usize) -> Option<TaskStats> {
        self.task(task_id).map(|entry| entry.stats)
    }

    /// Visit a copy of every task entry in registration order
    ///
    /// Each entry is copied out before `f` runs, so `f` may log or take
    /// other locks.
    pub fn for_each_task<F>(&self, mut f: F)
    where
        F: FnMut(usize, &TaskEntry),
    {
        for task_id in 0..self.task_count() {
            if let Some(entry) = self.task(task_id) {
                f(task_id, &entry);
            }
        }
    }

    /// Find a task id by name
    ///
    /// Linear search; intended for monitoring, not hot paths.
    pub fn find_task_by_name(&self, name: &str) -> Option<usize> {
        self.state.with(|acc| {
            acc.iter()
                .find(|(_, entry)| entry.meta.name == name)
                .map(|(id, _)| id)
        })
    }
}
