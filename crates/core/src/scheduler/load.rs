//! CPU load accumulation from per-iteration timing samples
//!
//! The accumulator also serves as the task table: every periodic task is
//! registered here once at start-up and addressed by the returned index.

use heapless::Vec;

use super::types::{TaskMetadata, TaskStats, TimingSample};
use crate::error::SpawnError;
use crate::traits::Tick;

/// Per-task entry in the accumulator
#[derive(Debug, Clone, Copy)]
pub struct TaskEntry {
    /// Task metadata captured at registration
    pub meta: TaskMetadata,
    /// Lifetime statistics (not cleared by a window reset)
    pub stats: TaskStats,
    /// Busy ticks attributed to this task in the current window
    pub busy: Tick,
    /// Deadline misses in the current window
    pub window_misses: u32,
    /// Late wake-ups in the current window
    pub window_overruns: u32,
}

/// Busy-tick accounting against elapsed ticks
///
/// `N` bounds the number of tasks that can be registered.
#[derive(Debug)]
pub struct LoadAccumulator<const N: usize> {
    tasks: Vec<TaskEntry, N>,
    busy: Tick,
    baseline: Tick,
}

impl<const N: usize> LoadAccumulator<N> {
    /// Create an accumulator whose first window starts at `now`
    pub const fn new(now: Tick) -> Self {
        Self {
            tasks: Vec::new(),
            busy: 0,
            baseline: now,
        }
    }

    /// Add a task to the table and return its index
    pub fn register(&mut self, meta: TaskMetadata) -> Result<usize, SpawnError> {
        let index = self.tasks.len();
        self.tasks
            .push(TaskEntry {
                meta,
                stats: TaskStats::default(),
                busy: 0,
                window_misses: 0,
                window_overruns: 0,
            })
            .map_err(|_| SpawnError::RegistryFull)?;
        Ok(index)
    }

    /// Remove the most recently registered task
    ///
    /// Only the last registration can be rolled back, which is all bring-up
    /// needs when launching that task fails.
    pub fn unregister_last(&mut self) -> Option<TaskMetadata> {
        self.tasks.pop().map(|entry| entry.meta)
    }

    /// Attribute one iteration's busy time
    ///
    /// Unknown task ids still count toward the global total.
    pub fn record(&mut self, task_id: usize, sample: TimingSample) {
        let busy = sample.busy();
        self.busy = self.busy.saturating_add(busy);

        if let Some(entry) = self.tasks.get_mut(task_id) {
            entry.busy = entry.busy.saturating_add(busy);
            entry.stats.update(busy, entry.meta.budget);
            if !entry.meta.is_within_budget(busy) {
                entry.window_misses = entry.window_misses.saturating_add(1);
            }
        }
    }

    /// Count a late wake-up for `task_id`
    pub fn note_overrun(&mut self, task_id: usize) {
        if let Some(entry) = self.tasks.get_mut(task_id) {
            entry.stats.note_overrun();
            entry.window_overruns = entry.window_overruns.saturating_add(1);
        }
    }

    /// Ticks since construction or the last reset
    #[inline]
    pub fn elapsed(&self, now: Tick) -> Tick {
        now.saturating_sub(self.baseline)
    }

    /// Total busy ticks in the current window
    #[inline]
    pub fn busy(&self) -> Tick {
        self.busy
    }

    /// Global load as a percentage of elapsed ticks, clamped to 0..=100
    pub fn load_percent(&self, now: Tick) -> u8 {
        percent(self.busy, self.elapsed(now))
    }

    /// Load attributable to a single task, clamped to 0..=100
    pub fn task_load_percent(&self, task_id: usize, now: Tick) -> Option<u8> {
        self.tasks
            .get(task_id)
            .map(|entry| percent(entry.busy, self.elapsed(now)))
    }

    /// Zero all window sums and restart the window at `now`
    pub fn reset(&mut self, now: Tick) {
        self.busy = 0;
        self.baseline = now;
        for entry in self.tasks.iter_mut() {
            entry.busy = 0;
            entry.window_misses = 0;
            entry.window_overruns = 0;
        }
    }

    /// Number of registered tasks
    #[inline]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Entry for `task_id`
    pub fn task(&self, task_id: usize) -> Option<&TaskEntry> {
        self.tasks.get(task_id)
    }

    /// Iterate over `(task_id, entry)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &TaskEntry)> {
        self.tasks.iter().enumerate()
    }
}

fn percent(busy: Tick, elapsed: Tick) -> u8 {
    if elapsed == 0 {
        return 0;
    }
    let load = (busy as u128 * 100) / elapsed as u128;
    load.min(100) as u8
}
