//! Core types for the periodic scheduler
//!
//! This module defines the fundamental types used by the scheduler:
//! - Task metadata (fixed at start-up)
//! - Task statistics (runtime monitoring)
//! - Execution timing samples

use crate::traits::Tick;

/// Task metadata fixed when the task is created
///
/// Each periodic task has associated metadata that defines its cadence
/// and scheduling hints. It lives for the lifetime of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskMetadata {
    /// Human-readable task name for logging and debugging
    pub name: &'static str,

    /// Period in ticks; the loop body runs once per period
    pub period: Tick,

    /// Priority hint (higher = more important)
    ///
    /// Note: Embassy's thread-mode executor does not preempt by priority.
    /// This field is used for monitoring and reporting.
    pub priority: u8,

    /// Execution time budget in ticks
    ///
    /// If an iteration exceeds this budget, a deadline miss is counted.
    /// Defaults to the full period.
    pub budget: Tick,
}

impl TaskMetadata {
    /// Metadata whose budget is the whole period
    pub const fn new(name: &'static str, period: Tick, priority: u8) -> Self {
        Self {
            name,
            period,
            priority,
            budget: period,
        }
    }

    /// Same metadata with a tighter execution budget
    pub const fn with_budget(self, budget: Tick) -> Self {
        Self { budget, ..self }
    }

    /// Check if execution time is within budget
    #[inline]
    pub const fn is_within_budget(&self, execution: Tick) -> bool {
        execution <= self.budget
    }
}

/// One iteration's start and finish ticks
///
/// Passed straight into the load accumulator and not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    /// Tick at which the iteration's work began
    pub start: Tick,
    /// Tick at which the iteration's work ended
    pub finish: Tick,
}

impl TimingSample {
    /// Create a sample from a start/finish pair
    pub const fn new(start: Tick, finish: Tick) -> Self {
        Self { start, finish }
    }

    /// Busy ticks in this sample; a finish before start counts as zero
    #[inline]
    pub const fn busy(&self) -> Tick {
        self.finish.saturating_sub(self.start)
    }
}

/// Runtime statistics for a single task
///
/// Updated after each iteration and queried by the load monitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// Last execution time in ticks
    pub last_execution: Tick,

    /// Average execution time in ticks (exponential moving average)
    ///
    /// Uses EMA with alpha = 0.1 to smooth out variations while remaining
    /// responsive to changes in execution time.
    pub avg_execution: Tick,

    /// Maximum execution time observed in ticks
    pub max_execution: Tick,

    /// Number of iterations whose execution exceeded the budget
    pub deadline_misses: u32,

    /// Number of wake-ups that happened after the intended boundary
    pub overruns: u32,

    /// Total number of iterations
    pub execution_count: u64,
}

impl TaskStats {
    /// Update statistics with a new execution measurement
    pub fn update(&mut self, execution: Tick, budget: Tick) {
        self.last_execution = execution;
        self.execution_count = self.execution_count.saturating_add(1);

        // EMA formula: avg_new = alpha * value + (1 - alpha) * avg_old
        // Fixed-point: avg_new = (value + 9 * avg_old) / 10
        if self.execution_count == 1 {
            self.avg_execution = execution;
        } else {
            // Widened so huge samples cannot overflow; the result never
            // exceeds the larger operand and fits back into a tick.
            let avg = (execution as u128 + 9 * self.avg_execution as u128) / 10;
            self.avg_execution = avg as Tick;
        }

        if execution > self.max_execution {
            self.max_execution = execution;
        }

        if execution > budget {
            self.deadline_misses = self.deadline_misses.saturating_add(1);
        }
    }

    /// Count a late wake-up reported by the delay primitive
    pub fn note_overrun(&mut self) {
        self.overruns = self.overruns.saturating_add(1);
    }

    /// Reset all statistics to initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
