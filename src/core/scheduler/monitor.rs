//! Load monitor for scheduler health
//!
//! Periodically reads the CPU load window and per-task statistics, logs a
//! summary plus warnings, then resets the window so each report covers one
//! monitoring period:
//! - CPU load
//! - Deadline misses (iteration longer than budget)
//! - Period overruns (late wake-ups)
//! - Task execution times

use pico_cadence_core::traits::{Tick, TickSource};

use super::delay::delay_until;
use super::load::{CpuLoad, LoadSnapshot};
use crate::core::time;

/// CPU load warning threshold (percentage)
pub const CPU_LOAD_WARNING_THRESHOLD: u8 = 75;

/// Result of one monitoring pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Window that was reported (before reset)
    pub window: LoadSnapshot,
    /// Number of warnings emitted
    pub warnings: u32,
}

/// Log load and per-task statistics, then start a new window
pub fn collect_and_report<C: TickSource>(load: &CpuLoad<C>) -> LoadReport {
    let window = load.snapshot();

    crate::log_info!(
        "Scheduler: cpu={}% busy={} elapsed={} ticks tasks={}",
        window.load_percent,
        window.busy,
        window.elapsed,
        load.task_count()
    );

    let warnings = check_warnings(load, window.load_percent);
    report_task_stats(load);

    load.reset();

    LoadReport { window, warnings }
}

/// Check for warning conditions, returning how many were raised
fn check_warnings<C: TickSource>(load: &CpuLoad<C>, cpu_load: u8) -> u32 {
    let mut warnings = 0;

    if cpu_load >= CPU_LOAD_WARNING_THRESHOLD {
        crate::log_warn!("High CPU load: {}%", cpu_load);
        warnings += 1;
    }

    for task_id in 0..load.task_count() {
        let Some(entry) = load.task(task_id) else {
            continue;
        };

        if entry.window_misses > 0 {
            crate::log_warn!(
                "Task '{}': {} deadline misses (budget {} ticks, {} total)",
                entry.meta.name,
                entry.window_misses,
                entry.meta.budget,
                entry.stats.deadline_misses
            );
            warnings += 1;
        }

        if entry.window_overruns > 0 {
            crate::log_warn!(
                "Task '{}': {} period overruns (period {} ticks, {} total)",
                entry.meta.name,
                entry.window_overruns,
                entry.meta.period,
                entry.stats.overruns
            );
            warnings += 1;
        }
    }

    warnings
}

/// Report per-task statistics
fn report_task_stats<C: TickSource>(load: &CpuLoad<C>) {
    let count = load.task_count();
    if count == 0 {
        return;
    }

    crate::log_info!("Task statistics ({} tasks):", count);

    load.for_each_task(|task_id, entry| {
        let share = load.task_load_percent(task_id).unwrap_or(0);

        crate::log_info!(
            "  {}: exec={} (avg={}, max={}) load={}% count={}",
            entry.meta.name,
            entry.stats.last_execution,
            entry.stats.avg_execution,
            entry.stats.max_execution,
            share,
            entry.stats.execution_count
        );
    });
}

/// Monitoring loop: report every `period` ticks
///
/// Runs forever on the same drift-free cadence as the periodic tasks.
pub async fn monitor(load: &CpuLoad, period: Tick) {
    let mut cursor = time::now();

    loop {
        delay_until(&mut cursor, period).await;
        collect_and_report(load);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pico_cadence_core::scheduler::{TaskMetadata, TimingSample};
    use pico_cadence_core::traits::MockTicks;

    #[test]
    fn test_collect_and_report_resets_window() {
        let load = CpuLoad::with_clock(MockTicks::new());
        let a = load.register(TaskMetadata::new("LOAD 1 SIMULATION", 10, 1)).unwrap();
        let b = load.register(TaskMetadata::new("LOAD 2 SIMULATION", 100, 1)).unwrap();

        load.record(a, TimingSample::new(0, 5));
        load.record(b, TimingSample::new(5, 17));
        load.clock().set(100);

        let report = collect_and_report(&load);

        assert_eq!(report.window.busy, 17);
        assert_eq!(report.window.elapsed, 100);
        assert_eq!(report.window.load_percent, 17);
        assert_eq!(report.warnings, 0);

        // New window starts at the report
        assert_eq!(load.elapsed(), 0);
        assert_eq!(load.snapshot().busy, 0);
    }

    #[test]
    fn test_warnings_for_high_load_and_misses() {
        let load = CpuLoad::with_clock(MockTicks::new());
        let id = load
            .register(TaskMetadata::new("busy", 10, 1).with_budget(5))
            .unwrap();

        load.record(id, TimingSample::new(0, 9));
        load.note_overrun(id);
        load.clock().set(10);

        let report = collect_and_report(&load);

        assert_eq!(report.window.load_percent, 90);
        // High load, one deadline miss, one overrun
        assert_eq!(report.warnings, 3);
    }

    #[test]
    fn test_misses_warned_only_in_their_window() {
        let load = CpuLoad::with_clock(MockTicks::new());
        let id = load
            .register(TaskMetadata::new("busy", 10, 1).with_budget(5))
            .unwrap();

        load.record(id, TimingSample::new(0, 9));
        load.note_overrun(id);
        load.clock().set(1_000);
        assert_eq!(collect_and_report(&load).warnings, 2);

        // Clean window: no repeat of the earlier miss and overrun
        load.record(id, TimingSample::new(1_000, 1_003));
        load.clock().set(2_000);
        assert_eq!(collect_and_report(&load).warnings, 0);

        let stats = load.task(id).unwrap().stats;
        assert_eq!((stats.deadline_misses, stats.overruns), (1, 1));
    }

    #[test]
    fn test_report_empty_table() {
        let load = CpuLoad::with_clock(MockTicks::with_initial(10));
        let report = collect_and_report(&load);
        assert_eq!(report.window.load_percent, 0);
        assert_eq!(report.warnings, 0);
    }
}
