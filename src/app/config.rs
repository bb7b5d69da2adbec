//! Fixed system configuration
//!
//! The task set is static: six periodic tasks, two button sampling queues and
//! one 28-byte message stream. Nothing here is read at runtime; bring-up
//! validates [`SystemConfig`] once before any task is spawned.

use pico_cadence_core::error::ConfigError;
use pico_cadence_core::scheduler::{SyntheticLoad, TaskMetadata};
use pico_cadence_core::traits::Tick;

use crate::core::scheduler::MAX_TASKS;

/// Number of application tasks
pub const TASK_COUNT: usize = 6;

/// Button 1 edge sampler
pub const BUTTON_1_MONITOR: TaskMetadata = TaskMetadata::new("BUTTON 1 MONITOR", 50, 1);
/// Button 2 edge sampler
pub const BUTTON_2_MONITOR: TaskMetadata = TaskMetadata::new("BUTTON 2 MONITOR", 50, 1);
/// Message producer
pub const PERIODIC_TRANSMITTER: TaskMetadata = TaskMetadata::new("PERIODIC TRANSMITTER", 100, 1);
/// Queue consumer and output writer
pub const UART_RECEIVER: TaskMetadata = TaskMetadata::new("UART RECEIVER", 20, 1);
/// 5-tick synthetic load every 10 ticks
pub const LOAD_1_SIMULATION: TaskMetadata = TaskMetadata::new("LOAD 1 SIMULATION", 10, 1);
/// 12-tick synthetic load every 100 ticks
pub const LOAD_2_SIMULATION: TaskMetadata = TaskMetadata::new("LOAD 2 SIMULATION", 100, 1);

/// Message sent by the transmitter every period
pub const MESSAGE: &[u8; MESSAGE_LEN] = b"\nPeriodic Transmitter 100ms.";
/// Message length in bytes
pub const MESSAGE_LEN: usize = 28;
/// Stream queue capacity: exactly one message
pub const STREAM_CAPACITY: usize = MESSAGE_LEN;

/// Per-byte send timeout in ticks
pub const SEND_TIMEOUT: Tick = 100;
/// Load report interval in ticks
pub const MONITOR_PERIOD: Tick = 1_000;

/// Busy ticks per iteration of `LOAD 1 SIMULATION`
pub const LOAD_1_WORK: Tick = 5;
/// Busy ticks per iteration of `LOAD 2 SIMULATION`
pub const LOAD_2_WORK: Tick = 12;
/// Counted-loop iterations per tick on the reference board
pub const ITERATIONS_PER_TICK: u32 = 12_000;

/// Complete application configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConfig {
    pub button_1: TaskMetadata,
    pub button_2: TaskMetadata,
    pub transmitter: TaskMetadata,
    pub receiver: TaskMetadata,
    pub load_1: TaskMetadata,
    pub load_2: TaskMetadata,
    /// Load report interval
    pub monitor_period: Tick,
    /// Bytes sent by the transmitter each period
    pub message: &'static [u8; MESSAGE_LEN],
    /// Per-byte send timeout
    pub send_timeout: Tick,
    pub load_1_work: Tick,
    pub load_2_work: Tick,
    /// Calibration for [`SyntheticLoad::Counted`]
    pub iterations_per_tick: u32,
}

impl SystemConfig {
    /// Reference configuration
    pub const fn new() -> Self {
        Self {
            button_1: BUTTON_1_MONITOR,
            button_2: BUTTON_2_MONITOR,
            transmitter: PERIODIC_TRANSMITTER,
            receiver: UART_RECEIVER,
            load_1: LOAD_1_SIMULATION,
            load_2: LOAD_2_SIMULATION,
            monitor_period: MONITOR_PERIOD,
            message: MESSAGE,
            send_timeout: SEND_TIMEOUT,
            load_1_work: LOAD_1_WORK,
            load_2_work: LOAD_2_WORK,
            iterations_per_tick: ITERATIONS_PER_TICK,
        }
    }

    /// Task metadata in spawn order
    pub const fn tasks(&self) -> [TaskMetadata; TASK_COUNT] {
        [
            self.button_1,
            self.button_2,
            self.transmitter,
            self.receiver,
            self.load_1,
            self.load_2,
        ]
    }

    /// Work for `LOAD 1 SIMULATION`
    pub const fn load_1_work(&self) -> SyntheticLoad {
        SyntheticLoad::for_ticks(self.load_1_work)
    }

    /// Work for `LOAD 2 SIMULATION`
    pub const fn load_2_work(&self) -> SyntheticLoad {
        SyntheticLoad::for_ticks(self.load_2_work)
    }

    /// Clock-free counted work sized for `ticks` on the reference board
    pub const fn counted_work(&self, ticks: Tick) -> SyntheticLoad {
        SyntheticLoad::calibrated(ticks, self.iterations_per_tick)
    }

    /// Check every period and budget before bring-up
    ///
    /// # Errors
    ///
    /// - [`ConfigError::TooManyTasks`] if the task table cannot hold the set
    /// - [`ConfigError::ZeroPeriod`] for a zero period or monitor interval
    /// - [`ConfigError::BudgetExceedsPeriod`] when a budget, or a load task's
    ///   work, does not fit in its period
    pub fn validate(&self) -> Result<(), ConfigError> {
        if TASK_COUNT > MAX_TASKS {
            return Err(ConfigError::TooManyTasks);
        }

        for task in self.tasks() {
            if task.period == 0 {
                return Err(ConfigError::ZeroPeriod { task: task.name });
            }
            if task.budget > task.period {
                return Err(ConfigError::BudgetExceedsPeriod { task: task.name });
            }
        }

        if self.monitor_period == 0 {
            return Err(ConfigError::ZeroPeriod {
                task: "LOAD MONITOR",
            });
        }

        for (task, work) in [
            (self.load_1, self.load_1_work),
            (self.load_2, self.load_2_work),
        ] {
            if work > task.period {
                return Err(ConfigError::BudgetExceedsPeriod { task: task.name });
            }
        }

        Ok(())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SystemConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.message.len(), 28);
        assert_eq!(config.message[0], b'\n');
    }

    #[test]
    fn test_reference_periods() {
        let periods: std::vec::Vec<_> = SystemConfig::new()
            .tasks()
            .iter()
            .map(|t| (t.name, t.period, t.priority))
            .collect();
        assert_eq!(
            periods,
            std::vec![
                ("BUTTON 1 MONITOR", 50, 1),
                ("BUTTON 2 MONITOR", 50, 1),
                ("PERIODIC TRANSMITTER", 100, 1),
                ("UART RECEIVER", 20, 1),
                ("LOAD 1 SIMULATION", 10, 1),
                ("LOAD 2 SIMULATION", 100, 1),
            ]
        );
    }

    #[test]
    fn test_zero_period_rejected() {
        let config = SystemConfig {
            receiver: TaskMetadata::new("UART RECEIVER", 0, 1),
            ..SystemConfig::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroPeriod {
                task: "UART RECEIVER"
            })
        );
    }

    #[test]
    fn test_budget_over_period_rejected() {
        let config = SystemConfig {
            load_1: LOAD_1_SIMULATION.with_budget(11),
            ..SystemConfig::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BudgetExceedsPeriod {
                task: "LOAD 1 SIMULATION"
            })
        );
    }

    #[test]
    fn test_load_work_must_fit_period() {
        let config = SystemConfig {
            load_2_work: 101,
            ..SystemConfig::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BudgetExceedsPeriod {
                task: "LOAD 2 SIMULATION"
            })
        );
    }

    #[test]
    fn test_zero_monitor_period_rejected() {
        let config = SystemConfig {
            monitor_period: 0,
            ..SystemConfig::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroPeriod { .. })
        ));
    }

    #[test]
    fn test_counted_work_calibration() {
        assert_eq!(
            SystemConfig::new().counted_work(LOAD_1_WORK),
            SyntheticLoad::Counted { iterations: 60_000 }
        );
    }

    #[test]
    fn test_reference_utilization() {
        // 5/10 + 12/100 of the CPU goes to synthetic load
        let config = SystemConfig::new();
        let load_1 = config.load_1_work * 100 / config.load_1.period;
        let load_2 = config.load_2_work * 100 / config.load_2.period;
        assert_eq!(load_1 + load_2, 62);
    }
}
