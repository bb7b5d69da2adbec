//! Scheduler, queue and configuration error types

use core::fmt;

/// Errors raised while bringing up the task set
///
/// All variants are fatal: bring-up must stop before the scheduler starts
/// with a partially created task set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// The task table has no free slot
    RegistryFull,
    /// The platform task engine could not allocate the task (stack or pool)
    PoolExhausted,
    /// A task was declared with a zero-tick period
    InvalidPeriod,
}

impl SpawnError {
    /// Static description, usable by loggers without `Display` support
    pub const fn as_str(&self) -> &'static str {
        match self {
            SpawnError::RegistryFull => "Task registry full",
            SpawnError::PoolExhausted => "Task engine out of resources",
            SpawnError::InvalidPeriod => "Task period must be at least one tick",
        }
    }
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by queue operations
///
/// An empty queue is not an error; reads report it as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// No space became available before the send timeout expired
    Timeout,
    /// The queue was full and the caller asked not to wait
    Full,
}

impl QueueError {
    /// Static description, usable by loggers without `Display` support
    pub const fn as_str(&self) -> &'static str {
        match self {
            QueueError::Timeout => "Queue send timed out",
            QueueError::Full => "Queue full",
        }
    }
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors found while validating the static task configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Task declared with a zero-tick period
    ZeroPeriod {
        /// Task name
        task: &'static str,
    },
    /// Execution budget larger than the task period
    BudgetExceedsPeriod {
        /// Task name
        task: &'static str,
    },
    /// More tasks configured than the task table can hold
    TooManyTasks,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroPeriod { task } => write!(f, "Task '{}' has a zero period", task),
            ConfigError::BudgetExceedsPeriod { task } => {
                write!(f, "Task '{}' budget exceeds its period", task)
            }
            ConfigError::TooManyTasks => write!(f, "Too many tasks configured"),
        }
    }
}
