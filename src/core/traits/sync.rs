//! Synchronized state abstraction for state shared between tasks.
//!
//! Queues and the load monitor are the only state touched by more than one
//! task. They keep their data behind `CsState`, which serializes every
//! access with a critical section so callers never lock anything themselves.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

/// Synchronized state access.
///
/// # Example
///
/// ```ignore
/// struct Counter {
///     value: u32,
/// }
///
/// fn increment<S: SharedState<Counter>>(state: &S) -> u32 {
///     state.with_mut(|counter| {
///         counter.value += 1;
///         counter.value
///     })
/// }
/// ```
pub trait SharedState<T> {
    /// Access state immutably.
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Access state mutably.
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

/// Critical-section protected state.
///
/// Uses Embassy's blocking mutex with critical sections, so access is
/// atomic with respect to other tasks and interrupt handlers. Closures must
/// stay short: interrupts are masked while they run.
pub struct CsState<T> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<T>>,
}

impl<T> CsState<T> {
    /// Creates a new `CsState` wrapping the given value.
    ///
    /// This is a const fn, allowing static initialization.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }
}

impl<T> SharedState<T> for CsState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.lock(|cell| f(&cell.borrow()))
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cs_state_read_write() {
        let state = CsState::new(42u32);
        assert_eq!(state.with(|v| *v), 42);

        state.with_mut(|v| *v += 1);
        assert_eq!(state.with(|v| *v), 43);
    }

    #[test]
    fn test_cs_state_shared_across_threads() {
        let state = std::sync::Arc::new(CsState::new(0u32));
        let handles: std::vec::Vec<_> = (0..4)
            .map(|_| {
                let state = state.clone();
                std::thread::spawn(move || {
                    for _ in 0..1_000 {
                        state.with_mut(|v| *v += 1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(state.with(|v| *v), 4_000);
    }
}
