//! Overwrite-latest sampling queue
//!
//! Capacity one. A write always succeeds and replaces any unread value, so
//! a reader polling slower than the writer sees only the freshest sample
//! (or nothing if the writer has not produced since the last read).

use pico_cadence_core::queue::LatestSlot;

use crate::core::traits::{CsState, SharedState};

/// Single-slot channel where a new write replaces an unread value
pub struct SamplingQueue<T: Copy> {
    slot: CsState<LatestSlot<T>>,
}

impl<T: Copy> SamplingQueue<T> {
    /// Create an empty queue
    ///
    /// This is a const fn, allowing static initialization.
    pub const fn new() -> Self {
        Self {
            slot: CsState::new(LatestSlot::new()),
        }
    }

    /// Store `value`, replacing any unread value. Never blocks.
    pub fn write(&self, value: T) {
        self.slot.with_mut(|slot| slot.write(value));
    }

    /// Consume the pending value, or `None` if nothing is pending
    pub fn try_read(&self) -> Option<T> {
        self.slot.with_mut(|slot| slot.take())
    }

    /// Whether a value is waiting, without consuming it
    pub fn is_occupied(&self) -> bool {
        self.slot.with(|slot| slot.is_occupied())
    }
}

impl<T: Copy> Default for SamplingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pico_cadence_core::queue::Edge;

    #[test]
    fn test_empty_queue_reads_none() {
        let queue: SamplingQueue<Edge> = SamplingQueue::new();
        assert!(!queue.is_occupied());
        assert_eq!(queue.try_read(), None);
    }

    #[test]
    fn test_latest_write_wins() {
        let queue = SamplingQueue::new();
        queue.write(Edge::Rising);
        queue.write(Edge::Falling);
        assert_eq!(queue.try_read(), Some(Edge::Falling));
    }

    #[test]
    fn test_read_consumes_value() {
        let queue = SamplingQueue::new();
        queue.write(b'P');
        assert!(queue.is_occupied());
        assert_eq!(queue.try_read(), Some(b'P'));
        assert_eq!(queue.try_read(), None);
    }

    #[test]
    fn test_static_queue() {
        static QUEUE: SamplingQueue<u8> = SamplingQueue::new();
        QUEUE.write(1);
        QUEUE.write(2);
        assert_eq!(QUEUE.try_read(), Some(2));
        assert_eq!(QUEUE.try_read(), None);
    }

    #[test]
    fn test_slow_reader_never_sees_backlog() {
        let queue = std::sync::Arc::new(SamplingQueue::new());

        let writer = {
            let queue = queue.clone();
            std::thread::spawn(move || {
                for i in 0..=1_000u32 {
                    queue.write(i);
                }
            })
        };
        writer.join().unwrap();

        assert_eq!(queue.try_read(), Some(1_000));
        assert_eq!(queue.try_read(), None);
    }
}
