//! Bounded FIFO byte stream
//!
//! Built on `embassy_sync::channel::Channel`. Capacity is fixed at compile
//! time; a send into a full queue waits for space up to a caller-supplied
//! timeout instead of overwriting or growing.
//!
//! `send` suspends, so it must not be called from interrupt context.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::with_timeout;
use pico_cadence_core::error::QueueError;
use pico_cadence_core::traits::Tick;

use crate::core::time;

/// Bounded byte FIFO with timed send and non-blocking receive
pub struct StreamQueue<const N: usize> {
    channel: Channel<CriticalSectionRawMutex, u8, N>,
}

impl<const N: usize> StreamQueue<N> {
    /// Create an empty queue
    ///
    /// This is a const fn, allowing static initialization.
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Append `byte`, waiting up to `timeout` ticks for space
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Timeout`] if no space was freed in time. The
    /// byte is not enqueued and the queue is left unchanged. A zero timeout
    /// never waits and fails with `Timeout` on a full queue.
    pub async fn send(&self, byte: u8, timeout: Tick) -> Result<(), QueueError> {
        if timeout == 0 {
            return self.try_send(byte).map_err(|_| QueueError::Timeout);
        }

        with_timeout(time::duration_of(timeout), self.channel.send(byte))
            .await
            .map_err(|_| QueueError::Timeout)
    }

    /// Append `byte` if there is space
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Full`] when the queue is at capacity.
    pub fn try_send(&self, byte: u8) -> Result<(), QueueError> {
        self.channel.try_send(byte).map_err(|_| QueueError::Full)
    }

    /// Pop the oldest byte, or `None` if the queue is empty
    pub fn try_receive(&self) -> Option<u8> {
        self.channel.try_receive().ok()
    }

    /// Move up to `buf.len()` buffered bytes into `buf`, oldest first
    ///
    /// Returns the number of bytes written.
    pub fn drain_into(&self, buf: &mut [u8]) -> usize {
        let mut count = 0;
        for slot in buf.iter_mut() {
            match self.try_receive() {
                Some(byte) => {
                    *slot = byte;
                    count += 1;
                }
                None => break,
            }
        }
        count
    }

    /// Number of buffered, unread bytes
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    /// Whether no bytes are buffered
    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    /// Whether the queue is at capacity
    pub fn is_full(&self) -> bool {
        self.channel.is_full()
    }

    /// Fixed capacity in bytes
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Discard all buffered bytes immediately
    pub fn reset(&self) {
        self.channel.clear();
    }
}

impl<const N: usize> Default for StreamQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
