//! Overwrite-latest single-slot state machine
//!
//! Holds at most one unread value. A write replaces whatever is pending; a
//! take consumes it. Readers that poll slower than the writer only ever see
//! the freshest value, never a backlog.

/// Single-slot overwrite-latest storage
///
/// Two states: `Empty` and `Occupied(value)`. Synchronization is left to the
/// owner (the runtime wraps this in a critical-section mutex).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatestSlot<T: Copy> {
    /// No unread value
    Empty,
    /// One unread value
    Occupied(T),
}

impl<T: Copy> Default for LatestSlot<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T: Copy> LatestSlot<T> {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self::Empty
    }

    /// Store `value`, replacing any unread value. Never fails.
    #[inline]
    pub fn write(&mut self, value: T) {
        *self = Self::Occupied(value);
    }

    /// Consume the pending value, leaving the slot empty
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        match core::mem::replace(self, Self::Empty) {
            Self::Occupied(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Whether a value is waiting to be read
    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_reads_none() {
        let mut slot: LatestSlot<u8> = LatestSlot::new();
        assert!(!slot.is_occupied());
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_write_then_take() {
        let mut slot = LatestSlot::new();
        slot.write(7u8);
        assert!(slot.is_occupied());
        assert_eq!(slot.take(), Some(7));
        assert!(!slot.is_occupied());
    }

    #[test]
    fn test_latest_write_wins() {
        let mut slot = LatestSlot::new();
        slot.write(b'A');
        slot.write(b'B');
        assert_eq!(slot.take(), Some(b'B'));
    }

    #[test]
    fn test_second_take_without_write_is_empty() {
        let mut slot = LatestSlot::new();
        slot.write(1u8);
        assert_eq!(slot.take(), Some(1));
        assert_eq!(slot.take(), None);
    }
}
