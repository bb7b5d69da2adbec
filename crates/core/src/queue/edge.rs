//! Pin levels and edge detection for sampled digital inputs

/// Logic level of a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinLevel {
    /// Logic 0
    #[default]
    Low,
    /// Logic 1
    High,
}

impl PinLevel {
    /// Convert a boolean pin reading (`true` = high)
    #[inline]
    pub const fn from_bool(high: bool) -> Self {
        if high {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }

    /// Whether the level is high
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, PinLevel::High)
    }
}

/// Transition observed between two consecutive samples of an input
///
/// Travels through the sampling queue as a single tagged byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Low to high
    Rising,
    /// High to low
    Falling,
    /// Same level as the previous sample
    Unchanged,
}

impl Edge {
    /// Wire tag for [`Edge::Rising`]
    pub const RISING_TAG: u8 = b'P';
    /// Wire tag for [`Edge::Falling`]
    pub const FALLING_TAG: u8 = b'N';
    /// Wire tag for [`Edge::Unchanged`]
    pub const UNCHANGED_TAG: u8 = b'.';

    /// Classify the transition from `old` to `new`
    pub const fn detect(old: PinLevel, new: PinLevel) -> Self {
        match (old, new) {
            (PinLevel::Low, PinLevel::High) => Edge::Rising,
            (PinLevel::High, PinLevel::Low) => Edge::Falling,
            _ => Edge::Unchanged,
        }
    }

    /// Single-byte tag for this edge
    pub const fn to_byte(self) -> u8 {
        match self {
            Edge::Rising => Self::RISING_TAG,
            Edge::Falling => Self::FALLING_TAG,
            Edge::Unchanged => Self::UNCHANGED_TAG,
        }
    }

    /// Parse a tag byte; unknown tags yield `None`
    pub const fn from_byte(tag: u8) -> Option<Self> {
        match tag {
            Self::RISING_TAG => Some(Edge::Rising),
            Self::FALLING_TAG => Some(Edge::Falling),
            Self::UNCHANGED_TAG => Some(Edge::Unchanged),
            _ => None,
        }
    }

    /// Whether this is a real transition
    #[inline]
    pub const fn is_transition(self) -> bool {
        !matches!(self, Edge::Unchanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_transitions() {
        assert_eq!(Edge::detect(PinLevel::Low, PinLevel::High), Edge::Rising);
        assert_eq!(Edge::detect(PinLevel::High, PinLevel::Low), Edge::Falling);
        assert_eq!(Edge::detect(PinLevel::Low, PinLevel::Low), Edge::Unchanged);
        assert_eq!(Edge::detect(PinLevel::High, PinLevel::High), Edge::Unchanged);
    }

    #[test]
    fn test_tags() {
        assert_eq!(Edge::Rising.to_byte(), b'P');
        assert_eq!(Edge::Falling.to_byte(), b'N');
        assert_eq!(Edge::Unchanged.to_byte(), b'.');
        assert_eq!(Edge::from_byte(b'N'), Some(Edge::Falling));
        assert_eq!(Edge::from_byte(b'x'), None);
    }

    #[test]
    fn test_is_transition() {
        assert!(Edge::Rising.is_transition());
        assert!(Edge::Falling.is_transition());
        assert!(!Edge::Unchanged.is_transition());
    }

    #[test]
    fn test_pin_level_from_bool() {
        assert_eq!(PinLevel::from_bool(true), PinLevel::High);
        assert!(!PinLevel::from_bool(false).is_high());
        assert_eq!(PinLevel::default(), PinLevel::Low);
    }
}
