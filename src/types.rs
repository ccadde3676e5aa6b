//! Core types shared across the crate.

/// One of the four logical output channels.
///
/// The channel order is fixed: `Ch1` occupies the most significant bit of
/// the 4-bit snapshot encoding, `Ch4` the least significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Channel 1 (snapshot bit `0b1000`).
    Ch1,
    /// Channel 2 (snapshot bit `0b0100`).
    Ch2,
    /// Channel 3 (snapshot bit `0b0010`).
    Ch3,
    /// Channel 4 (snapshot bit `0b0001`).
    Ch4,
}

impl Channel {
    /// All channels in fixed order.
    pub const ALL: [Channel; 4] = [Channel::Ch1, Channel::Ch2, Channel::Ch3, Channel::Ch4];

    /// Zero-based index of this channel.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Bit mask of this channel within a snapshot nibble.
    #[inline]
    pub const fn mask(self) -> u8 {
        0b1000 >> (self as usize)
    }
}

/// Electrical polarity of an output, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Logical on drives the raw signal high.
    ActiveHigh,
    /// Logical on drives the raw signal low.
    ActiveLow,
}

/// A qualifying transition on the edge-triggered input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeEvent {
    /// Low-to-high transition (button release with a pull-up).
    Rise,
    /// High-to-low transition (button press with a pull-up).
    Fall,
}

/// Pull resistor configuration for the edge-triggered input.
///
/// Applied once at dispatcher construction, never revisited at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PullMode {
    /// Internal pull-up resistor.
    Up,
    /// Internal pull-down resistor.
    Down,
    /// No pull resistor.
    None,
}

/// Cycle pattern validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    /// No phases provided.
    EmptyPattern,

    /// Pattern capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for PatternError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PatternError::EmptyPattern => {
                write!(f, "cycle pattern must visit at least one channel")
            }
            PatternError::CapacityExceeded => {
                write!(f, "cycle pattern capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PatternError {}

/// Override routine validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoutineError {
    /// Routine has no steps and no timing action; it would do nothing.
    EmptyRoutine,

    /// Accumulating run mode with zero total step hold would never terminate.
    ZeroAccumulation,

    /// Step capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for RoutineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RoutineError::EmptyRoutine => {
                write!(f, "override routine must have at least one step or a timing action")
            }
            RoutineError::ZeroAccumulation => {
                write!(
                    f,
                    "accumulating routines need a non-zero total step hold to reach their target"
                )
            }
            RoutineError::CapacityExceeded => {
                write!(f, "override routine capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RoutineError {}
