//! Compact 4-bit encoding of the bank's logical output state.

use crate::types::Channel;

/// A 4-bit encoding of the four logical output values.
///
/// Channel 1 occupies the most significant bit of the nibble, channel 4 the
/// least significant. Snapshots are polarity-agnostic: they record logical
/// on/off values, never raw signal levels, so a snapshot taken from one
/// polarity configuration restores identically on any other.
///
/// Doubles as the drive-pattern type for override routines (`ALL_ON`,
/// `ALL_OFF`, or any combination built with [`Snapshot::with`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot(u8);

impl Snapshot {
    /// All four channels logically off.
    pub const ALL_OFF: Snapshot = Snapshot(0b0000);

    /// All four channels logically on.
    pub const ALL_ON: Snapshot = Snapshot(0b1111);

    /// Creates a snapshot from raw bits. Bits above the nibble are masked off.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Snapshot(bits & 0b1111)
    }

    /// Creates a snapshot with only the given channel on.
    #[inline]
    pub const fn only(channel: Channel) -> Self {
        Snapshot(channel.mask())
    }

    /// Returns the raw 4-bit value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if the given channel is on in this snapshot.
    #[inline]
    pub const fn contains(self, channel: Channel) -> bool {
        self.0 & channel.mask() != 0
    }

    /// Returns a copy with the given channel set on or off.
    #[inline]
    pub const fn with(self, channel: Channel, on: bool) -> Self {
        if on {
            Snapshot(self.0 | channel.mask())
        } else {
            Snapshot(self.0 & !channel.mask())
        }
    }
}
