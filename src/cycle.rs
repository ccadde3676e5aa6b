//! Cycle pattern: the channel visit order for the foreground loop.

use crate::types::{Channel, PatternError};
use heapless::Vec;

/// The ordered channel visit order for one foreground cycle.
///
/// Each slot becomes one sequencer phase: channel on, hold, channel off.
/// Classic orders are 1-2-4-3 and 4-1-2-3, but any non-empty order up to
/// capacity `N` is valid.
///
/// # Type Parameters
/// * `N` - Maximum number of phases this pattern can hold
#[derive(Debug, Clone)]
pub struct CyclePattern<const N: usize> {
    order: Vec<Channel, N>,
}

impl<const N: usize> CyclePattern<N> {
    /// Creates a new pattern builder.
    pub fn builder() -> CycleBuilder<N> {
        CycleBuilder::new()
    }

    /// Returns the number of phases.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the pattern has no phases. Never true for a built
    /// pattern; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the channel driven in the given phase.
    ///
    /// # Panics
    /// Panics if `phase >= len()`.
    pub fn channel(&self, phase: usize) -> Channel {
        self.order[phase]
    }

    /// Returns the phases as a slice.
    pub fn as_slice(&self) -> &[Channel] {
        &self.order
    }
}

/// Builder for constructing validated cycle patterns.
#[derive(Debug)]
pub struct CycleBuilder<const N: usize> {
    order: Vec<Channel, N>,
}

impl<const N: usize> CycleBuilder<N> {
    /// Creates a new empty pattern builder.
    pub fn new() -> Self {
        Self { order: Vec::new() }
    }

    /// Appends a phase visiting the given channel.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than `N` phases were added
    pub fn then(mut self, channel: Channel) -> Result<Self, PatternError> {
        self.order
            .push(channel)
            .map_err(|_| PatternError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds and validates the pattern.
    ///
    /// # Errors
    /// * `EmptyPattern` - No phases were added
    pub fn build(self) -> Result<CyclePattern<N>, PatternError> {
        if self.order.is_empty() {
            return Err(PatternError::EmptyPattern);
        }

        Ok(CyclePattern { order: self.order })
    }
}

impl<const N: usize> Default for CycleBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
