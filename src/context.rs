//! Shared mutable state, made explicit.
//!
//! The original globals of this kind of firmware (a speed variable, a toggle
//! flag, the output objects themselves) live here as an explicit context
//! owned by the process root and passed by reference to the sequencer and to
//! each override handler. Exactly two actors touch it - the sequencer and
//! the currently executing handler - and the dispatch gate keeps them
//! temporally exclusive.

use crate::output::{IndicatorBank, IndicatorPin};
use crate::time::{Delay, TimeDuration};

/// Process-wide timing state.
///
/// Read by the sequencer on every hold, written only by override handlers.
pub struct TimingState<D: TimeDuration> {
    interval: D,
    toggled: bool,
}

impl<D: TimeDuration> TimingState<D> {
    /// Creates timing state with the given initial hold interval.
    pub fn new(interval: D) -> Self {
        Self {
            interval,
            toggled: false,
        }
    }

    /// Returns the current hold interval.
    pub fn interval(&self) -> D {
        self.interval
    }

    /// Sets the hold interval. Takes effect on the sequencer's next hold.
    pub fn set_interval(&mut self, interval: D) {
        self.interval = interval;
    }

    /// Returns the toggle flag used by alternating-interval routines.
    pub fn is_toggled(&self) -> bool {
        self.toggled
    }

    /// Sets the toggle flag.
    pub fn set_toggled(&mut self, toggled: bool) {
        self.toggled = toggled;
    }
}

/// Borrowed view of everything the sequencer and handlers share.
///
/// Constructed by the process root around its bank, timing state, and delay
/// provider, then passed to [`IndicatorSequencer::step`] and
/// [`EdgeDispatcher::dispatch`].
///
/// [`IndicatorSequencer::step`]: crate::sequencer::IndicatorSequencer::step
/// [`EdgeDispatcher::dispatch`]: crate::dispatch::EdgeDispatcher::dispatch
pub struct SystemContext<'a, P: IndicatorPin, D: TimeDuration, W: Delay<D>> {
    /// The four indicator outputs.
    pub outputs: &'a mut IndicatorBank<P>,
    /// Shared timing state.
    pub timing: &'a mut TimingState<D>,
    /// Blocking delay provider.
    pub delay: &'a mut W,
}

impl<'a, P: IndicatorPin, D: TimeDuration, W: Delay<D>> SystemContext<'a, P, D, W> {
    /// Creates a context over the given shared state.
    pub fn new(
        outputs: &'a mut IndicatorBank<P>,
        timing: &'a mut TimingState<D>,
        delay: &'a mut W,
    ) -> Self {
        Self {
            outputs,
            timing,
            delay,
        }
    }
}
