//! Foreground indicator sequencer with phase tracking.
//!
//! Provides [`IndicatorSequencer`] which cycles the output bank through a
//! [`CyclePattern`], one channel per phase, re-reading the shared hold
//! interval on every phase so that override handlers' timing mutations take
//! effect without the sequencer ever being notified.

use crate::context::SystemContext;
use crate::cycle::CyclePattern;
use crate::output::IndicatorPin;
use crate::time::{Delay, TimeDuration};
use crate::types::Channel;

/// Drives the indicator bank through a repeating cyclic sequence.
///
/// A phase state machine with one state per pattern slot and unconditional
/// cyclic transitions. Each [`step`](Self::step): set the phase's channel
/// on, hold for the current interval, set it off, advance. There is no
/// terminal state; the sequence runs for the lifetime of the process.
///
/// The sequencer holds no references to shared state. Everything it touches
/// arrives through the [`SystemContext`], so an override handler dispatched
/// between steps sees exactly the same state the sequencer does.
///
/// # Type Parameters
/// * `N` - Maximum number of phases in the cycle pattern
pub struct IndicatorSequencer<const N: usize> {
    pattern: CyclePattern<N>,
    phase: usize,
}

impl<const N: usize> IndicatorSequencer<N> {
    /// Creates a sequencer at phase 0 of the given pattern.
    pub fn new(pattern: CyclePattern<N>) -> Self {
        Self { pattern, phase: 0 }
    }

    /// Executes one phase: channel on, hold, channel off, advance.
    ///
    /// The hold interval is read fresh from `ctx.timing` on every call -
    /// this is the propagation point for handler mutations. A hold already
    /// in progress keeps the interval it started with.
    pub fn step<P, D, W>(&mut self, ctx: &mut SystemContext<'_, P, D, W>)
    where
        P: IndicatorPin,
        D: TimeDuration,
        W: Delay<D>,
    {
        let channel = self.pattern.channel(self.phase);

        ctx.outputs.set(channel, true);
        ctx.delay.delay(ctx.timing.interval());
        ctx.outputs.set(channel, false);

        self.phase = (self.phase + 1) % self.pattern.len();
    }

    /// Executes one full pass through the pattern.
    pub fn cycle<P, D, W>(&mut self, ctx: &mut SystemContext<'_, P, D, W>)
    where
        P: IndicatorPin,
        D: TimeDuration,
        W: Delay<D>,
    {
        for _ in 0..self.pattern.len() {
            self.step(ctx);
        }
    }

    /// Runs the sequence forever.
    pub fn run<P, D, W>(&mut self, ctx: &mut SystemContext<'_, P, D, W>) -> !
    where
        P: IndicatorPin,
        D: TimeDuration,
        W: Delay<D>,
    {
        loop {
            self.step(ctx);
        }
    }

    /// Returns the index of the next phase to execute.
    pub fn phase(&self) -> usize {
        self.phase
    }

    /// Returns the channel the next step will drive.
    pub fn current_channel(&self) -> Channel {
        self.pattern.channel(self.phase)
    }

    /// Resets the sequencer to phase 0.
    pub fn reset(&mut self) {
        self.phase = 0;
    }

    /// Returns a reference to the cycle pattern.
    pub fn pattern(&self) -> &CyclePattern<N> {
        &self.pattern
    }
}
