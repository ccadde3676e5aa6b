//! Polarity-aware outputs and the four-channel indicator bank.
//!
//! Provides [`IndicatorBank`] which owns the four outputs, drives them by
//! logical value, and encodes/decodes the whole bank to a [`Snapshot`] for
//! save/restore around override handlers. Also defines the [`IndicatorPin`]
//! trait for hardware abstraction.

use crate::CHANNEL_COUNT;
use crate::snapshot::Snapshot;
use crate::types::{Channel, Polarity};

/// Trait for abstracting a single raw digital output.
///
/// Implement this for your output hardware (GPIO register, port expander,
/// shift register, etc.). Handle any hardware errors internally - these
/// methods cannot fail.
pub trait IndicatorPin {
    /// Drives the raw signal level.
    fn write(&mut self, level: bool);

    /// Reads back the last driven raw signal level.
    fn level(&self) -> bool;
}

/// A single polarized output channel.
///
/// Wraps a raw pin with a polarity fixed at construction so that all higher
/// layers operate on logical on/off values. The logical value is always
/// derived from the pin's read-back level, so a pin that fails to latch a
/// write is observable.
pub struct Output<P: IndicatorPin> {
    pin: P,
    polarity: Polarity,
}

impl<P: IndicatorPin> Output<P> {
    /// Creates an output and drives it logically off.
    pub fn new(pin: P, polarity: Polarity) -> Self {
        let mut output = Self { pin, polarity };
        output.set(false);
        output
    }

    /// Sets the logical value, driving the raw level per polarity.
    pub fn set(&mut self, value: bool) {
        let level = match self.polarity {
            Polarity::ActiveHigh => value,
            Polarity::ActiveLow => !value,
        };
        self.pin.write(level);
    }

    /// Returns the logical value, read back through the pin.
    pub fn value(&self) -> bool {
        match self.polarity {
            Polarity::ActiveHigh => self.pin.level(),
            Polarity::ActiveLow => !self.pin.level(),
        }
    }

    /// Returns the polarity fixed at construction.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

/// An ordered bank of exactly four outputs.
///
/// The channel order and polarity assignment never change after
/// construction. The bank is the only writer of its pins; it is shared
/// between the foreground sequencer and the currently executing override
/// handler, who are temporally exclusive by the dispatch gate.
pub struct IndicatorBank<P: IndicatorPin> {
    outputs: [Output<P>; CHANNEL_COUNT],
}

impl<P: IndicatorPin> IndicatorBank<P> {
    /// Creates a bank from four outputs, channel 1 first.
    ///
    /// Each output was already driven off by [`Output::new`], so a fresh
    /// bank encodes as [`Snapshot::ALL_OFF`].
    pub fn new(outputs: [Output<P>; CHANNEL_COUNT]) -> Self {
        Self { outputs }
    }

    /// Sets one channel's logical value.
    pub fn set(&mut self, channel: Channel, on: bool) {
        self.outputs[channel.index()].set(on);
    }

    /// Returns one channel's logical value.
    pub fn is_on(&self, channel: Channel) -> bool {
        self.outputs[channel.index()].value()
    }

    /// Returns a reference to one channel's output.
    pub fn output(&self, channel: Channel) -> &Output<P> {
        &self.outputs[channel.index()]
    }

    /// Encodes the bank's logical state, channel 1 in the most significant bit.
    pub fn snapshot(&self) -> Snapshot {
        let mut state = Snapshot::ALL_OFF;
        for channel in Channel::ALL {
            state = state.with(channel, self.is_on(channel));
        }
        state
    }

    /// Drives every channel to the given pattern.
    pub fn apply(&mut self, state: Snapshot) {
        for channel in Channel::ALL {
            self.set(channel, state.contains(channel));
        }
    }

    /// Restores a previously captured snapshot and verifies it took effect.
    ///
    /// # Panics
    /// Panics if re-encoding the bank does not reproduce `saved`. A mismatch
    /// means an output failed to latch its value; continuing with corrupted
    /// indicator state is unsafe, so this is fatal rather than recoverable.
    pub fn restore(&mut self, saved: Snapshot) {
        self.apply(saved);

        let verify = self.snapshot();
        assert!(
            verify == saved,
            "output state restore failed integrity check"
        );
    }
}
