#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`IndicatorBank`**: Four polarity-aware outputs driven by logical on/off values
//! - **`Snapshot`**: 4-bit encoding of the bank's logical state for save/restore
//! - **`CyclePattern`**: The channel visit order for the foreground cycle
//! - **`IndicatorSequencer`**: Phase state machine that drives the bank forever
//! - **`OverrideRoutine`**: Data-driven edge handler - drive patterns, holds, timing mutations
//! - **`EdgeDispatcher`**: Binds handlers to rise/fall edges behind one exclusion gate
//! - **`SystemContext`**: Explicit shared-state root passed to the sequencer and handlers
//! - **`IndicatorPin` / `EdgeInput` / `Delay`**: Traits to implement for your hardware
//!
//! All operations work on logical values; each output's electrical polarity
//! (active-high or active-low) is normalized at the [`Output`] boundary, so
//! snapshots restore identically on any polarity configuration.

pub mod context;
pub mod cycle;
pub mod dispatch;
pub mod output;
pub mod routine;
pub mod sequencer;
pub mod snapshot;
pub mod time;
pub mod types;

pub use context::{SystemContext, TimingState};
pub use cycle::{CycleBuilder, CyclePattern};
pub use dispatch::{
    DispatchOutcome, EdgeDispatcher, EdgeHandler, EdgeInput, ExclusionGate, GateGuard,
};
pub use output::{IndicatorBank, IndicatorPin, Output};
pub use routine::{OverrideRoutine, OverrideStep, RoutineBuilder, RunMode, TimingAction};
pub use sequencer::IndicatorSequencer;
pub use snapshot::Snapshot;
pub use time::{Delay, TimeDuration};
pub use types::{Channel, EdgeEvent, PatternError, Polarity, PullMode, RoutineError};

/// Number of output channels in a bank.
pub const CHANNEL_COUNT: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    // Basic compilation tests - actual functionality tests would go here
    #[test]
    fn types_compile() {
        let _ = Channel::Ch1;
        let _ = Polarity::ActiveLow;
        let _ = EdgeEvent::Fall;
        let _ = PullMode::Up;
        let _ = Snapshot::ALL_ON;
    }

    #[test]
    fn channel_masks_cover_the_nibble() {
        let combined = Channel::ALL.iter().fold(0u8, |acc, ch| acc | ch.mask());
        assert_eq!(combined, Snapshot::ALL_ON.bits());
    }
}
