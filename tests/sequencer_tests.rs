//! Integration tests for IndicatorSequencer

mod common;
use common::*;

use indicator_sequencer::{
    Channel, CyclePattern, IndicatorSequencer, Snapshot, SystemContext, TimingState,
};

fn pattern_1243() -> CyclePattern<4> {
    CyclePattern::<4>::builder()
        .then(Channel::Ch1)
        .unwrap()
        .then(Channel::Ch2)
        .unwrap()
        .then(Channel::Ch4)
        .unwrap()
        .then(Channel::Ch3)
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn full_cycle_drives_each_channel_once_and_ends_all_off() {
    let (mut bank, probes) = mock_bank();
    let mut timing = TimingState::new(ms(1000));
    let mut delay = MockDelay::new();
    let mut sequencer = IndicatorSequencer::new(pattern_1243());

    let mut ctx = SystemContext::new(&mut bank, &mut timing, &mut delay);
    sequencer.cycle(&mut ctx);

    // One hold per phase, four phases, interval 1000 each.
    assert_eq!(delay.calls(), &[ms(1000); 4]);
    assert_eq!(bank.snapshot(), Snapshot::ALL_OFF);

    // Each channel saw exactly one on-write and one off-write beyond the
    // off-drive from construction.
    for probe in &probes {
        assert_eq!(probe.write_count(), 3);
    }
}

#[test]
fn phases_advance_in_pattern_order_and_wrap() {
    let (mut bank, _probes) = mock_bank();
    let mut timing = TimingState::new(ms(100));
    let mut delay = MockDelay::new();
    let mut sequencer = IndicatorSequencer::new(pattern_1243());

    let expected = [Channel::Ch1, Channel::Ch2, Channel::Ch4, Channel::Ch3];
    for (phase, channel) in expected.iter().enumerate() {
        assert_eq!(sequencer.phase(), phase);
        assert_eq!(sequencer.current_channel(), *channel);

        let mut ctx = SystemContext::new(&mut bank, &mut timing, &mut delay);
        sequencer.step(&mut ctx);
    }

    // Wrapped back to the first phase.
    assert_eq!(sequencer.phase(), 0);
    assert_eq!(sequencer.current_channel(), Channel::Ch1);
}

#[test]
fn step_leaves_only_its_channel_on_during_the_hold() {
    let (mut bank, probes) = mock_bank();
    let mut timing = TimingState::new(ms(750));
    let mut delay = MockDelay::new();

    let pattern = CyclePattern::<4>::builder()
        .then(Channel::Ch4)
        .unwrap()
        .build()
        .unwrap();
    let mut sequencer = IndicatorSequencer::new(pattern);

    let mut ctx = SystemContext::new(&mut bank, &mut timing, &mut delay);
    sequencer.step(&mut ctx);

    // Ch4 is active-high: construction drove low, then on (high), then off.
    assert_eq!(probes[3].writes(), vec![false, true, false]);
    // The other channels were never touched after construction.
    assert_eq!(probes[0].write_count(), 1);
    assert_eq!(probes[1].write_count(), 1);
    assert_eq!(probes[2].write_count(), 1);
}

#[test]
fn interval_is_read_fresh_on_every_hold() {
    let (mut bank, _probes) = mock_bank();
    let mut timing = TimingState::new(ms(1000));
    let mut delay = MockDelay::new();
    let mut sequencer = IndicatorSequencer::new(pattern_1243());

    let mut ctx = SystemContext::new(&mut bank, &mut timing, &mut delay);
    sequencer.step(&mut ctx);

    // A handler-style mutation between steps...
    timing.set_interval(ms(250));

    let mut ctx = SystemContext::new(&mut bank, &mut timing, &mut delay);
    sequencer.step(&mut ctx);

    // ...takes effect on the very next hold.
    assert_eq!(delay.calls(), &[ms(1000), ms(250)]);
}

#[test]
fn reset_returns_to_phase_zero() {
    let (mut bank, _probes) = mock_bank();
    let mut timing = TimingState::new(ms(100));
    let mut delay = MockDelay::new();
    let mut sequencer = IndicatorSequencer::new(pattern_1243());

    let mut ctx = SystemContext::new(&mut bank, &mut timing, &mut delay);
    sequencer.step(&mut ctx);
    sequencer.step(&mut ctx);
    assert_eq!(sequencer.phase(), 2);

    sequencer.reset();
    assert_eq!(sequencer.phase(), 0);
    assert_eq!(sequencer.current_channel(), Channel::Ch1);
}

#[test]
fn pattern_is_inspectable_after_construction() {
    let sequencer = IndicatorSequencer::new(pattern_1243());
    assert_eq!(
        sequencer.pattern().as_slice(),
        &[Channel::Ch1, Channel::Ch2, Channel::Ch4, Channel::Ch3]
    );
    assert_eq!(sequencer.pattern().len(), 4);
    assert!(!sequencer.pattern().is_empty());
}
