//! Shared test infrastructure for indicator-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use indicator_sequencer::{
    Delay, EdgeInput, IndicatorBank, IndicatorPin, Output, Polarity, PullMode, TimeDuration,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_add(self, other: Self) -> Self {
        TestDuration(self.0.saturating_add(other.0))
    }
}

/// Shorthand constructor
pub fn ms(millis: u64) -> TestDuration {
    TestDuration(millis)
}

// ============================================================================
// Mock Pins
// ============================================================================

/// Mock pin that latches writes and records every raw level driven
pub struct MockPin {
    level: Rc<Cell<bool>>,
    writes: Rc<RefCell<Vec<bool>>>,
}

/// Test-side handle observing a `MockPin` after it moved into the bank
pub struct PinProbe {
    level: Rc<Cell<bool>>,
    writes: Rc<RefCell<Vec<bool>>>,
}

impl PinProbe {
    /// Current raw signal level
    pub fn level(&self) -> bool {
        self.level.get()
    }

    /// All raw levels driven so far, in order (includes the off-drive from
    /// `Output::new`)
    pub fn writes(&self) -> Vec<bool> {
        self.writes.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }
}

/// Creates a connected pin/probe pair
pub fn mock_pin() -> (MockPin, PinProbe) {
    let level = Rc::new(Cell::new(false));
    let writes = Rc::new(RefCell::new(Vec::new()));
    (
        MockPin {
            level: level.clone(),
            writes: writes.clone(),
        },
        PinProbe { level, writes },
    )
}

impl IndicatorPin for MockPin {
    fn write(&mut self, level: bool) {
        self.level.set(level);
        self.writes.borrow_mut().push(level);
    }

    fn level(&self) -> bool {
        self.level.get()
    }
}

/// Pin whose output driver is broken: writes never latch
pub struct StuckPin {
    pub stuck_level: bool,
}

impl IndicatorPin for StuckPin {
    fn write(&mut self, _level: bool) {}

    fn level(&self) -> bool {
        self.stuck_level
    }
}

// ============================================================================
// Bank Helpers
// ============================================================================

/// Builds a bank with the classic polarity map (channels 1-2 active-low,
/// channels 3-4 active-high) plus probes for each channel
pub fn mock_bank() -> (IndicatorBank<MockPin>, [PinProbe; 4]) {
    mock_bank_with_polarities([
        Polarity::ActiveLow,
        Polarity::ActiveLow,
        Polarity::ActiveHigh,
        Polarity::ActiveHigh,
    ])
}

/// Builds a bank with an explicit polarity map plus probes
pub fn mock_bank_with_polarities(
    polarities: [Polarity; 4],
) -> (IndicatorBank<MockPin>, [PinProbe; 4]) {
    let (p1, probe1) = mock_pin();
    let (p2, probe2) = mock_pin();
    let (p3, probe3) = mock_pin();
    let (p4, probe4) = mock_pin();

    let bank = IndicatorBank::new([
        Output::new(p1, polarities[0]),
        Output::new(p2, polarities[1]),
        Output::new(p3, polarities[2]),
        Output::new(p4, polarities[3]),
    ]);

    (bank, [probe1, probe2, probe3, probe4])
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay provider that records every requested hold
pub struct MockDelay {
    calls: Vec<TestDuration>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// All holds requested so far, in order
    pub fn calls(&self) -> &[TestDuration] {
        &self.calls
    }

    /// Sum of all requested holds in milliseconds
    pub fn total_millis(&self) -> u64 {
        self.calls.iter().map(|d| d.0).sum()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Delay<TestDuration> for MockDelay {
    fn delay(&mut self, duration: TestDuration) {
        self.calls.push(duration);
    }
}

// ============================================================================
// Mock Edge Input
// ============================================================================

/// Mock edge-triggered input recording its pull configuration
pub struct MockButton {
    pub pull: Option<PullMode>,
}

impl MockButton {
    pub fn new() -> Self {
        Self { pull: None }
    }
}

impl EdgeInput for MockButton {
    fn set_pull(&mut self, pull: PullMode) {
        self.pull = Some(pull);
    }
}
