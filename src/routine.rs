//! Data-driven override routines for edge events.
//!
//! An [`OverrideRoutine`] describes what an edge handler does - drive
//! patterns with holds, an optional timing-state mutation - as validated
//! data. Executing one always follows the same protocol: snapshot the bank,
//! run the steps, apply the timing action, restore the snapshot. The
//! restore path carries the bank's fatal integrity check, uniformly for
//! every routine.

use crate::context::SystemContext;
use crate::dispatch::EdgeHandler;
use crate::output::IndicatorPin;
use crate::snapshot::Snapshot;
use crate::time::{Delay, TimeDuration};
use crate::types::RoutineError;
use heapless::Vec;

/// A single step in an override routine.
#[derive(Debug, Clone, Copy)]
pub struct OverrideStep<D: TimeDuration> {
    /// Pattern to drive all four outputs to, or `None` to hold without
    /// touching the outputs (debounce-style waits).
    pub drive: Option<Snapshot>,

    /// How long to hold after driving.
    pub hold: D,
}

impl<D: TimeDuration> OverrideStep<D> {
    /// Creates a new override step.
    #[inline]
    pub fn new(drive: Option<Snapshot>, hold: D) -> Self {
        Self { drive, hold }
    }
}

/// How a routine's step list is executed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunMode<D: TimeDuration> {
    /// Run the step list once, in order.
    Once,

    /// Repeat the step list, accumulating hold durations, terminating as
    /// soon as the accumulated total reaches the target. The check runs
    /// after every sub-wait, so the final sub-wait may overshoot the target
    /// by less than one step hold.
    AccumulateUntil(D),
}

/// Mutation of the shared timing state performed after the steps.
///
/// The effect is observed by the sequencer on its next interval read, not
/// synchronously.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimingAction<D: TimeDuration> {
    /// Leave timing state untouched.
    None,

    /// Set the hold interval to a constant.
    SetInterval(D),

    /// Alternate the hold interval between two constants, tracked by the
    /// timing state's toggle flag. The first trigger selects `alternate`,
    /// the next restores `primary`, and so on.
    ToggleInterval {
        /// Interval selected on even triggers (the resting speed).
        primary: D,
        /// Interval selected on odd triggers.
        alternate: D,
    },
}

/// A validated override routine, bindable to an edge event.
///
/// # Type Parameters
/// * `D` - The duration type
/// * `N` - Maximum number of steps this routine can hold
#[derive(Debug, Clone)]
pub struct OverrideRoutine<D: TimeDuration, const N: usize> {
    steps: Vec<OverrideStep<D>, N>,
    run_mode: RunMode<D>,
    timing_action: TimingAction<D>,
}

impl<D: TimeDuration, const N: usize> OverrideRoutine<D, N> {
    /// Creates a new routine builder.
    pub fn builder() -> RoutineBuilder<D, N> {
        RoutineBuilder::new()
    }

    /// Returns the number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the run mode.
    pub fn run_mode(&self) -> RunMode<D> {
        self.run_mode
    }

    /// Returns the timing action.
    pub fn timing_action(&self) -> TimingAction<D> {
        self.timing_action
    }

    fn run_step<P, W>(step: &OverrideStep<D>, ctx: &mut SystemContext<'_, P, D, W>)
    where
        P: IndicatorPin,
        W: Delay<D>,
    {
        if let Some(pattern) = step.drive {
            ctx.outputs.apply(pattern);
        }
        ctx.delay.delay(step.hold);
    }
}

impl<P, D, W, const N: usize> EdgeHandler<P, D, W> for OverrideRoutine<D, N>
where
    P: IndicatorPin,
    D: TimeDuration,
    W: Delay<D>,
{
    fn handle(&mut self, ctx: &mut SystemContext<'_, P, D, W>) {
        // Snapshot unconditionally, even for routines that never drive the
        // outputs: every routine restores through the same verified path.
        let saved = ctx.outputs.snapshot();

        match self.run_mode {
            RunMode::Once => {
                for step in &self.steps {
                    Self::run_step(step, ctx);
                }
            }
            RunMode::AccumulateUntil(target) => {
                let mut elapsed = D::ZERO;
                'accumulate: loop {
                    for step in &self.steps {
                        Self::run_step(step, ctx);
                        elapsed = elapsed.saturating_add(step.hold);
                        if elapsed >= target {
                            break 'accumulate;
                        }
                    }
                }
            }
        }

        match self.timing_action {
            TimingAction::None => {}
            TimingAction::SetInterval(interval) => {
                ctx.timing.set_interval(interval);
            }
            TimingAction::ToggleInterval { primary, alternate } => {
                let toggled = ctx.timing.is_toggled();
                ctx.timing.set_interval(if toggled { primary } else { alternate });
                ctx.timing.set_toggled(!toggled);
            }
        }

        ctx.outputs.restore(saved);
    }
}

/// Builder for constructing validated override routines.
#[derive(Debug)]
pub struct RoutineBuilder<D: TimeDuration, const N: usize> {
    steps: Vec<OverrideStep<D>, N>,
    run_mode: RunMode<D>,
    timing_action: TimingAction<D>,
}

impl<D: TimeDuration, const N: usize> RoutineBuilder<D, N> {
    /// Creates a new empty routine builder.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            run_mode: RunMode::Once,
            timing_action: TimingAction::None,
        }
    }

    /// Adds a step that drives all outputs to `pattern` and holds.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than `N` steps were added
    pub fn drive(mut self, pattern: Snapshot, hold: D) -> Result<Self, RoutineError> {
        self.steps
            .push(OverrideStep::new(Some(pattern), hold))
            .map_err(|_| RoutineError::CapacityExceeded)?;
        Ok(self)
    }

    /// Adds a step that holds without touching the outputs.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than `N` steps were added
    pub fn settle(mut self, hold: D) -> Result<Self, RoutineError> {
        self.steps
            .push(OverrideStep::new(None, hold))
            .map_err(|_| RoutineError::CapacityExceeded)?;
        Ok(self)
    }

    /// Sets the run mode. Default is `RunMode::Once`.
    pub fn run_mode(mut self, mode: RunMode<D>) -> Self {
        self.run_mode = mode;
        self
    }

    /// Sets the timing action. Default is `TimingAction::None`.
    pub fn timing(mut self, action: TimingAction<D>) -> Self {
        self.timing_action = action;
        self
    }

    /// Builds and validates the routine.
    ///
    /// # Errors
    /// * `EmptyRoutine` - No steps and no timing action
    /// * `ZeroAccumulation` - `AccumulateUntil` with zero total step hold
    pub fn build(self) -> Result<OverrideRoutine<D, N>, RoutineError> {
        if self.steps.is_empty() && self.timing_action == TimingAction::None {
            return Err(RoutineError::EmptyRoutine);
        }

        if let RunMode::AccumulateUntil(_) = self.run_mode {
            let total: u64 = self.steps.iter().map(|s| s.hold.as_millis()).sum();
            if total == 0 {
                return Err(RoutineError::ZeroAccumulation);
            }
        }

        Ok(OverrideRoutine {
            steps: self.steps,
            run_mode: self.run_mode,
            timing_action: self.timing_action,
        })
    }
}

impl<D: TimeDuration, const N: usize> Default for RoutineBuilder<D, N> {
    fn default() -> Self {
        Self::new()
    }
}
