//! Edge-event dispatch with a single mutual-exclusion gate.
//!
//! Provides [`EdgeDispatcher`] which binds at most one handler per edge
//! direction and enforces the non-reentrancy contract of interrupt-style
//! handlers: while any handler is executing, every further edge event is
//! dropped - never queued, never nested - across both edge directions.
//! Also defines the [`EdgeInput`] trait for the hardware boundary.

use core::cell::Cell;

use crate::context::SystemContext;
use crate::output::IndicatorPin;
use crate::time::{Delay, TimeDuration};
use crate::types::{EdgeEvent, PullMode};

/// Trait for abstracting the edge-triggered input hardware.
///
/// The platform guarantees exactly one handler invocation per qualifying
/// edge and serialized delivery. The dispatcher configures the pull mode
/// once at construction and never revisits it.
pub trait EdgeInput {
    /// Configures the input's pull resistor.
    fn set_pull(&mut self, pull: PullMode);
}

/// A handler bound to an edge event.
///
/// Runs to completion once dispatched; there is no cancellation. Implemented
/// by [`OverrideRoutine`] and by any custom handler.
///
/// [`OverrideRoutine`]: crate::routine::OverrideRoutine
pub trait EdgeHandler<P: IndicatorPin, D: TimeDuration, W: Delay<D>> {
    /// Handles one edge event against the shared context.
    fn handle(&mut self, ctx: &mut SystemContext<'_, P, D, W>);
}

/// The result of dispatching an edge event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchOutcome {
    /// The bound handler ran to completion.
    Handled,

    /// A handler was already executing; the event was dropped, not queued.
    Dropped,

    /// No handler is bound for this edge direction.
    Unbound,
}

/// Mutual-exclusion guard shared by all handlers of one dispatcher.
///
/// Models the hardware rule that interrupt handlers cannot nest: the gate is
/// engaged for a handler's full duration and any dispatch attempted while it
/// is engaged is refused. Uses a plain `Cell` because the concurrency model
/// is single-threaded cooperative; a multi-threaded host must confine all
/// dispatch to one logical thread (or wrap it in one mutex) to preserve the
/// invariant.
pub struct ExclusionGate {
    engaged: Cell<bool>,
}

impl ExclusionGate {
    /// Creates a disengaged gate.
    pub const fn new() -> Self {
        Self {
            engaged: Cell::new(false),
        }
    }

    /// Engages the gate, or returns `None` if it is already engaged.
    ///
    /// The gate disengages when the returned guard is dropped.
    pub fn try_engage(&self) -> Option<GateGuard<'_>> {
        if self.engaged.get() {
            return None;
        }
        self.engaged.set(true);
        Some(GateGuard { gate: self })
    }

    /// Returns true if a handler is currently executing.
    pub fn is_engaged(&self) -> bool {
        self.engaged.get()
    }
}

impl Default for ExclusionGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Disengages its [`ExclusionGate`] on drop.
pub struct GateGuard<'g> {
    gate: &'g ExclusionGate,
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.gate.engaged.set(false);
    }
}

/// Binds edge events to handlers and dispatches them non-reentrantly.
///
/// Owns the edge input (pull mode is configured once in [`new`](Self::new))
/// and holds at most one handler per edge direction; binding an edge again
/// replaces the previous handler. All dispatch goes through one shared
/// [`ExclusionGate`], so mutual exclusion holds across *all* registered
/// handlers, not merely against same-edge reentry.
///
/// # Type Parameters
/// * `'h` - Lifetime of the bound handler references
/// * `'g` - Lifetime of the shared gate
/// * `E` - Edge input implementation type
/// * `P` - Indicator pin type
/// * `D` - Duration type
/// * `W` - Delay provider type
pub struct EdgeDispatcher<'h, 'g, E, P, D, W>
where
    E: EdgeInput,
    P: IndicatorPin,
    D: TimeDuration,
    W: Delay<D>,
{
    input: E,
    gate: &'g ExclusionGate,
    rise: Option<&'h mut dyn EdgeHandler<P, D, W>>,
    fall: Option<&'h mut dyn EdgeHandler<P, D, W>>,
}

impl<'h, 'g, E, P, D, W> EdgeDispatcher<'h, 'g, E, P, D, W>
where
    E: EdgeInput,
    P: IndicatorPin,
    D: TimeDuration,
    W: Delay<D>,
{
    /// Creates a dispatcher with no handlers bound, configuring the input's
    /// pull mode once.
    pub fn new(mut input: E, pull: PullMode, gate: &'g ExclusionGate) -> Self {
        input.set_pull(pull);

        Self {
            input,
            gate,
            rise: None,
            fall: None,
        }
    }

    /// Binds a handler to an edge direction, replacing any previous binding.
    pub fn bind(&mut self, edge: EdgeEvent, handler: &'h mut dyn EdgeHandler<P, D, W>) {
        match edge {
            EdgeEvent::Rise => self.rise = Some(handler),
            EdgeEvent::Fall => self.fall = Some(handler),
        }
    }

    /// Returns true if a handler is bound for the given edge direction.
    pub fn is_bound(&self, edge: EdgeEvent) -> bool {
        match edge {
            EdgeEvent::Rise => self.rise.is_some(),
            EdgeEvent::Fall => self.fall.is_some(),
        }
    }

    /// Returns a reference to the edge input.
    pub fn input(&self) -> &E {
        &self.input
    }

    /// Delivers one edge event.
    ///
    /// Engages the gate for the handler's full duration. An event arriving
    /// while the gate is engaged is dropped without touching any state.
    pub fn dispatch(
        &mut self,
        edge: EdgeEvent,
        ctx: &mut SystemContext<'_, P, D, W>,
    ) -> DispatchOutcome {
        let slot = match edge {
            EdgeEvent::Rise => self.rise.as_deref_mut(),
            EdgeEvent::Fall => self.fall.as_deref_mut(),
        };

        let Some(handler) = slot else {
            return DispatchOutcome::Unbound;
        };

        let Some(_guard) = self.gate.try_engage() else {
            return DispatchOutcome::Dropped;
        };

        handler.handle(ctx);
        DispatchOutcome::Handled
    }
}
