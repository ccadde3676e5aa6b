//! Time abstraction traits for platform-agnostic timing.

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating addition (clamps at the maximum representable value).
    fn saturating_add(self, other: Self) -> Self;
}

/// Trait for abstracting blocking delay providers.
///
/// Implement this for your timing system (hardware timer spin loop, RTOS
/// sleep, etc.). The delay is blocking and monotonic with best-effort
/// precision; there is no guaranteed upper bound on overshoot.
pub trait Delay<D: TimeDuration> {
    /// Blocks for at least the given duration.
    fn delay(&mut self, duration: D);
}
