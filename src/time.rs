//! Time abstraction trait for platform-agnostic pacing.

/// Trait for abstracting the per-digit dwell delay.
///
/// The timer has no interrupt-driven clock: elapsed time is accounted
/// for by summing the dwell intervals the display spends on each digit.
/// An implementation blocks for its interval and reports how many
/// milliseconds actually passed, which keeps the display duty cycle and
/// the countdown bookkeeping fed from the same source.
pub trait DwellSource {
    /// Blocks for one dwell interval and returns its length in
    /// milliseconds.
    fn dwell(&self) -> u16;
}
