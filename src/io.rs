//! Hardware abstraction traits for the digital lines the timer drives
//! and reads.
//!
//! Implementations wrap whatever pin types the target HAL provides.
//! Electrical polarity (active-high vs active-low outputs) is an
//! implementation concern: [`DigitalOutput::set`] speaks in logical
//! on/off, and the wrapper inverts where the wiring requires it.

/// A single digital output line (segment, digit common, or relay coil).
pub trait DigitalOutput {
    /// Drives the line to the requested logical state.
    ///
    /// `on` means the connected load becomes active (segment lit, digit
    /// enabled, relay energized), whatever voltage level that takes.
    /// Handle any hardware errors internally - this method cannot fail.
    fn set(&mut self, on: bool);
}

/// A single digital input line sampled once per poll.
///
/// Buttons wired to ground with pull-ups read high while released and
/// low while pressed. Callers translate the raw level themselves so
/// the trait stays a plain voltage read.
pub trait DigitalInput {
    /// Samples the current electrical level of the line.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn is_high(&self) -> bool;
}
