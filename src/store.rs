//! Persistence of the configured timeout across power cycles.

use crate::digits::TimeValue;

/// Timeout used when the backing store holds nothing valid.
///
/// Twenty units, the same value a fresh device ships with.
pub const DEFAULT_TIMEOUT: TimeValue = TimeValue::new([0, 2, 0, 0]);

/// Trait for abstracting timeout persistence.
///
/// Backed by EEPROM on real hardware. Saves happen only on an explicit
/// operator action, never automatically on edit, which keeps wear on a
/// limited-endurance cell bounded by button presses.
pub trait TimeoutStore {
    /// Reads the persisted timeout.
    ///
    /// A store that cannot produce a valid value (unreadable cells, a
    /// digit outside 0-9) returns [`DEFAULT_TIMEOUT`] instead; the
    /// loaded value is always displayable as-is.
    /// Handle any hardware errors internally - this method cannot fail.
    fn load(&mut self) -> TimeValue;

    /// Persists `value` as the new power-on timeout.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn save(&mut self, value: TimeValue);
}
