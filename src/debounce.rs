//! Edge latch that turns a level-sampled button into one event per press.

/// Result of feeding one button sample to a [`Debouncer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// The press edge was just observed; act on it.
    Fired,
    /// The button is still held from an already-reported press.
    Suppressed,
    /// The button reads released; the latch is re-armed.
    Idle,
}

/// Press-edge latch for one button.
///
/// The loop samples buttons by level once per pass, so a human press
/// spans many passes. The latch reports [`PollOutcome::Fired`] on the
/// first pressed sample and swallows the rest until a released sample
/// re-arms it.
///
/// `pressed` is the caller's combined view: the raw sample ANDed with
/// whatever mode gate applies to the button. Feeding the gate in here
/// (rather than checking it after a fire) means a button held across a
/// disallowed-to-allowed transition fires on the first allowed sample.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    was_released: bool,
}

impl Debouncer {
    /// Creates a latch armed to fire on the first pressed sample.
    pub const fn new() -> Self {
        Self { was_released: true }
    }

    /// Feeds one sample and reports what the caller should do.
    pub fn poll(&mut self, pressed: bool) -> PollOutcome {
        if pressed {
            if self.was_released {
                self.was_released = false;
                PollOutcome::Fired
            } else {
                PollOutcome::Suppressed
            }
        } else {
            self.was_released = true;
            PollOutcome::Idle
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
