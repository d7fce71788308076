//! Countdown state machine fed by accumulated display dwell time.

use crate::MILLIS_PER_UNIT;
use crate::digits::TimeValue;

/// Whether the countdown is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountdownState {
    /// Not running; the panel shows and edits the configured timeout.
    Inactive,
    /// Running; remaining time decreases one unit per elapsed second.
    Active,
}

/// The running countdown: remaining units plus a millisecond accumulator.
///
/// Elapsed time arrives through [`accrue`](Self::accrue) as the display
/// reports each dwell interval, and [`service`](Self::service) converts
/// whole seconds of accumulation into digit decrements. The accumulator
/// carries sub-second remainders across passes so no time is lost to
/// the loop's granularity.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Countdown {
    state: CountdownState,
    remaining: TimeValue,
    elapsed_ms: u16,
}

impl Countdown {
    /// Creates an inactive countdown with nothing remaining.
    pub const fn new() -> Self {
        Self {
            state: CountdownState::Inactive,
            remaining: TimeValue::ZERO,
            elapsed_ms: 0,
        }
    }

    /// Starts counting down from `timeout`.
    ///
    /// Returns `false` without starting when `timeout` is zero; a zero
    /// countdown would expire before it began.
    pub fn start(&mut self, timeout: TimeValue) -> bool {
        if timeout.is_zero() {
            return false;
        }
        self.remaining = timeout;
        self.elapsed_ms = 0;
        self.state = CountdownState::Active;
        true
    }

    /// Stops counting without touching the remaining value.
    pub fn stop(&mut self) {
        self.state = CountdownState::Inactive;
    }

    /// Credits `ms` milliseconds of elapsed time while active.
    ///
    /// Ignored while inactive, so the caller can report every dwell
    /// interval unconditionally.
    pub fn accrue(&mut self, ms: u16) {
        if self.state == CountdownState::Active {
            self.elapsed_ms += ms;
        }
    }

    /// Converts one whole second of accumulation into a decrement.
    ///
    /// At most one unit is consumed per call; the loop runs often enough
    /// that the accumulator never builds up multiple seconds. Reaching
    /// zero deactivates the countdown in the same call.
    pub fn service(&mut self) {
        if self.state == CountdownState::Active && self.elapsed_ms >= MILLIS_PER_UNIT {
            self.remaining.decrement();
            self.elapsed_ms -= MILLIS_PER_UNIT;
            if self.remaining.is_zero() {
                self.state = CountdownState::Inactive;
            }
        }
    }

    /// Current state.
    pub fn state(&self) -> CountdownState {
        self.state
    }

    /// True while the countdown is running.
    pub fn is_active(&self) -> bool {
        self.state == CountdownState::Active
    }

    /// Remaining time in units.
    pub fn remaining(&self) -> TimeValue {
        self.remaining
    }

    /// Milliseconds accumulated toward the next decrement.
    pub fn elapsed_ms(&self) -> u16 {
        self.elapsed_ms
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
