//! 4-digit decimal counter with positional carry and borrow.

use crate::DIGIT_COUNT;

/// A 4-digit decimal value stored least-significant digit first.
///
/// The digits are independent base-10 positions, not a packed binary
/// integer: index 0 is the ones position, index 3 the most significant.
/// Each digit stays within 0-9 outside of a single in-flight carry or
/// borrow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeValue([u8; DIGIT_COUNT]);

impl TimeValue {
    /// All digits zero.
    pub const ZERO: Self = Self([0; DIGIT_COUNT]);

    /// Creates a value from digits, least-significant first.
    pub const fn new(digits: [u8; DIGIT_COUNT]) -> Self {
        Self(digits)
    }

    /// The digits, least-significant first.
    pub const fn digits(&self) -> [u8; DIGIT_COUNT] {
        self.0
    }

    /// A single digit by position (0 = ones, 3 = most significant).
    pub fn digit(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Adds one with carry propagation from the ones position upward.
    ///
    /// Carry out of the top digit is dropped, so the value wraps to
    /// all-zero only when every digit was 9.
    pub fn increment(&mut self) {
        for digit in self.0.iter_mut() {
            *digit += 1;
            if *digit == 10 {
                *digit = 0;
            } else {
                break;
            }
        }
    }

    /// Subtracts one with borrow propagation from the ones position upward.
    ///
    /// Borrow out of the top digit is dropped, so an all-zero value wraps
    /// to 9 in every position. Callers that consider that underflow gate
    /// on [`is_zero`](Self::is_zero) first.
    pub fn decrement(&mut self) {
        for digit in self.0.iter_mut() {
            if *digit == 0 {
                *digit = 9;
            } else {
                *digit -= 1;
                break;
            }
        }
    }

    /// True iff every digit is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
