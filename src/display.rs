//! Multiplexed 7-segment display driver.
//!
//! The four digit positions share one set of segment lines. The driver
//! lights them one position at a time, fast enough that persistence of
//! vision reads all four as lit, and reports each dwell interval to the
//! caller so the same delay that paces the display also clocks the
//! countdown.

use crate::digits::TimeValue;
use crate::io::DigitalOutput;
use crate::segments::Segments;
use crate::time::DwellSource;
use crate::{DIGIT_COUNT, SEGMENT_COUNT};

/// Driver for a 4-digit multiplexed display.
///
/// Owns the seven shared segment lines and the four digit-common
/// enables; borrows the dwell source that paces the scan. Positions are
/// numbered left to right, position 0 being the most significant digit.
pub struct DisplayMux<'d, O: DigitalOutput, D: DwellSource> {
    segments: [O; SEGMENT_COUNT],
    commons: [O; DIGIT_COUNT],
    dwell: &'d D,
}

impl<'d, O: DigitalOutput, D: DwellSource> DisplayMux<'d, O, D> {
    /// Creates a driver and forces the display into a known dark state.
    ///
    /// All segment lines are blanked and every digit common disabled, so
    /// whatever the lines held at reset cannot ghost onto the display.
    pub fn new(segments: [O; SEGMENT_COUNT], commons: [O; DIGIT_COUNT], dwell: &'d D) -> Self {
        let mut display = Self {
            segments,
            commons,
            dwell,
        };
        display.drive_segments(Segments::BLANK);
        for common in display.commons.iter_mut() {
            common.set(false);
        }
        display
    }

    /// Scans `value` across all four positions once, blocking for one
    /// dwell interval per position.
    ///
    /// Position 0 (leftmost) shows the most significant digit, so the
    /// stored least-significant-first digits come out reversed. For each
    /// position the segment lines settle before the common enables and
    /// the common drops before the next pattern is driven; only one
    /// position is ever enabled at a time.
    ///
    /// `on_dwell` is called once per position with the milliseconds the
    /// dwell source reported, while that position is still lit.
    pub fn render_frame<F: FnMut(u16)>(&mut self, value: TimeValue, mut on_dwell: F) {
        for position in 0..DIGIT_COUNT {
            let digit = value.digit(DIGIT_COUNT - 1 - position);
            self.drive_segments(Segments::for_digit(digit));
            self.commons[position].set(true);
            let ms = self.dwell.dwell();
            on_dwell(ms);
            self.commons[position].set(false);
        }
    }

    /// Writes one pattern across all seven segment lines.
    fn drive_segments(&mut self, pattern: Segments) {
        for (line, mask) in self.segments.iter_mut().zip(Segments::LINES) {
            line.set(pattern.contains(mask));
        }
    }
}
