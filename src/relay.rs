//! Relay output tied to countdown activity.

use crate::io::DigitalOutput;

/// The switched load output.
///
/// The relay follows countdown activity: energized while a countdown
/// runs, released otherwise. Writes happen only on activity edges (the
/// caller compares states across a pass), so a latched external line is
/// not chattered every loop iteration.
pub struct Relay<O: DigitalOutput> {
    line: O,
}

impl<O: DigitalOutput> Relay<O> {
    /// Takes ownership of the coil line and forces it de-energized.
    pub fn new(mut line: O) -> Self {
        line.set(false);
        Self { line }
    }

    /// Drives the coil to match the given activity state.
    pub fn sync(&mut self, energized: bool) {
        self.line.set(energized);
    }
}
