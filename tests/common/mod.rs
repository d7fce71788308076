//! Shared test infrastructure for relay-timer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use relay_timer::{
    BUTTON_COUNT, Button, DIGIT_COUNT, DigitalInput, DigitalOutput, DisplayMux, DwellSource,
    Relay, SEGMENT_COUNT, Segments, TimeValue, TimeoutStore, TimerPanel,
};

// ============================================================================
// Output Line Probes
// ============================================================================

/// Observable state of one output line.
///
/// The panel takes ownership of its lines, so the fakes write through a
/// shared probe that the test keeps.
#[derive(Default)]
pub struct LineProbe {
    pub state: Cell<bool>,
    pub writes: Cell<u32>,
}

/// Mock output line that records every write into its probe.
pub struct MockLine<'a>(pub &'a LineProbe);

impl DigitalOutput for MockLine<'_> {
    fn set(&mut self, on: bool) {
        self.0.state.set(on);
        self.0.writes.set(self.0.writes.get() + 1);
    }
}

// ============================================================================
// Mock Button Input
// ============================================================================

/// Mock button line with an externally controlled level.
///
/// High means released, matching a pulled-up button wired to ground.
pub struct MockButton<'a> {
    level: &'a Cell<bool>,
}

impl DigitalInput for MockButton<'_> {
    fn is_high(&self) -> bool {
        self.level.get()
    }
}

// ============================================================================
// Mock Dwell Source
// ============================================================================

/// Mock dwell source that never blocks and reports a fixed interval.
///
/// Tests pick the interval to control how much time one loop pass
/// represents; four dwells of 250 ms make every pass a full second.
pub struct MockDwell {
    ms: u16,
    pub calls: Cell<u32>,
}

impl MockDwell {
    pub fn new(ms: u16) -> Self {
        Self {
            ms,
            calls: Cell::new(0),
        }
    }
}

impl DwellSource for MockDwell {
    fn dwell(&self) -> u16 {
        self.calls.set(self.calls.get() + 1);
        self.ms
    }
}

// ============================================================================
// Mock Timeout Store
// ============================================================================

/// Mock store holding its value in a cell the test retains.
pub struct MockStore<'a> {
    value: &'a Cell<TimeValue>,
    saves: &'a Cell<u32>,
}

impl TimeoutStore for MockStore<'_> {
    fn load(&mut self) -> TimeValue {
        self.value.get()
    }

    fn save(&mut self, value: TimeValue) {
        self.value.set(value);
        self.saves.set(self.saves.get() + 1);
    }
}

// ============================================================================
// Panel Rig
// ============================================================================

/// Everything a panel test observes and manipulates, in one place.
///
/// Owns the probes and cells behind all of the panel's fakes. Build the
/// rig, then borrow a panel from it with [`PanelRig::panel`].
pub struct PanelRig {
    pub segments: [LineProbe; SEGMENT_COUNT],
    pub commons: [LineProbe; DIGIT_COUNT],
    pub relay: LineProbe,
    buttons: [Cell<bool>; BUTTON_COUNT],
    pub stored: Cell<TimeValue>,
    pub saves: Cell<u32>,
}

impl PanelRig {
    /// Creates a rig whose store holds `stored` and whose buttons all
    /// read released.
    pub fn new(stored: TimeValue) -> Self {
        Self {
            segments: Default::default(),
            commons: Default::default(),
            relay: LineProbe::default(),
            buttons: core::array::from_fn(|_| Cell::new(true)),
            stored: Cell::new(stored),
            saves: Cell::new(0),
        }
    }

    /// Builds a panel wired to this rig's probes.
    pub fn panel<'a>(
        &'a self,
        dwell: &'a MockDwell,
    ) -> TimerPanel<'a, MockLine<'a>, MockButton<'a>, MockDwell, MockStore<'a>> {
        let display = DisplayMux::new(
            core::array::from_fn(|i| MockLine(&self.segments[i])),
            core::array::from_fn(|i| MockLine(&self.commons[i])),
            dwell,
        );
        let relay = Relay::new(MockLine(&self.relay));
        let buttons = core::array::from_fn(|i| MockButton {
            level: &self.buttons[i],
        });
        let store = MockStore {
            value: &self.stored,
            saves: &self.saves,
        };
        TimerPanel::new(display, buttons, relay, store)
    }

    /// Holds a button down until [`release`](Self::release).
    pub fn press(&self, button: Button) {
        self.buttons[button as usize].set(false);
    }

    /// Lets a button back up.
    pub fn release(&self, button: Button) {
        self.buttons[button as usize].set(true);
    }

    /// Releases every button.
    pub fn release_all(&self) {
        for level in &self.buttons {
            level.set(true);
        }
    }

    /// Reassembles the pattern currently driven on the segment lines.
    ///
    /// After a full pass this is the pattern of the last position
    /// scanned, i.e. the ones digit of whatever value the frame showed.
    pub fn segment_bits(&self) -> u8 {
        let mut bits = 0;
        for (probe, line) in self.segments.iter().zip(Segments::LINES) {
            if probe.state.get() {
                bits |= line;
            }
        }
        bits
    }

    /// True if any digit common is currently enabled.
    pub fn any_common_enabled(&self) -> bool {
        self.commons.iter().any(|probe| probe.state.get())
    }
}
