//! Timer control panel with display scan, button handling, and relay
//! control.
//!
//! Provides [`TimerPanel`] which ties the whole appliance together and
//! runs its single cooperative loop: scan the display once, poll the
//! buttons, advance the countdown, and drive the relay on activity
//! edges.

use crate::BUTTON_COUNT;
use crate::countdown::Countdown;
use crate::debounce::{Debouncer, PollOutcome};
use crate::digits::TimeValue;
use crate::display::DisplayMux;
use crate::io::{DigitalInput, DigitalOutput};
use crate::relay::Relay;
use crate::store::TimeoutStore;
use crate::time::DwellSource;

/// The four operator buttons.
///
/// The discriminant is the button's index into the panel's input line
/// array, so the lines are handed over in this wiring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Adds one unit to the configured timeout.
    Increment,
    /// Removes one unit from the configured timeout.
    Decrement,
    /// Starts the countdown, or stops the running one.
    Start,
    /// Persists the configured timeout.
    Save,
}

/// Controls the timer appliance through its cooperative main loop.
///
/// Each panel owns the display, the button lines, the relay, and the
/// timeout store, and keeps the configured timeout plus the countdown
/// state machine. One [`service`](Self::service) call is one loop pass;
/// [`run`](Self::run) repeats passes forever.
///
/// All pacing comes from the display scan: the four dwell intervals per
/// pass both set the multiplex duty cycle and feed the countdown its
/// elapsed time, so there is no other clock to coordinate with.
///
/// # Type Parameters
/// * `'d` - Lifetime of the dwell source reference
/// * `O` - Digital output implementation type
/// * `I` - Digital input implementation type
/// * `D` - Dwell source implementation type
/// * `S` - Timeout store implementation type
pub struct TimerPanel<'d, O, I, D, S>
where
    O: DigitalOutput,
    I: DigitalInput,
    D: DwellSource,
    S: TimeoutStore,
{
    display: DisplayMux<'d, O, D>,
    buttons: [I; BUTTON_COUNT],
    latches: [Debouncer; BUTTON_COUNT],
    relay: Relay<O>,
    store: S,
    timeout: TimeValue,
    countdown: Countdown,
}

impl<'d, O, I, D, S> TimerPanel<'d, O, I, D, S>
where
    O: DigitalOutput,
    I: DigitalInput,
    D: DwellSource,
    S: TimeoutStore,
{
    /// Creates a panel with the persisted timeout loaded and no
    /// countdown running.
    ///
    /// The display and relay constructors already forced their lines
    /// into the dark and de-energized states, so after this the
    /// appliance is fully initialized and ready for [`run`](Self::run).
    pub fn new(
        display: DisplayMux<'d, O, D>,
        buttons: [I; BUTTON_COUNT],
        relay: Relay<O>,
        mut store: S,
    ) -> Self {
        let timeout = store.load();

        Self {
            display,
            buttons,
            latches: [Debouncer::new(); BUTTON_COUNT],
            relay,
            store,
            timeout,
            countdown: Countdown::new(),
        }
    }

    /// Runs loop passes forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.service();
        }
    }

    /// Executes one loop pass.
    ///
    /// A pass scans one display frame (blocking for four dwell
    /// intervals and crediting them to the countdown), polls the
    /// buttons in the order increment, decrement, save, start, folds
    /// any whole elapsed second into the countdown, and finally writes
    /// the relay if countdown activity changed during the pass.
    ///
    /// The display shows the remaining time while a countdown runs and
    /// the editable timeout otherwise.
    pub fn service(&mut self) {
        let was_active = self.countdown.is_active();

        let frame = if was_active {
            self.countdown.remaining()
        } else {
            self.timeout
        };
        let countdown = &mut self.countdown;
        self.display.render_frame(frame, |ms| countdown.accrue(ms));

        self.poll_button(Button::Increment);
        self.poll_button(Button::Decrement);
        self.poll_button(Button::Save);
        self.poll_button(Button::Start);

        self.countdown.service();

        let is_active = self.countdown.is_active();
        if is_active != was_active {
            self.relay.sync(is_active);
        }
    }

    /// Samples one button and applies its action on a press edge.
    fn poll_button(&mut self, button: Button) {
        let index = button as usize;
        let pressed = !self.buttons[index].is_high();

        // Editing buttons are locked out while the countdown runs; the
        // gate feeds the latch so a press held across the lockout still
        // fires once the countdown ends.
        let allowed = match button {
            Button::Start => true,
            _ => !self.countdown.is_active(),
        };

        if self.latches[index].poll(pressed && allowed) == PollOutcome::Fired {
            self.apply(button);
        }
    }

    /// Performs a button's action.
    fn apply(&mut self, button: Button) {
        match button {
            Button::Increment => self.timeout.increment(),
            Button::Decrement => self.timeout.decrement(),
            Button::Save => self.store.save(self.timeout),
            Button::Start => {
                if self.countdown.is_active() {
                    self.countdown.stop();
                } else {
                    // Refused when the timeout is zero; the press is
                    // simply ignored.
                    let _ = self.countdown.start(self.timeout);
                }
            }
        }
    }

    /// Returns the currently configured timeout.
    ///
    /// This is the working copy; it matches the store only after a
    /// save.
    pub fn timeout(&self) -> TimeValue {
        self.timeout
    }

    /// Returns the countdown state machine.
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }
}
