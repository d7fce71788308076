#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TimeValue`**: A 4-digit decimal time with carry/borrow increment and decrement
//! - **`Segments`**: The 7-segment pattern for one digit, packed as a bit set
//! - **`DisplayMux`**: Scans a value across the four shared-segment digit positions
//! - **`Debouncer`**: Turns level-sampled button reads into one event per press
//! - **`Countdown`**: The countdown state machine, clocked by accumulated dwell time
//! - **`TimerPanel`**: The whole appliance; one `service()` call is one loop pass
//! - **`DigitalOutput` / `DigitalInput`**: Traits to implement for your pins
//! - **`DwellSource`**: Trait to implement for the per-digit blocking delay
//! - **`TimeoutStore`**: Trait to implement for timeout persistence (e.g. EEPROM)
//!
//! There is no interrupt-driven clock: the display dwell delay is the only time
//! source, and the countdown is clocked by summing the dwell intervals the scan
//! reports. When implementing `DwellSource` for your hardware, return the
//! milliseconds actually spent blocking.

pub mod io;
pub mod time;
pub mod segments;
pub mod digits;
pub mod debounce;
pub mod countdown;
pub mod display;
pub mod relay;
pub mod store;
pub mod panel;

pub use countdown::{Countdown, CountdownState};
pub use debounce::{Debouncer, PollOutcome};
pub use digits::TimeValue;
pub use display::DisplayMux;
pub use io::{DigitalInput, DigitalOutput};
pub use panel::{Button, TimerPanel};
pub use relay::Relay;
pub use segments::Segments;
pub use store::{DEFAULT_TIMEOUT, TimeoutStore};
pub use time::DwellSource;

/// Number of digit positions on the display.
pub const DIGIT_COUNT: usize = 4;

/// Number of shared segment lines (a through g).
pub const SEGMENT_COUNT: usize = 7;

/// Number of operator buttons.
pub const BUTTON_COUNT: usize = 4;

/// Nominal length of one display dwell interval in milliseconds.
///
/// Four dwells per pass gives a full frame every 20 ms, comfortably
/// above flicker fusion, while button polling stays responsive.
pub const DWELL_MS: u16 = 5;

/// Milliseconds of accumulated dwell per countdown unit.
pub const MILLIS_PER_UNIT: u16 = 1000;
