//! Countdown timer firmware for an Arduino Uno class board.
//!
//! Wiring:
//! - D2-D8: segment lines a-g, active high
//! - D9-D12: digit commons, leftmost digit first, enabled low
//! - A0-A3: buttons increment, decrement, start, save, switching to ground
//! - D13: relay driver, active high (the onboard LED doubles as a
//!   countdown-running indicator)

#![no_std]
#![no_main]

mod hardware;

use hardware::{BusyDwell, ButtonLine, EepromStore, Line};
use panic_halt as _;
use relay_timer::{DisplayMux, Relay, TimerPanel};

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);

    let segments = [
        Line::active_high(pins.d2.into_output().downgrade()),
        Line::active_high(pins.d3.into_output().downgrade()),
        Line::active_high(pins.d4.into_output().downgrade()),
        Line::active_high(pins.d5.into_output().downgrade()),
        Line::active_high(pins.d6.into_output().downgrade()),
        Line::active_high(pins.d7.into_output().downgrade()),
        Line::active_high(pins.d8.into_output().downgrade()),
    ];

    // Commons start high so no digit flashes before the display driver
    // takes over.
    let commons = [
        Line::active_low(pins.d9.into_output_high().downgrade()),
        Line::active_low(pins.d10.into_output_high().downgrade()),
        Line::active_low(pins.d11.into_output_high().downgrade()),
        Line::active_low(pins.d12.into_output_high().downgrade()),
    ];

    let buttons = [
        ButtonLine::new(pins.a0.into_pull_up_input().downgrade()),
        ButtonLine::new(pins.a1.into_pull_up_input().downgrade()),
        ButtonLine::new(pins.a2.into_pull_up_input().downgrade()),
        ButtonLine::new(pins.a3.into_pull_up_input().downgrade()),
    ];

    let relay = Relay::new(Line::active_high(pins.d13.into_output().downgrade()));
    let store = EepromStore::new(arduino_hal::Eeprom::new(dp.EEPROM));

    let dwell = BusyDwell;
    let display = DisplayMux::new(segments, commons, &dwell);
    let mut panel = TimerPanel::new(display, buttons, relay, store);

    panel.run()
}
