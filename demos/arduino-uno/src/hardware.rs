//! Hardware trait implementations for the ATmega328p board.

use arduino_hal::port::{Pin, mode};
use relay_timer::{
    DEFAULT_TIMEOUT, DIGIT_COUNT, DWELL_MS, DigitalInput, DigitalOutput, DwellSource, TimeValue,
    TimeoutStore,
};

/// One GPIO output line with its electrical polarity.
///
/// The display's digit commons are enabled by a low level while the
/// segment and relay lines are active high, so the wrapper carries the
/// inversion and the library speaks logical on/off throughout.
pub struct Line {
    pin: Pin<mode::Output>,
    active_low: bool,
}

impl Line {
    /// Wraps a line where a high level means active.
    pub fn active_high(pin: Pin<mode::Output>) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Wraps a line where a low level means active.
    pub fn active_low(pin: Pin<mode::Output>) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }
}

impl DigitalOutput for Line {
    fn set(&mut self, on: bool) {
        if on ^ self.active_low {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}

/// One button input, pulled up and switched to ground.
pub struct ButtonLine {
    pin: Pin<mode::Input<mode::PullUp>>,
}

impl ButtonLine {
    pub fn new(pin: Pin<mode::Input<mode::PullUp>>) -> Self {
        Self { pin }
    }
}

impl DigitalInput for ButtonLine {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Busy-wait dwell delay.
pub struct BusyDwell;

impl DwellSource for BusyDwell {
    fn dwell(&self) -> u16 {
        arduino_hal::delay_ms(DWELL_MS);
        DWELL_MS
    }
}

/// Timeout persistence in the onboard EEPROM.
///
/// The four digits live in the first four cells, ones digit first.
pub struct EepromStore {
    eeprom: arduino_hal::Eeprom,
}

impl EepromStore {
    pub fn new(eeprom: arduino_hal::Eeprom) -> Self {
        Self { eeprom }
    }
}

impl TimeoutStore for EepromStore {
    fn load(&mut self) -> TimeValue {
        let mut digits = [0u8; DIGIT_COUNT];
        if self.eeprom.read(0, &mut digits).is_err() {
            return DEFAULT_TIMEOUT;
        }

        // A never-written cell reads 0xFF; anything outside 0-9 means
        // the block does not hold a timeout.
        if digits.iter().any(|&digit| digit > 9) {
            return DEFAULT_TIMEOUT;
        }

        TimeValue::new(digits)
    }

    fn save(&mut self, value: TimeValue) {
        // Rewrite only the cells that changed; EEPROM endurance is
        // counted per cell.
        for (offset, digit) in value.digits().into_iter().enumerate() {
            if self.eeprom.read_byte(offset as u16) != digit {
                self.eeprom.write_byte(offset as u16, digit);
            }
        }
    }
}
