//! 7-segment patterns and the digit codec.

/// On/off states of the 7 shared segment lines, packed as a bit set.
///
/// Segment layout:
/// ```text
///    AAAAA
///   F     B
///   F     B
///    GGGGG
///   E     C
///   E     C
///    DDDDD
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segments(u8);

impl Segments {
    /// Segment a (top horizontal)
    pub const A: u8 = 0b0100_0000;
    /// Segment b (top right vertical)
    pub const B: u8 = 0b0010_0000;
    /// Segment c (bottom right vertical)
    pub const C: u8 = 0b0001_0000;
    /// Segment d (bottom horizontal)
    pub const D: u8 = 0b0000_1000;
    /// Segment e (bottom left vertical)
    pub const E: u8 = 0b0000_0100;
    /// Segment f (top left vertical)
    pub const F: u8 = 0b0000_0010;
    /// Segment g (middle horizontal)
    pub const G: u8 = 0b0000_0001;

    /// All segments off.
    pub const BLANK: Self = Self(0);

    /// Segment bits in line order a through g, matching the order of the
    /// segment output lines handed to the display.
    pub const LINES: [u8; 7] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    /// Encodes a decimal digit as its canonical 7-segment pattern.
    ///
    /// Total over all of `u8`: values outside 0-9 render blank rather than
    /// garbage, so a corrupted digit degrades to an empty position.
    pub const fn for_digit(digit: u8) -> Self {
        let bits = match digit {
            0 => Self::A | Self::B | Self::C | Self::D | Self::E | Self::F,
            1 => Self::B | Self::C,
            2 => Self::A | Self::B | Self::D | Self::E | Self::G,
            3 => Self::A | Self::B | Self::C | Self::D | Self::G,
            4 => Self::B | Self::C | Self::F | Self::G,
            5 => Self::A | Self::C | Self::D | Self::F | Self::G,
            6 => Self::A | Self::C | Self::D | Self::E | Self::F | Self::G,
            7 => Self::A | Self::B | Self::C,
            8 => Self::A | Self::B | Self::C | Self::D | Self::E | Self::F | Self::G,
            9 => Self::A | Self::B | Self::C | Self::D | Self::F | Self::G,
            _ => 0,
        };
        Self(bits)
    }

    /// Returns true if the given segment bit is lit.
    pub const fn contains(&self, segment: u8) -> bool {
        (self.0 & segment) != 0
    }

    /// Raw segment bits.
    pub const fn bits(&self) -> u8 {
        self.0
    }
}
