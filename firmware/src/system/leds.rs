//! Red LEDs and seven-segment displays.

use volatile_register::RW;

use tonebank_control::input::Switches;

const LEDS_BASE: usize = 0xFF20_0000;
const SEVEN_SEGMENT_LOW_BASE: usize = 0xFF20_0020;
const SEVEN_SEGMENT_HIGH_BASE: usize = 0xFF20_0030;

/// Displays addressed through the low register, the rest are in the high one.
const SEVEN_SEGMENT_LOW_DISPLAYS: usize = 4;
const SEVEN_SEGMENT_HIGH_DISPLAYS: usize = 2;

/// Segment patterns of digits 0 to 9, bit 0 being segment A.
const GLYPHS: [u8; 10] = [
    0b0011_1111,
    0b0000_0110,
    0b0101_1011,
    0b0100_1111,
    0b0110_0110,
    0b0110_1101,
    0b0111_1101,
    0b0000_0111,
    0b0111_1111,
    0b0110_0111,
];

pub struct Leds {
    leds: &'static RW<u32>,
    seven_segment_low: &'static [RW<u8>; SEVEN_SEGMENT_LOW_DISPLAYS],
    seven_segment_high: &'static [RW<u8>; SEVEN_SEGMENT_HIGH_DISPLAYS],
}

impl Leds {
    /// # Safety
    ///
    /// The LED and seven-segment registers must not be aliased.
    pub unsafe fn take() -> Self {
        unsafe {
            Self {
                leds: &*(LEDS_BASE as *const RW<u32>),
                seven_segment_low: &*(SEVEN_SEGMENT_LOW_BASE
                    as *const [RW<u8>; SEVEN_SEGMENT_LOW_DISPLAYS]),
                seven_segment_high: &*(SEVEN_SEGMENT_HIGH_BASE
                    as *const [RW<u8>; SEVEN_SEGMENT_HIGH_DISPLAYS]),
            }
        }
    }

    /// Each LED sits above the switch of the same bit.
    pub fn set(&mut self, leds: Switches) {
        // SAFETY: The LED port has no side effects besides lighting LEDs.
        unsafe { self.leds.write(u32::from(leds.bits())) }
    }

    /// Digits out of range are ignored.
    pub fn set_digit(&mut self, display: usize, digit: u8) {
        let Some(glyph) = GLYPHS.get(usize::from(digit)) else {
            return;
        };
        let register = if display < SEVEN_SEGMENT_LOW_DISPLAYS {
            self.seven_segment_low.get(display)
        } else {
            self.seven_segment_high
                .get(display - SEVEN_SEGMENT_LOW_DISPLAYS)
        };
        if let Some(register) = register {
            // SAFETY: Byte writes only change the segments of one display.
            unsafe { register.write(*glyph) }
        }
    }
}
