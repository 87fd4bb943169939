//! Structures used to pass the current state of digital inputs.

use bit_field::BitField;

/// Number of slide switches, one per voice.
pub const SWITCHES: usize = 10;

/// Raw state of the slide switches, bit 9 being the leftmost.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Switches(u16);

impl Switches {
    const MASK: u16 = (1 << SWITCHES) - 1;

    /// Bits above the tenth switch are ignored.
    #[must_use]
    pub fn from_bits(bits: u16) -> Self {
        Self(bits & Self::MASK)
    }

    #[must_use]
    pub fn bits(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn is_up(self, bit: usize) -> bool {
        self.0.get_bit(bit)
    }
}

/// Raw state of the push buttons, set bit meaning pressed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(u8);

impl Buttons {
    pub const QUIETER: usize = 0;
    pub const LOUDER: usize = 1;
    pub const FREQUENCY_DOWN: usize = 2;
    pub const FREQUENCY_UP: usize = 3;

    const MASK: u8 = 0b1111;

    #[must_use]
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    #[must_use]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_pressed(self, bit: usize) -> bool {
        self.0.get_bit(bit)
    }

    #[must_use]
    pub fn any(self) -> bool {
        self.0 != 0
    }
}

/// Digital inputs read once per tick.
///
/// The switch state seen at the last refresh is carried over from the
/// previous tick. It is unknown before the first refresh, which makes that
/// first tick always refresh.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSnapshot {
    pub switches: Switches,
    pub buttons: Buttons,
    pub previous_switches: Option<Switches>,
}

impl InputSnapshot {
    #[must_use]
    pub fn switches_changed(&self) -> bool {
        self.previous_switches != Some(self.switches)
    }

    /// Display and LEDs need to be refreshed.
    #[must_use]
    pub fn refresh_due(&self) -> bool {
        self.switches_changed() || self.buttons.any()
    }
}
