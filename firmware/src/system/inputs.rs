//! Slide switches and push buttons.

use volatile_register::RO;

use tonebank_control::input::{Buttons, Switches};

const SWITCHES_BASE: usize = 0xFF20_0040;
const KEYS_BASE: usize = 0xFF20_0050;

pub struct Inputs {
    switches: &'static RO<u32>,
    keys: &'static RO<u32>,
}

impl Inputs {
    /// # Safety
    ///
    /// The switch and key data registers must not be aliased.
    pub unsafe fn take() -> Self {
        unsafe {
            Self {
                switches: &*(SWITCHES_BASE as *const RO<u32>),
                keys: &*(KEYS_BASE as *const RO<u32>),
            }
        }
    }

    /// Hardware debounced, read as is.
    pub fn switches(&self) -> Switches {
        Switches::from_bits(self.switches.read() as u16)
    }

    pub fn buttons(&self) -> Buttons {
        Buttons::from_bits(self.keys.read() as u8)
    }
}
