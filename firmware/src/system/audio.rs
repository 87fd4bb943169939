//! Audio core feeding the WM8731 codec.

use volatile_register::{RO, RW};

use tonebank_dsp::audio::FifoSpace;

use super::driver;

// Control register bits clearing the incoming and outgoing FIFOs.
const CLEAR_READ: u32 = 1 << 2;
const CLEAR_WRITE: u32 = 1 << 3;

#[repr(C)]
pub struct Registers {
    pub control: RW<u32>,
    /// Bytes from the lowest: read right, read left, write right, write left.
    pub fifospace: RO<u32>,
    pub left: RW<u32>,
    pub right: RW<u32>,
}

pub struct Audio {
    registers: &'static Registers,
}

impl Audio {
    /// # Safety
    ///
    /// The audio core registers must not be aliased.
    pub unsafe fn take() -> Self {
        Self {
            registers: unsafe { &*(driver::AUDIO_BASE as usize as *const Registers) },
        }
    }

    /// Configure the codec over I2C.
    pub fn init(&mut self) -> Result<(), i32> {
        // SAFETY: The driver only touches the audio core owned by this struct.
        driver::check(unsafe { driver::WM8731_initialise(driver::AUDIO_BASE) })
    }

    /// The core clears both channels of a FIFO together.
    pub fn clear_fifo(&mut self, left: bool, right: bool) {
        if !(left || right) {
            return;
        }
        // SAFETY: Pulsing the clear bits has no other side effect.
        unsafe {
            self.registers.control.modify(|c| c | CLEAR_READ | CLEAR_WRITE);
            self.registers
                .control
                .modify(|c| c & !(CLEAR_READ | CLEAR_WRITE));
        }
    }

    pub fn fifo_space(&self) -> FifoSpace {
        let [_, _, right, left] = self.registers.fifospace.read().to_le_bytes();
        FifoSpace { left, right }
    }

    pub fn push(&mut self, left: i32, right: i32) {
        // SAFETY: Callers check the FIFO space first, the codec takes the raw
        // two's complement word.
        unsafe {
            self.registers.left.write(left as u32);
            self.registers.right.write(right as u32);
        }
    }
}
