//! LT24 LCD driven through the board support package.

use core::ffi::{c_uint, c_ushort};

use tonebank_control::Color;
use tonebank_dsp::waveform::Canvas;

use super::driver;

pub struct Lcd {
    _private: (),
}

impl Lcd {
    /// # Safety
    ///
    /// The LCD parallel ports must not be aliased.
    pub unsafe fn take() -> Self {
        Self { _private: () }
    }

    pub fn init(&mut self) -> Result<(), i32> {
        // SAFETY: The driver owns the LCD ports from now on.
        driver::check(unsafe {
            driver::LT24_initialise(driver::LCD_PIO_BASE, driver::LCD_PIO_HW_BASE)
        })
    }

    pub fn test_pattern(&mut self) -> Result<(), i32> {
        // SAFETY: Called only after a successful `init`.
        driver::check(unsafe { driver::LT24_testPattern() })
    }

    pub fn clear(&mut self, color: Color) {
        // SAFETY: The only failure is an uninitialized display, which never
        // reaches the main loop.
        unsafe {
            driver::LT24_clearDisplay(color.0 as c_ushort);
        }
    }

    pub fn draw_pixel(&mut self, color: Color, x: u16, y: u16) {
        // SAFETY: Coordinates outside the panel are rejected by the driver.
        unsafe {
            driver::LT24_drawPixel(color.0 as c_ushort, c_uint::from(x), c_uint::from(y));
        }
    }

    pub fn size(&self) -> Canvas {
        Canvas {
            width: driver::LCD_WIDTH,
            height: driver::LCD_HEIGHT,
        }
    }
}
