//! Bindings of the board support package's C drivers.

use core::ffi::{c_int, c_uint, c_ushort};

/// Status returned by the drivers on success.
pub const SUCCESS: c_int = 0;

/// Base of the codec's I2C configuration and audio core.
pub const AUDIO_BASE: c_uint = 0xFF20_3040;
/// Parallel port bit-banging the LCD bus.
pub const LCD_PIO_BASE: c_uint = 0xFF20_0060;
/// Hardware-optimized LCD controller.
pub const LCD_PIO_HW_BASE: c_uint = 0xFF20_0080;

pub const LCD_WIDTH: u16 = 240;
pub const LCD_HEIGHT: u16 = 320;

extern "C" {
    pub fn WM8731_initialise(base: c_uint) -> c_int;

    pub fn LT24_initialise(pio_base: c_uint, pio_hw_base: c_uint) -> c_int;
    pub fn LT24_testPattern() -> c_int;
    pub fn LT24_clearDisplay(colour: c_ushort) -> c_int;
    pub fn LT24_drawPixel(colour: c_ushort, x: c_uint, y: c_uint) -> c_int;

    pub fn usleep(useconds: c_uint) -> c_int;
    pub fn exit(status: c_int) -> !;
}

/// Map a driver status onto a result.
pub fn check(status: c_int) -> Result<(), i32> {
    if status == SUCCESS {
        Ok(())
    } else {
        Err(status)
    }
}
