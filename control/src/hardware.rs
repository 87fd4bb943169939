//! Capabilities the loop needs from the board.
//!
//! The trait is implemented by the firmware on top of memory-mapped
//! registers and the board's driver library, and by recording mocks in tests.
//! Every call must be bounded and non-blocking, the watchdog is the only
//! timeout of the system.

use tonebank_dsp::audio::FifoSpace;
use tonebank_dsp::waveform::Canvas;

use crate::input::{Buttons, Switches};

/// RGB565 color as understood by the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
}

pub trait HardwareIO {
    /// Bring up the audio codec, returning its raw status code on failure.
    ///
    /// # Errors
    ///
    /// Fails when the codec does not respond to configuration.
    fn audio_init(&mut self) -> Result<(), i32>;

    fn audio_clear_fifo(&mut self, left: bool, right: bool);

    fn audio_fifo_space(&mut self) -> FifoSpace;

    /// Write one frame. Only called when `audio_fifo_space` reported room.
    fn audio_push(&mut self, left: i32, right: i32);

    /// Bring up the display, returning its raw status code on failure.
    ///
    /// # Errors
    ///
    /// Fails when the display controller cannot be initialized.
    fn display_init(&mut self) -> Result<(), i32>;

    /// Show the controller's built-in test pattern.
    ///
    /// # Errors
    ///
    /// Fails when the display reports a self-test failure.
    fn display_test_pattern(&mut self) -> Result<(), i32>;

    fn display_clear(&mut self, color: Color);

    fn display_draw_pixel(&mut self, color: Color, x: u16, y: u16);

    fn display_size(&self) -> Canvas;

    fn watchdog_reset(&mut self);

    fn read_switches(&mut self) -> Switches;

    fn read_buttons(&mut self) -> Buttons;

    fn write_leds(&mut self, leds: Switches);

    /// Show `digit` (0 to 9) on the display with the given index (0 to 5).
    fn seven_segment_write(&mut self, display: usize, digit: u8);

    /// Busy wait. Callers keep each wait shorter than the watchdog window.
    fn delay_us(&mut self, us: u32);
}
