pub mod audio;
pub mod driver;
pub mod inputs;
pub mod lcd;
pub mod leds;
pub mod watchdog;

use tonebank_control::input::{Buttons, Switches};
use tonebank_control::{Color, HardwareIO};
use tonebank_dsp::audio::FifoSpace;
use tonebank_dsp::waveform::Canvas;

use audio::Audio;
use inputs::Inputs;
use lcd::Lcd;
use leds::Leds;
use watchdog::Watchdog;

/// All peripherals of the board used by the loop.
pub struct System {
    pub audio: Audio,
    pub lcd: Lcd,
    pub inputs: Inputs,
    pub leds: Leds,
    pub watchdog: Watchdog,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Safety
    ///
    /// The system can be taken only once, otherwise registers get aliased.
    pub unsafe fn take() -> Self {
        unsafe {
            Self {
                audio: Audio::take(),
                lcd: Lcd::take(),
                inputs: Inputs::take(),
                leds: Leds::take(),
                watchdog: Watchdog::take(),
            }
        }
    }
}

impl HardwareIO for System {
    fn audio_init(&mut self) -> Result<(), i32> {
        self.audio.init()
    }

    fn audio_clear_fifo(&mut self, left: bool, right: bool) {
        self.audio.clear_fifo(left, right);
    }

    fn audio_fifo_space(&mut self) -> FifoSpace {
        self.audio.fifo_space()
    }

    fn audio_push(&mut self, left: i32, right: i32) {
        self.audio.push(left, right);
    }

    fn display_init(&mut self) -> Result<(), i32> {
        self.lcd.init()
    }

    fn display_test_pattern(&mut self) -> Result<(), i32> {
        self.lcd.test_pattern()
    }

    fn display_clear(&mut self, color: Color) {
        self.lcd.clear(color);
    }

    fn display_draw_pixel(&mut self, color: Color, x: u16, y: u16) {
        self.lcd.draw_pixel(color, x, y);
    }

    fn display_size(&self) -> Canvas {
        self.lcd.size()
    }

    fn watchdog_reset(&mut self) {
        self.watchdog.reset();
    }

    fn read_switches(&mut self) -> Switches {
        self.inputs.switches()
    }

    fn read_buttons(&mut self) -> Buttons {
        self.inputs.buttons()
    }

    fn write_leds(&mut self, leds: Switches) {
        self.leds.set(leds);
    }

    fn seven_segment_write(&mut self, display: usize, digit: u8) {
        self.leds.set_digit(display, digit);
    }

    fn delay_us(&mut self, us: u32) {
        // SAFETY: Busy waits on the private timer, no shared state.
        unsafe {
            driver::usleep(us);
        }
    }
}
