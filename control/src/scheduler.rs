//! The main loop tying inputs, tone and peripherals together.
//!
//! ```text
//!   [Switches] [Buttons]
//!         |       |
//!         V       V
//!   [ InputController ] --(frequency)--> [Seven-segment]
//!            |
//!            V
//!   [ OscillatorBank ]
//!        |        |
//!        V        V
//!   [ Audio ]  [ Waveform ]
//!        |        |
//!        V        V
//!    [Codec]    [LCD]        ... and the watchdog, always last.
//! ```

use tonebank_dsp::audio::{AudioFrame, AudioRenderer};
use tonebank_dsp::bank::OscillatorBank;
use tonebank_dsp::waveform::{Mode, WaveformRenderer};

use crate::config::Config;
use crate::error::{Component, Error, InitResultExt};
use crate::hardware::HardwareIO;
use crate::input::{FrequencyCommand, InputController, InputSnapshot, Switches};
use crate::log::{error, info};
use crate::segments::frequency_digits;

/// What happened during one iteration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    pub frequency: Option<FrequencyCommand>,
    pub frame: Option<AudioFrame>,
    pub refreshed: bool,
}

/// Single-threaded scheduler owning the tone state and the hardware.
///
/// Each iteration is bounded by the number of voices and display rows, so it
/// always finishes well within the watchdog window.
pub struct MainLoop<H> {
    io: H,
    config: Config,
    bank: OscillatorBank,
    audio: AudioRenderer,
    waveform: WaveformRenderer,
    controller: InputController,
    previous_switches: Option<Switches>,
}

impl<H: HardwareIO> MainLoop<H> {
    #[must_use]
    pub fn new(io: H, config: Config) -> Self {
        let waveform = WaveformRenderer::new(io.display_size());
        Self {
            io,
            bank: OscillatorBank::new(config.initial_frequency),
            audio: AudioRenderer::new(config.sample_rate, config.amplitude),
            waveform,
            controller: InputController::new(config.frequency_step),
            previous_switches: None,
            config,
        }
    }

    /// Bring up the peripherals and show the initial frequency.
    ///
    /// # Errors
    ///
    /// Fails with `Error::InitializationFailure` when the codec or the
    /// display does not come up. The failure is fatal, nothing is retried.
    #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
    pub fn init(&mut self) -> Result<(), Error> {
        info!("INIT");
        let result = self.bring_up();
        if let Err(error) = &result {
            error!("Initialization failed: {}", error);
        }
        result
    }

    fn bring_up(&mut self) -> Result<(), Error> {
        self.io.audio_init().or_fail(Component::AudioCodec)?;
        self.io.audio_clear_fifo(true, true);

        self.io.display_init().or_fail(Component::Display)?;
        self.io.watchdog_reset();
        self.io
            .display_test_pattern()
            .or_fail(Component::DisplaySelfTest)?;
        self.io.watchdog_reset();
        self.hold_test_pattern();

        self.show_frequency();
        Ok(())
    }

    /// Keep the test pattern visible while feeding the watchdog.
    fn hold_test_pattern(&mut self) {
        let slice = self.config.watchdog_slice_us.max(1);
        let mut remaining = self.config.boot_hold_us;
        while remaining > 0 {
            let wait = remaining.min(slice);
            self.io.delay_us(wait);
            self.io.watchdog_reset();
            remaining -= wait;
        }
    }

    /// Loop forever. Recovery from a hung iteration is left to the watchdog.
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// Run one iteration of the loop.
    pub fn tick(&mut self) -> TickReport {
        let snapshot = self.read_inputs();

        let frequency = self.process_frequency(&snapshot);

        // Moving a switch may leave the voice setup half applied, wait for
        // the refresh before producing sound again.
        let frame = if snapshot.switches_changed() {
            None
        } else {
            self.render_audio()
        };

        let refreshed = snapshot.refresh_due();
        if refreshed {
            self.refresh(&snapshot);
        }

        self.io.watchdog_reset();

        TickReport {
            frequency,
            frame,
            refreshed,
        }
    }

    fn read_inputs(&mut self) -> InputSnapshot {
        InputSnapshot {
            switches: self.io.read_switches(),
            buttons: self.io.read_buttons(),
            previous_switches: self.previous_switches,
        }
    }

    fn process_frequency(&mut self, snapshot: &InputSnapshot) -> Option<FrequencyCommand> {
        let command = self.controller.apply_frequency(snapshot, &mut self.bank)?;
        // Samples queued for the old frequency would only click.
        self.io.audio_clear_fifo(true, true);
        self.show_frequency();
        info!("Fundamental set to {} Hz", self.bank.fundamental());
        Some(command)
    }

    fn render_audio(&mut self) -> Option<AudioFrame> {
        let space = self.io.audio_fifo_space();
        let frame = self.audio.render(&mut self.bank, space)?;
        self.io.audio_push(frame.left, frame.right);
        Some(frame)
    }

    fn refresh(&mut self, snapshot: &InputSnapshot) {
        self.io.display_clear(self.config.background);
        self.bank.request_recalc();

        let leds = InputController::apply_switches(snapshot.switches, &mut self.bank);
        self.io.write_leds(leds);

        InputController::apply_amplitude(snapshot, &mut self.bank);

        self.draw_waveform();

        self.previous_switches = Some(snapshot.switches);
    }

    fn draw_waveform(&mut self) {
        let color = self.config.foreground;
        match WaveformRenderer::mode(&self.bank) {
            Mode::Separated => {
                for sweep in self.waveform.separated(&self.bank) {
                    for point in sweep {
                        self.io.display_draw_pixel(color, point.x, point.y);
                    }
                }
            }
            Mode::Blended => {
                for point in self.waveform.blended(&mut self.bank) {
                    self.io.display_draw_pixel(color, point.x, point.y);
                }
                // The sweep left the shared phases on the display basis.
                self.bank.request_recalc();
            }
        }
    }

    fn show_frequency(&mut self) {
        let digits = frequency_digits(self.bank.fundamental());
        for (display, digit) in digits.into_iter().enumerate() {
            self.io.seven_segment_write(display, digit);
        }
    }

    #[must_use]
    pub fn bank(&self) -> &OscillatorBank {
        &self.bank
    }

    #[must_use]
    pub fn previous_switches(&self) -> Option<Switches> {
        self.previous_switches
    }

    #[must_use]
    pub fn io(&self) -> &H {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut H {
        &mut self.io
    }
}
