//! Translation of digital inputs into tone parameters.

use tonebank_dsp::bank::{OscillatorBank, VOICES};

use super::snapshot::{Buttons, InputSnapshot, Switches, SWITCHES};

/// Switch bit controlling each voice, leftmost switch being the fundamental.
const SWITCH_TO_VOICE: [(usize, usize); SWITCHES] = [
    (9, 0),
    (8, 1),
    (7, 2),
    (6, 3),
    (5, 4),
    (4, 5),
    (3, 6),
    (2, 7),
    (1, 8),
    (0, 9),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrequencyCommand {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AmplitudeCommand {
    Louder,
    Quieter,
}

/// Maps switches and buttons onto the oscillator bank.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputController {
    frequency_step: f32,
}

impl InputController {
    #[must_use]
    pub fn new(frequency_step: f32) -> Self {
        Self { frequency_step }
    }

    /// Frequency up takes precedence when both buttons are held.
    #[must_use]
    pub fn frequency_command(buttons: Buttons) -> Option<FrequencyCommand> {
        if buttons.is_pressed(Buttons::FREQUENCY_UP) {
            Some(FrequencyCommand::Up)
        } else if buttons.is_pressed(Buttons::FREQUENCY_DOWN) {
            Some(FrequencyCommand::Down)
        } else {
            None
        }
    }

    /// Louder takes precedence when both buttons are held.
    #[must_use]
    pub fn amplitude_command(buttons: Buttons) -> Option<AmplitudeCommand> {
        if buttons.is_pressed(Buttons::LOUDER) {
            Some(AmplitudeCommand::Louder)
        } else if buttons.is_pressed(Buttons::QUIETER) {
            Some(AmplitudeCommand::Quieter)
        } else {
            None
        }
    }

    /// Step the fundamental, returning the command applied if any.
    pub fn apply_frequency(
        &self,
        snapshot: &InputSnapshot,
        bank: &mut OscillatorBank,
    ) -> Option<FrequencyCommand> {
        let command = Self::frequency_command(snapshot.buttons)?;
        let frequency = match command {
            FrequencyCommand::Up => bank.fundamental() * self.frequency_step,
            FrequencyCommand::Down => bank.fundamental() / self.frequency_step,
        };
        bank.set_fundamental(frequency);
        Some(command)
    }

    /// Enable voices by their switches, returning the LED state to show.
    pub fn apply_switches(switches: Switches, bank: &mut OscillatorBank) -> Switches {
        for (bit, voice) in SWITCH_TO_VOICE {
            debug_assert!(voice < VOICES);
            bank.set_enabled(voice, switches.is_up(bit));
        }
        // LEDs mirror the switches one to one.
        switches
    }

    /// Step amplitudes of the enabled harmonics.
    pub fn apply_amplitude(
        snapshot: &InputSnapshot,
        bank: &mut OscillatorBank,
    ) -> Option<AmplitudeCommand> {
        let command = Self::amplitude_command(snapshot.buttons)?;
        match command {
            AmplitudeCommand::Louder => bank.louder(),
            AmplitudeCommand::Quieter => bank.quieter(),
        }
        Some(command)
    }
}
