//! Audio-rate consumer of the oscillator bank.

use crate::bank::OscillatorBank;

/// One stereo frame as written to the codec FIFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioFrame {
    pub left: i32,
    pub right: i32,
}

impl AudioFrame {
    #[must_use]
    pub fn mono(sample: i32) -> Self {
        Self {
            left: sample,
            right: sample,
        }
    }
}

/// Free slots in the codec's outgoing FIFOs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoSpace {
    pub left: u8,
    pub right: u8,
}

impl FifoSpace {
    #[must_use]
    pub fn has_room(&self) -> bool {
        self.left > 0 && self.right > 0
    }
}

/// Produces one frame per call at the codec's sample rate.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioRenderer {
    sample_rate: f32,
    amplitude: f32,
}

impl AudioRenderer {
    #[must_use]
    pub fn new(sample_rate: f32, amplitude: f32) -> Self {
        Self {
            sample_rate,
            amplitude,
        }
    }

    /// Render the next frame if the codec can take it.
    ///
    /// When the FIFO is full the frame is skipped, phases do not move and
    /// nothing is queued. A pending recalculation is applied first, so the
    /// returned frame already uses the fresh phase basis.
    pub fn render(&self, bank: &mut OscillatorBank, space: FifoSpace) -> Option<AudioFrame> {
        if !space.has_room() {
            return None;
        }

        if bank.take_recalc() {
            bank.recalc_increments(bank.fundamental(), self.sample_rate);
        }

        let sample = bank.sample_audio(self.amplitude);
        bank.advance_all();

        Some(AudioFrame::mono(sample))
    }
}
