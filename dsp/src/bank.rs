//! Bank of harmonically related sine oscillators.
//!
//! The bank is the single tone state of the device. It is consumed by two
//! renderers running at very different rates: audio at the sample rate and
//! the waveform display only on refresh. Both drive the same phase
//! accumulators, each re-deriving increments from its own denominator.

use core::f32::consts::TAU;

use crate::sine::{approx_sine, wrap_phase};

/// Number of voices in the bank.
pub const VOICES: usize = 10;

/// The smallest amplitude divisor a voice can reach.
pub const MIN_DIVISOR: u32 = 1;

/// One harmonic oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Voice {
    ratio: u32,
    enabled: bool,
    amplitude_divisor: u32,
    phase: f32,
    phase_increment: f32,
}

impl Voice {
    fn new(index: usize) -> Self {
        let ratio = index as u32 + 1;
        Self {
            ratio,
            enabled: false,
            // Higher harmonics start quieter.
            amplitude_divisor: ratio,
            phase: 0.0,
            phase_increment: 0.0,
        }
    }

    /// Harmonic multiplier of the fundamental.
    #[must_use]
    pub fn ratio(&self) -> u32 {
        self.ratio
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn amplitude_divisor(&self) -> u32 {
        self.amplitude_divisor
    }

    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    #[must_use]
    pub fn phase_increment(&self) -> f32 {
        self.phase_increment
    }

    /// Weight of the voice in a mix.
    #[must_use]
    pub fn gain(&self) -> f32 {
        1.0 / self.amplitude_divisor as f32
    }

    fn advance(&mut self) {
        self.phase = wrap_phase(self.phase + self.phase_increment);
    }
}

/// Tone state shared by the audio and display paths.
///
/// Voice 0 carries the fundamental and always sounds. Its enable flag only
/// selects how the waveform gets displayed. The remaining voices are mixed in
/// only while enabled, but all of them keep advancing their phase.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OscillatorBank {
    fundamental: f32,
    voices: [Voice; VOICES],
    needs_recalc: bool,
}

impl OscillatorBank {
    #[must_use]
    pub fn new(fundamental: f32) -> Self {
        let mut voices = [Voice::new(0); VOICES];
        for (i, voice) in voices.iter_mut().enumerate() {
            *voice = Voice::new(i);
        }
        Self {
            fundamental,
            voices,
            needs_recalc: true,
        }
    }

    #[must_use]
    pub fn fundamental(&self) -> f32 {
        self.fundamental
    }

    pub fn set_fundamental(&mut self, frequency: f32) {
        self.fundamental = frequency;
        self.needs_recalc = true;
    }

    #[must_use]
    pub fn voice(&self, index: usize) -> &Voice {
        &self.voices[index]
    }

    #[must_use]
    pub fn voices(&self) -> &[Voice; VOICES] {
        &self.voices
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) {
        self.voices[index].enabled = enabled;
    }

    #[must_use]
    pub fn needs_recalc(&self) -> bool {
        self.needs_recalc
    }

    /// Ask the audio path to rebuild its phase basis before the next sample.
    pub fn request_recalc(&mut self) {
        self.needs_recalc = true;
    }

    /// Clear the recalculation request, returning whether it was set.
    pub fn take_recalc(&mut self) -> bool {
        let needed = self.needs_recalc;
        self.needs_recalc = false;
        needed
    }

    /// Derive phase increments and restart all phases from zero.
    ///
    /// Voice `i` advances by `(i + 1) * base_rate * 2π / denominator` per
    /// step. The audio path passes the fundamental and the sample rate, the
    /// display path passes one cycle per display height.
    pub fn recalc_increments(&mut self, base_rate: f32, denominator: f32) {
        for voice in self.voices.iter_mut() {
            voice.phase_increment = voice.ratio as f32 * base_rate * TAU / denominator;
            voice.phase = 0.0;
        }
    }

    /// Advance every voice, muted or not, by its increment.
    pub fn advance_all(&mut self) {
        self.voices.iter_mut().for_each(Voice::advance);
    }

    /// Mix the current phases into one audio sample.
    ///
    /// Float to integer conversion saturates, so a loud mix clips instead of
    /// wrapping around.
    #[must_use]
    pub fn sample_audio(&self, amplitude: f32) -> i32 {
        let sample = self.mix(approx_sine);
        (amplitude * sample) as i32
    }

    /// Mix the current phases into a display offset.
    ///
    /// The mix is normalized by the total weight of the summed voices so the
    /// composite never exceeds `height_scale`, no matter how many voices are
    /// enabled.
    #[must_use]
    pub fn sample_display(&self, height_scale: f32) -> f32 {
        let sample = self.mix(libm::sinf);
        let weight: f32 = 1.0 + self.audible_harmonics().map(Voice::gain).sum::<f32>();
        height_scale * sample / weight
    }

    /// Decrease divisors of enabled harmonics, clamping at `MIN_DIVISOR`.
    pub fn louder(&mut self) {
        for voice in self.voices[1..].iter_mut().filter(|v| v.enabled) {
            voice.amplitude_divisor = voice.amplitude_divisor.saturating_sub(1).max(MIN_DIVISOR);
        }
    }

    /// Increase divisors of enabled harmonics.
    pub fn quieter(&mut self) {
        for voice in self.voices[1..].iter_mut().filter(|v| v.enabled) {
            voice.amplitude_divisor = voice.amplitude_divisor.saturating_add(1);
        }
    }

    fn mix(&self, sine: impl Fn(f32) -> f32) -> f32 {
        let fundamental = &self.voices[0];
        let harmonics: f32 = self
            .audible_harmonics()
            .map(|v| v.gain() * sine(v.phase))
            .sum();
        fundamental.gain() * sine(fundamental.phase) + harmonics
    }

    fn audible_harmonics(&self) -> impl Iterator<Item = &Voice> + '_ {
        self.voices[1..].iter().filter(|v| v.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;

    #[test]
    fn when_created_it_has_harmonic_ratios_and_pending_recalc() {
        let bank = OscillatorBank::new(440.0);
        for (i, voice) in bank.voices().iter().enumerate() {
            assert_eq!(voice.ratio(), i as u32 + 1);
            assert_eq!(voice.amplitude_divisor(), i as u32 + 1);
            assert!(!voice.enabled());
        }
        assert!(bank.needs_recalc());
    }

    #[test]
    fn when_fundamental_is_set_it_requests_recalc() {
        let mut bank = OscillatorBank::new(440.0);
        assert!(bank.take_recalc());
        assert!(!bank.needs_recalc());
        bank.set_fundamental(484.0);
        assert!(bank.needs_recalc());
        assert_relative_eq!(bank.fundamental(), 484.0);
    }

    #[test]
    fn when_recalculated_twice_it_yields_identical_state() {
        let mut bank = OscillatorBank::new(440.0);
        bank.recalc_increments(440.0, SAMPLE_RATE);
        let first = *bank.voices();
        bank.recalc_increments(440.0, SAMPLE_RATE);
        assert_eq!(&first, bank.voices());
        for voice in bank.voices() {
            assert_relative_eq!(voice.phase(), 0.0);
        }
    }

    #[test]
    fn when_recalculated_after_advancing_it_resets_phases() {
        let mut bank = OscillatorBank::new(440.0);
        bank.recalc_increments(440.0, SAMPLE_RATE);
        bank.advance_all();
        bank.recalc_increments(440.0, SAMPLE_RATE);
        for voice in bank.voices() {
            assert_relative_eq!(voice.phase(), 0.0);
        }
    }

    #[test]
    fn when_advanced_once_every_voice_moves_by_its_harmonic_step() {
        let mut bank = OscillatorBank::new(440.0);
        bank.set_enabled(0, true);
        bank.recalc_increments(440.0, SAMPLE_RATE);
        bank.advance_all();

        let step = 440.0 * TAU / SAMPLE_RATE;
        assert_relative_eq!(bank.voice(0).phase(), step);
        assert_relative_eq!(bank.voice(0).phase(), 0.057_596, epsilon = 1e-5);
        // Muted voices keep their phase running.
        for i in 1..VOICES {
            assert!(!bank.voice(i).enabled());
            assert_relative_eq!(bank.voice(i).phase(), (i + 1) as f32 * step, epsilon = 1e-6);
        }
    }

    #[test]
    fn when_muted_harmonics_advance_they_do_not_contribute() {
        let mut bank = OscillatorBank::new(440.0);
        bank.recalc_increments(440.0, SAMPLE_RATE);
        for _ in 0..10 {
            bank.advance_all();
        }
        let expected = (1000.0 * approx_sine(bank.voice(0).phase())) as i32;
        assert_eq!(bank.sample_audio(1000.0), expected);
    }

    #[test]
    fn when_harmonics_are_enabled_they_are_weighted_by_divisor() {
        let mut bank = OscillatorBank::new(440.0);
        bank.set_enabled(1, true);
        bank.recalc_increments(440.0, SAMPLE_RATE);
        bank.advance_all();
        let expected = 1000.0
            * (approx_sine(bank.voice(0).phase()) + approx_sine(bank.voice(1).phase()) / 2.0);
        assert_eq!(bank.sample_audio(1000.0), expected as i32);
    }

    #[test]
    fn when_divisor_is_one_louder_clamps_it() {
        let mut bank = OscillatorBank::new(440.0);
        bank.set_enabled(1, true);
        bank.louder();
        assert_eq!(bank.voice(1).amplitude_divisor(), 1);
        bank.louder();
        assert_eq!(bank.voice(1).amplitude_divisor(), MIN_DIVISOR);

        bank.recalc_increments(440.0, SAMPLE_RATE);
        bank.advance_all();
        let sample = bank.sample_audio(1000.0);
        assert!(sample.abs() <= 2000);
    }

    #[test]
    fn when_amplitude_steps_are_applied_fundamental_and_muted_voices_are_kept() {
        let mut bank = OscillatorBank::new(440.0);
        bank.set_enabled(0, true);
        bank.set_enabled(3, true);
        bank.quieter();
        assert_eq!(bank.voice(0).amplitude_divisor(), 1);
        assert_eq!(bank.voice(2).amplitude_divisor(), 3);
        assert_eq!(bank.voice(3).amplitude_divisor(), 5);
        bank.louder();
        bank.louder();
        assert_eq!(bank.voice(3).amplitude_divisor(), 3);
    }

    #[test]
    fn when_every_voice_peaks_display_sample_stays_within_scale() {
        let mut bank = OscillatorBank::new(440.0);
        for i in 1..VOICES {
            bank.set_enabled(i, true);
        }
        for voice in bank.voices.iter_mut() {
            voice.phase = core::f32::consts::FRAC_PI_2;
        }
        assert_relative_eq!(bank.sample_display(120.0), 120.0, epsilon = 1e-3);
    }

    #[test]
    fn when_loud_mix_overflows_it_saturates() {
        let mut bank = OscillatorBank::new(440.0);
        for voice in bank.voices.iter_mut() {
            voice.phase = core::f32::consts::FRAC_PI_2;
        }
        assert_eq!(bank.sample_audio(8_888_608_000.0), i32::MAX);
    }
}
