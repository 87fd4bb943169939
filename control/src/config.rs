//! Tunable constants of the device.

use crate::hardware::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Codec sample rate in Hz.
    pub sample_rate: f32,
    /// Fundamental frequency at boot in Hz.
    pub initial_frequency: f32,
    /// Ratio applied by one frequency button press.
    pub frequency_step: f32,
    /// Full scale of the fundamental in codec units.
    pub amplitude: f32,
    /// How long the display self-test stays visible at boot.
    pub boot_hold_us: u32,
    /// Longest single wait between watchdog resets while holding.
    pub watchdog_slice_us: u32,
    pub background: Color,
    pub foreground: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            initial_frequency: 440.0,
            frequency_step: 1.1,
            // 24-bit full scale, leaving headroom for the harmonics in 32 bits.
            amplitude: 8_388_608.0,
            boot_hold_us: 500_000,
            watchdog_slice_us: 50_000,
            background: Color::WHITE,
            foreground: Color::BLACK,
        }
    }
}
