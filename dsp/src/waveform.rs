//! Display-rate consumer of the oscillator bank.
//!
//! The waveform is swept along the long axis of the display, one point per
//! row, with the sine offset placed on the short axis around its center.

use core::f32::consts::TAU;

use crate::bank::{OscillatorBank, Voice};
use crate::sine::wrap_phase;

// Scale-down keeping the swept waves clear of the display edges.
const SEPARATED_SCALE: f32 = 1.5;
const BLENDED_SCALE: f32 = 2.0;

/// Dimensions of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Canvas {
    pub width: u16,
    pub height: u16,
}

impl Canvas {
    fn center(&self) -> f32 {
        f32::from(self.width / 2)
    }

    /// Whether row `row` is still on the canvas. A zero-width canvas has no
    /// rows to draw on.
    fn covers(&self, row: u32) -> bool {
        self.width > 0 && row <= u32::from(self.height)
    }

    fn point(&self, offset: f32, row: u32) -> PixelPoint {
        let x = (self.center() + offset) as i32;
        let x = x.clamp(0, (i32::from(self.width) - 1).max(0));
        PixelPoint {
            x: x as u16,
            y: row as u16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelPoint {
    pub x: u16,
    pub y: u16,
}

/// How the enabled voices are put on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Each enabled voice gets its own sweep over the same canvas.
    Separated,
    /// All enabled voices are summed into one normalized sweep.
    Blended,
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WaveformRenderer {
    canvas: Canvas,
}

impl WaveformRenderer {
    #[must_use]
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas }
    }

    /// The fundamental's switch selects the mode.
    #[must_use]
    pub fn mode(bank: &OscillatorBank) -> Mode {
        if bank.voice(0).enabled() {
            Mode::Separated
        } else {
            Mode::Blended
        }
    }

    /// Sweeps of the fundamental and every enabled harmonic, in voice order.
    ///
    /// Each sweep owns its phase, the bank is left untouched.
    pub fn separated<'a>(
        &'a self,
        bank: &'a OscillatorBank,
    ) -> impl Iterator<Item = SeparatedSweep> + 'a {
        bank.voices()
            .iter()
            .enumerate()
            .filter(|(i, voice)| *i == 0 || voice.enabled())
            .map(move |(_, voice)| SeparatedSweep::new(self.canvas, voice))
    }

    /// One composite sweep driving the bank's shared phases.
    ///
    /// The bank is switched to a display phase basis of one fundamental
    /// cycle per display height. The caller is responsible for requesting an
    /// audio recalculation afterwards.
    pub fn blended<'a>(&self, bank: &'a mut OscillatorBank) -> BlendedSweep<'a> {
        bank.recalc_increments(1.0, f32::from(self.canvas.height));
        BlendedSweep {
            canvas: self.canvas,
            bank,
            row: 0,
        }
    }
}

/// Points of a single voice swept over the full display height.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SeparatedSweep {
    canvas: Canvas,
    scale: f32,
    phase: f32,
    increment: f32,
    row: u32,
}

impl SeparatedSweep {
    fn new(canvas: Canvas, voice: &Voice) -> Self {
        Self {
            canvas,
            scale: canvas.center() * voice.gain() / SEPARATED_SCALE,
            phase: 0.0,
            increment: voice.ratio() as f32 * TAU / f32::from(canvas.height),
            row: 0,
        }
    }
}

impl Iterator for SeparatedSweep {
    type Item = PixelPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.canvas.covers(self.row) {
            return None;
        }
        let point = self
            .canvas
            .point(self.scale * libm::sinf(self.phase), self.row);
        self.phase = wrap_phase(self.phase + self.increment);
        self.row += 1;
        Some(point)
    }
}

/// Points of the normalized composite of all enabled voices.
#[derive(Debug)]
pub struct BlendedSweep<'a> {
    canvas: Canvas,
    bank: &'a mut OscillatorBank,
    row: u32,
}

impl Iterator for BlendedSweep<'_> {
    type Item = PixelPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.canvas.covers(self.row) {
            return None;
        }
        let offset = self.bank.sample_display(self.canvas.center()) / BLENDED_SCALE;
        let point = self.canvas.point(offset, self.row);
        self.bank.advance_all();
        self.row += 1;
        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Canvas = Canvas {
        width: 240,
        height: 320,
    };

    #[test]
    fn when_fundamental_is_enabled_mode_is_separated() {
        let mut bank = OscillatorBank::new(440.0);
        assert_eq!(WaveformRenderer::mode(&bank), Mode::Blended);
        bank.set_enabled(0, true);
        assert_eq!(WaveformRenderer::mode(&bank), Mode::Separated);
    }

    #[test]
    fn when_separated_it_sweeps_fundamental_and_enabled_voices() {
        let renderer = WaveformRenderer::new(CANVAS);
        let mut bank = OscillatorBank::new(440.0);
        bank.set_enabled(0, true);
        bank.set_enabled(2, true);
        bank.set_enabled(9, true);

        assert_eq!(renderer.separated(&bank).count(), 3);
        for sweep in renderer.separated(&bank) {
            let mut rows = 0;
            for (i, point) in sweep.enumerate() {
                assert_eq!(usize::from(point.y), i);
                assert!(point.x < CANVAS.width);
                rows += 1;
            }
            assert_eq!(rows, usize::from(CANVAS.height) + 1);
        }
    }

    #[test]
    fn when_separated_fundamental_spans_one_cycle_around_center() {
        let renderer = WaveformRenderer::new(CANVAS);
        let bank = OscillatorBank::new(440.0);
        let sweep = renderer.separated(&bank).next().unwrap();
        let points: heapless::Vec<PixelPoint, 321> = sweep.collect();

        assert_eq!(points[0], PixelPoint { x: 120, y: 0 });
        assert_eq!(points[80].x, 200);
        assert_eq!(points[240].x, 40);
        assert!(points.iter().all(|p| (40..=200).contains(&p.x)));
    }

    #[test]
    fn when_separated_quieter_voice_is_drawn_smaller() {
        let renderer = WaveformRenderer::new(CANVAS);
        let mut bank = OscillatorBank::new(440.0);
        bank.set_enabled(1, true);
        let mut sweeps = renderer.separated(&bank);
        let fundamental_peak = sweeps.next().unwrap().map(|p| p.x).max().unwrap();
        let second_peak = sweeps.next().unwrap().map(|p| p.x).max().unwrap();
        assert_eq!(fundamental_peak, 200);
        assert_eq!(second_peak, 160);
    }

    #[test]
    fn when_blended_it_drives_shared_phases_with_display_basis() {
        let renderer = WaveformRenderer::new(CANVAS);
        let mut bank = OscillatorBank::new(440.0);
        bank.set_enabled(1, true);

        let rows = renderer.blended(&mut bank).count();

        assert_eq!(rows, usize::from(CANVAS.height) + 1);
        assert_relative_eq!(bank.voice(0).phase_increment(), TAU / 320.0);
        assert_relative_eq!(bank.voice(1).phase_increment(), 2.0 * TAU / 320.0);
    }

    #[test]
    fn when_blended_composite_stays_within_half_width() {
        let renderer = WaveformRenderer::new(CANVAS);
        let mut bank = OscillatorBank::new(440.0);
        for i in 1..10 {
            bank.set_enabled(i, true);
        }
        for point in renderer.blended(&mut bank) {
            assert!((60..=180).contains(&point.x));
        }
    }

    #[test]
    fn when_canvas_has_no_width_nothing_is_drawn() {
        let renderer = WaveformRenderer::new(Canvas {
            width: 0,
            height: 320,
        });
        let mut bank = OscillatorBank::new(440.0);
        bank.set_enabled(0, true);

        assert!(renderer.separated(&bank).all(|mut sweep| sweep.next().is_none()));
        assert_eq!(renderer.blended(&mut bank).count(), 0);
    }

    #[test]
    fn when_canvas_is_tallest_possible_sweep_ends_on_last_row() {
        let renderer = WaveformRenderer::new(Canvas {
            width: 1,
            height: u16::MAX,
        });
        let bank = OscillatorBank::new(440.0);
        let sweep = renderer.separated(&bank).next().unwrap();

        let (rows, last) = sweep.fold((0_usize, None), |(rows, _), p| (rows + 1, Some(p)));

        assert_eq!(rows, usize::from(u16::MAX) + 1);
        assert_eq!(last, Some(PixelPoint { x: 0, y: u16::MAX }));
    }

    #[test]
    fn when_blended_with_fundamental_only_it_matches_a_half_height_sine() {
        let renderer = WaveformRenderer::new(CANVAS);
        let mut bank = OscillatorBank::new(440.0);
        let points: heapless::Vec<PixelPoint, 321> = renderer.blended(&mut bank).collect();
        assert_eq!(points[0].x, 120);
        assert_eq!(points[80].x, 180);
        assert_eq!(points[240].x, 60);
    }
}
