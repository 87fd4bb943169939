//! Decimal readout of the fundamental frequency.

#[allow(unused_imports)]
use micromath::F32Ext;

/// Number of seven-segment displays on the board.
pub const DISPLAYS: usize = 6;

/// Split the rounded frequency into one decimal digit per display.
///
/// Display `k` shows the `10^k` place, so display 0 is the rightmost one.
/// Values that do not fit on the displays wrap around.
#[must_use]
pub fn frequency_digits(frequency: f32) -> [u8; DISPLAYS] {
    let mut value = frequency.max(0.0).round() as u32;
    let mut digits = [0; DISPLAYS];
    for digit in digits.iter_mut() {
        *digit = (value % 10) as u8;
        value /= 10;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_places_units_on_the_first_display() {
        assert_eq!(frequency_digits(440.0), [0, 4, 4, 0, 0, 0]);
    }

    #[test]
    fn it_rounds_to_the_nearest_hertz() {
        assert_eq!(frequency_digits(484.000_03), [4, 8, 4, 0, 0, 0]);
        assert_eq!(frequency_digits(399.6), [0, 0, 4, 0, 0, 0]);
    }

    #[test]
    fn it_uses_all_six_displays() {
        assert_eq!(frequency_digits(123_456.0), [6, 5, 4, 3, 2, 1]);
        assert_eq!(frequency_digits(1_234_567.0), [7, 6, 5, 4, 3, 2]);
    }

    #[test]
    fn when_frequency_is_zero_all_displays_show_zero() {
        assert_eq!(frequency_digits(0.0), [0; DISPLAYS]);
    }
}
