//! Cheap sine approximation for the audio-rate path.
//!
//! Based on Bhaskara I's rational approximation, which stays within 0.002 of
//! the true sine over a half period.

use core::f32::consts::{PI, TAU};

/// Approximate `sin(x)` for any finite `x`.
///
/// The phase is wrapped into `[0, 2π)` and the back half-period is folded
/// onto the front one with a flipped sign, since the rational formula is only
/// valid on `[0, π]`.
#[must_use]
pub fn approx_sine(x: f32) -> f32 {
    let x = wrap_phase(x);
    if x < PI {
        bhaskara(x)
    } else {
        -bhaskara(x - PI)
    }
}

/// Bhaskara I approximation, valid for `x` in `[0, π]`.
#[inline]
fn bhaskara(x: f32) -> f32 {
    let p = x * (PI - x);
    16.0 * p / (5.0 * PI * PI - 4.0 * p)
}

/// Wrap a phase into `[0, 2π)`.
///
/// Remainder is exact, so unlike repeated subtraction this keeps working for
/// increments far above `2π`.
#[must_use]
pub fn wrap_phase(phase: f32) -> f32 {
    let mut wrapped = phase % TAU;
    if wrapped < 0.0 {
        wrapped += TAU;
    }
    // Adding 2π to a tiny negative remainder may round up to 2π itself.
    if wrapped >= TAU {
        wrapped = 0.0;
    }
    wrapped
}
