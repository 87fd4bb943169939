//! Tone synthesis and waveform rendering that must run in real-time.
//!
//! Everything here is hardware independent. The oscillator bank holds the
//! tone state, the audio renderer drains it at the sample rate and the
//! waveform renderer turns it into pixels on display refresh.

#![no_std]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod audio;
pub mod bank;
pub mod sine;
pub mod waveform;
