//! Components of the user interface, passing user input to the tone
//! generator and reactions back to the board.
//!
//! The whole device runs in a single cooperative loop:
//!
//! ```text
//!     [ MainLoop ] -- reads --> [ InputSnapshot ]
//!          |                          |
//!          |                  [ InputController ]
//!          |                          |
//!          +---- owns ----> [ OscillatorBank ] ---> [ Audio / Waveform ]
//!          |
//!     [ HardwareIO ]  codec, LCD, LEDs, seven-segment, watchdog
//! ```

#![no_std]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod config;
pub mod error;
pub mod hardware;
pub mod input;
mod log;
pub mod scheduler;
pub mod segments;

pub use config::Config;
pub use error::{Component, Error};
pub use hardware::{Color, HardwareIO};
pub use scheduler::{MainLoop, TickReport};
