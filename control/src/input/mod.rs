//! Digital inputs and their mapping onto the tone.

pub mod controller;
pub mod snapshot;

pub use controller::{AmplitudeCommand, FrequencyCommand, InputController};
pub use snapshot::{Buttons, InputSnapshot, Switches};
