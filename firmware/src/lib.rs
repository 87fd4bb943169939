//! DE1-SoC binding of the tone bank.
//!
//! Built as a static library and linked with the board support package,
//! whose C runtime calls `main` below.

#![no_std]

use core::ffi::c_int;
use core::panic::PanicInfo;

use tonebank_control::{Config, MainLoop};

pub mod system;

use system::driver;
use system::System;

// Keep spinning without feeding the watchdog, the board resets itself.
#[panic_handler]
fn panic(_info: &PanicInfo<'_>) -> ! {
    loop {
        core::hint::spin_loop();
    }
}

/// Firmware entry point.
///
/// Returns only through `exit`, with the raw status code of the peripheral
/// that failed to initialize.
#[no_mangle]
pub extern "C" fn main() -> c_int {
    // SAFETY: This is the only place taking the system, and it runs once.
    let system = unsafe { System::take() };

    let mut main_loop = MainLoop::new(system, Config::default());
    if let Err(error) = main_loop.init() {
        // SAFETY: Provided by the C runtime, never returns.
        unsafe { driver::exit(error.status()) }
    }

    main_loop.run()
}
