//! HPS watchdog 0.

use volatile_register::WO;

/// Counter restart register of the L4 watchdog 0.
const RESTART_REGISTER: usize = 0xFFD0_200C;
const RESTART_KEY: u32 = 0x76;

pub struct Watchdog {
    restart: &'static WO<u32>,
}

impl Watchdog {
    /// # Safety
    ///
    /// The watchdog must not be aliased.
    pub unsafe fn take() -> Self {
        Self {
            restart: unsafe { &*(RESTART_REGISTER as *const WO<u32>) },
        }
    }

    pub fn reset(&mut self) {
        // SAFETY: Writing the key only restarts the counter.
        unsafe { self.restart.write(RESTART_KEY) }
    }
}
