//! HID interface readiness flag.
//!
//! Written only by the USB state handler, read by the dispatcher before
//! every output. Only the latest state is kept.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::macros::info;

pub struct ReadyFlag(AtomicBool);

impl ReadyFlag {
    /// Starts out not ready.
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn set(&self, ready: bool) {
        let was = self.0.swap(ready, Ordering::Release);
        if was != ready {
            info!(
                "HID keyboard interface is {}",
                if ready { "ready" } else { "not ready" }
            );
        }
    }

    pub fn is_ready(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for ReadyFlag {
    fn default() -> Self {
        Self::new()
    }
}
