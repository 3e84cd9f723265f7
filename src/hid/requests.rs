//! HID class control requests (GET/SET_REPORT, GET/SET_IDLE).
//!
//! The keyboard only ever pushes input reports, so these are mostly
//! bookkeeping: the host's idle rate is stored and echoed back, output
//! reports (LED state) are accepted and ignored, everything else is
//! refused.

use crate::error::Error;
use crate::macros::{debug, info, warn};

/// Report type addressed by a class request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportType {
    Input,
    Output,
    Feature,
}

#[derive(Debug, Default)]
pub struct HidRequests {
    idle_ms: u32,
}

impl HidRequests {
    pub const fn new() -> Self {
        Self { idle_ms: 0 }
    }

    /// No report is kept for the host to read back.
    pub fn get_report(&mut self, kind: ReportType, id: u8) -> Option<usize> {
        warn!("Get Report not implemented, Type {:?} ID {}", kind, id);
        None
    }

    pub fn set_report(&mut self, kind: ReportType, data: &[u8]) -> Result<(), Error> {
        match kind {
            ReportType::Output => {
                debug!("Output report, {} bytes", data.len());
                Ok(())
            }
            ReportType::Input | ReportType::Feature => {
                warn!("Unsupported report type {:?}", kind);
                Err(Error::UnsupportedReport)
            }
        }
    }

    pub fn set_idle_ms(&mut self, id: u8, duration_ms: u32) {
        info!("Set Idle {} to {}", id, duration_ms);
        self.idle_ms = duration_ms;
    }

    pub fn idle_ms(&self, id: u8) -> u32 {
        info!("Get Idle {} to {}", id, self.idle_ms);
        self.idle_ms
    }
}
