//! Host-side fakes shared by the unit tests.

use core::cell::Cell;

use heapless::Vec;

use crate::clock::Clock;
use crate::error::{Error, SubmitError};
use crate::hid::{ReportSink, KEYBOARD_REPORT_SIZE};

/// Clock that only moves when told to.
#[derive(Default)]
pub struct ManualClock(Cell<u64>);

impl ManualClock {
    pub fn at(ms: u64) -> Self {
        Self(Cell::new(ms))
    }

    pub fn set(&self, ms: u64) {
        self.0.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

pub type Frame = [u8; KEYBOARD_REPORT_SIZE];

/// Transport that records every accepted frame and can be told to
/// refuse the n-th submission.
#[derive(Default)]
pub struct RecordingSink {
    pub frames: Vec<Frame, 64>,
    pub attempts: usize,
    pub reject_attempt: Option<usize>,
}

impl RecordingSink {
    pub fn rejecting(attempt: usize) -> Self {
        Self {
            reject_attempt: Some(attempt),
            ..Self::default()
        }
    }
}

impl ReportSink for RecordingSink {
    async fn submit(&mut self, report: &Frame) -> Result<(), Error> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.reject_attempt == Some(attempt) {
            return Err(SubmitError::Disabled.into());
        }
        self.frames.push(*report).unwrap();
        Ok(())
    }
}
