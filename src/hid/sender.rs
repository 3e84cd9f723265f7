//! Report submission to the HID transport.

use super::keyboard::{KeyStroke, KeyboardReport, KEYBOARD_REPORT_SIZE};
use crate::error::Error;
use crate::macros::error;

/// Downstream HID transport that accepts complete keyboard reports.
///
/// The firmware implements this on top of the embassy-usb `HidWriter`.
#[allow(async_fn_in_trait)]
pub trait ReportSink {
    async fn submit(&mut self, report: &[u8; KEYBOARD_REPORT_SIZE]) -> Result<(), Error>;
}

/// Encode one stroke and hand it to the transport.
///
/// A rejected report is logged and returned; callers do not retry it.
pub async fn send_key<S: ReportSink>(sink: &mut S, stroke: KeyStroke) -> Result<(), Error> {
    let report = KeyboardReport::from_stroke(stroke);
    sink.submit(report.as_bytes()).await.inspect_err(|e| {
        error!("HID submit report error, {:?}", e);
    })
}
