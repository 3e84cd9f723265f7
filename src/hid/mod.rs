//! HID keyboard reports, their submission to the transport, and class
//! request handling.

pub mod keyboard;
pub mod requests;
pub mod sender;


pub use keyboard::{KeyStroke, KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR, KEYBOARD_REPORT_SIZE};
pub use requests::{HidRequests, ReportType};
pub use sender::{send_key, ReportSink};
