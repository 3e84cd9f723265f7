//! Single-button USB HID keyboard.
//!
//! A button press is timed and, on release, one of two fixed keystroke
//! sequences is typed on the host over a boot-protocol keyboard
//! interface:
//!
//! - held < 500 ms → `sudo }}` + Enter
//! - held ≥ 500 ms → `sudo /s` + Enter
//!
//! ```text
//! button ──▶ InputProducer ──▶ EventQueue (2) ──▶ Dispatcher ──▶ ReportSink (USB HID)
//!                                                     ▲
//!                               USB state handler ──▶ ReadyFlag
//! ```
//!
//! Everything here is hardware independent and tested on the host
//! (`cargo test`). The nRF52840 firmware in `main.rs` only wires these
//! pieces to embassy-nrf and embassy-usb.

#![cfg_attr(not(test), no_std)]

mod macros;

pub mod button;
pub mod clock;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod hid;
pub mod pipeline;
pub mod queue;
pub mod ready;
pub mod sequence;

#[cfg(test)]
mod test_support;

pub use clock::Clock;
pub use dispatch::{ButtonState, Dispatcher, Outcome};
pub use error::{Error, SubmitError};
pub use event::KeyEvent;
pub use hid::{KeyStroke, KeyboardReport, ReportSink};
pub use pipeline::Pipeline;
pub use queue::{EventQueue, InputProducer};
pub use ready::ReadyFlag;
pub use sequence::SequenceKind;
