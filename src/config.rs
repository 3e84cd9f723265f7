//! Application-wide constants and compile-time configuration.
//!
//! Timing parameters, queue sizing, and USB identity live here so they
//! can be tuned in one place.

// Press classification

/// Presses shorter than this (ms) type the short sequence, anything at or
/// above it types the long one.
pub const LONG_PRESS_MS: u64 = 500;

/// Depth of the producer → consumer event queue.
///
/// With 2 slots at most one event can wait behind the one being handled;
/// anything beyond that is dropped at the producer.
pub const EVENT_QUEUE_CAPACITY: usize = 2;

// Button

/// Input code carried by every event from the monitored button
/// (conventional "key 0" code).
pub const BUTTON_CODE: u16 = 11;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u32 = 20;

// GPIO pin assignment (nRF52840-DK default)
//
//   Button 1 → P0.11 (active-low, internal pull-up)
//
// The concrete `embassy_nrf::peripherals::*` pin is selected in `main.rs`.

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0001;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "sudo-button";
pub const USB_PRODUCT: &str = "SUDO Button";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// Bus power drawn from the host (mA).
pub const USB_MAX_POWER_MA: u16 = 100;

/// USB HID polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 10;

/// Max packet size of the HID interrupt IN endpoint.
pub const USB_HID_MAX_PACKET_SIZE: u16 = 8;
