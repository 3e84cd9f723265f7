//! USB Device subsystem - presents a boot-protocol keyboard to the host.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb` with a single HID interface:
//!
//! - Interface 0: Keyboard (boot protocol, IN endpoint only)
//!
//! Bus state changes from the stack drive the pipeline's ready flag; the
//! dispatcher writes reports through [`hid_device::UsbKeyboard`].

pub mod hid_device;
