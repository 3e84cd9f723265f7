//! USB HID keyboard report (boot protocol compatible).
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Reserved (0x00)
//! Byte 2-7: Up to 6 simultaneous key codes (USB HID usage codes)
//! ```
//!
//! Only one key is ever down at a time here, so only byte 2 of the key
//! array is populated.

/// Keyboard report size in bytes.
pub const KEYBOARD_REPORT_SIZE: usize = 8;

/// Offset of the modifier byte.
const MODIFIER_IDX: usize = 0;
/// Offset of the first key code slot.
const KEY_CODE1_IDX: usize = 2;

/// HID usage IDs (Keyboard/Keypad page) used by the key sequences.
pub mod keycode {
    pub const NONE: u8 = 0x00;
    pub const D: u8 = 0x07;
    pub const O: u8 = 0x12;
    pub const S: u8 = 0x16;
    pub const U: u8 = 0x18;
    pub const ENTER: u8 = 0x28;
    pub const SPACE: u8 = 0x2C;
    pub const RIGHT_BRACE: u8 = 0x30;
    pub const SLASH: u8 = 0x38;
}

/// Modifier byte bits.
pub mod modifier {
    pub const NONE: u8 = 0x00;
    pub const LEFT_SHIFT: u8 = 0x02;
}

/// A single key (with modifiers) to be reported to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyStroke {
    pub keycode: u8,
    pub modifier: u8,
}

impl KeyStroke {
    /// All keys up.
    pub const RELEASE: Self = Self::new(keycode::NONE, modifier::NONE);

    pub const fn new(keycode: u8, modifier: u8) -> Self {
        Self { keycode, modifier }
    }

    pub const fn key(keycode: u8) -> Self {
        Self::new(keycode, modifier::NONE)
    }

    pub const fn shifted(keycode: u8) -> Self {
        Self::new(keycode, modifier::LEFT_SHIFT)
    }

    pub const fn is_release(&self) -> bool {
        self.keycode == keycode::NONE && self.modifier == modifier::NONE
    }
}

/// Standard USB HID boot-protocol keyboard report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    bytes: [u8; KEYBOARD_REPORT_SIZE],
}

impl KeyboardReport {
    /// Create an empty (all-keys-released) report.
    pub const fn empty() -> Self {
        Self {
            bytes: [0; KEYBOARD_REPORT_SIZE],
        }
    }

    /// Build a report from scratch holding exactly one stroke.
    ///
    /// Starts zeroed every time so nothing from a previous stroke leaks
    /// into the next frame.
    pub const fn from_stroke(stroke: KeyStroke) -> Self {
        let mut bytes = [0; KEYBOARD_REPORT_SIZE];
        bytes[MODIFIER_IDX] = stroke.modifier;
        bytes[KEY_CODE1_IDX] = stroke.keycode;
        Self { bytes }
    }

    pub fn modifier(&self) -> u8 {
        self.bytes[MODIFIER_IDX]
    }

    /// The six key array slots.
    pub fn keycodes(&self) -> &[u8] {
        &self.bytes[KEY_CODE1_IDX..]
    }

    pub fn as_bytes(&self) -> &[u8; KEYBOARD_REPORT_SIZE] {
        &self.bytes
    }

    /// Returns `true` if no keys are pressed (release frame).
    pub fn is_empty(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }
}

// USB HID report descriptor for a boot-protocol keyboard

/// USB HID Report Descriptor for a standard keyboard.
///
/// Declares:
///   - 8 modifier key bits (input)
///   - 1 reserved byte
///   - 5 LED indicators (output) + 3 bits padding
///   - 6 key code bytes (input, usages 0..=101)
pub const KEYBOARD_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    //
    //   - Modifier keys -
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0xE0, //   Usage Minimum (Left Control)
    0x29, 0xE7, //   Usage Maximum (Right GUI)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   - Reserved -
    0x75, 0x08, //   Report Size (8)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x01, //   Input (Constant)
    //
    //   - LEDs -
    0x05, 0x08, //   Usage Page (LEDs)
    0x19, 0x01, //   Usage Minimum (Num Lock)
    0x29, 0x05, //   Usage Maximum (Kana)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x05, //   Report Count (5)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    0x75, 0x03, //   Report Size (3)
    0x95, 0x01, //   Report Count (1)
    0x91, 0x01, //   Output (Constant)
    //
    //   - Key array -
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0x00, //   Usage Minimum (0)
    0x29, 0x65, //   Usage Maximum (101)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x65, //   Logical Maximum (101)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x06, //   Report Count (6)
    0x81, 0x00, //   Input (Data, Array)
    //
    0xC0, // End Collection
];
