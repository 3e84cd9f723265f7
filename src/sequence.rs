//! The two fixed keystroke sequences and the duration rule choosing
//! between them.

use crate::config::LONG_PRESS_MS;
use crate::hid::keyboard::{keycode, KeyStroke};

const RELEASE: KeyStroke = KeyStroke::RELEASE;

/// Typed after a short press: "sudo }}" then Enter.
///
/// The two `}` frames are identical, so a release frame sits between them
/// or the host would see one held key.
pub const SHORT_PRESS_SEQUENCE: [KeyStroke; 10] = [
    KeyStroke::key(keycode::S),
    KeyStroke::key(keycode::U),
    KeyStroke::key(keycode::D),
    KeyStroke::key(keycode::O),
    KeyStroke::key(keycode::SPACE),
    KeyStroke::shifted(keycode::RIGHT_BRACE),
    RELEASE,
    KeyStroke::shifted(keycode::RIGHT_BRACE),
    KeyStroke::key(keycode::ENTER),
    RELEASE,
];

/// Typed after a long press: "sudo /s" then Enter.
pub const LONG_PRESS_SEQUENCE: [KeyStroke; 9] = [
    KeyStroke::key(keycode::S),
    KeyStroke::key(keycode::U),
    KeyStroke::key(keycode::D),
    KeyStroke::key(keycode::O),
    KeyStroke::key(keycode::SPACE),
    KeyStroke::key(keycode::SLASH),
    KeyStroke::key(keycode::S),
    KeyStroke::key(keycode::ENTER),
    RELEASE,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceKind {
    Short,
    Long,
}

impl SequenceKind {
    /// Classify a hold time. `None` means no press was on record, which
    /// counts as long.
    pub fn for_hold(held_ms: Option<u64>) -> Self {
        match held_ms {
            Some(ms) if ms < LONG_PRESS_MS => SequenceKind::Short,
            _ => SequenceKind::Long,
        }
    }

    pub fn strokes(self) -> &'static [KeyStroke] {
        match self {
            SequenceKind::Short => &SHORT_PRESS_SEQUENCE,
            SequenceKind::Long => &LONG_PRESS_SEQUENCE,
        }
    }
}
