//! Input event record carried from the button to the dispatcher.

/// One raw press/release transition.
///
/// Plain data, copied by value through the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    /// Input source identifier (always the monitored button here).
    pub code: u16,
    /// Non-zero when pressed, zero when released.
    pub value: i32,
}

impl KeyEvent {
    pub const fn new(code: u16, value: i32) -> Self {
        Self { code, value }
    }

    pub const fn press(code: u16) -> Self {
        Self::new(code, 1)
    }

    pub const fn release(code: u16) -> Self {
        Self::new(code, 0)
    }

    pub const fn is_press(&self) -> bool {
        self.value != 0
    }
}
