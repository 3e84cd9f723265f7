//! Shared state between the three execution contexts: input producer,
//! USB state handler, and dispatcher.
//!
//! Each field has exactly one writer. The value is `const`-constructible
//! so the firmware can keep it in a `static`.

use crate::queue::{EventQueue, InputProducer};
use crate::ready::ReadyFlag;

pub struct Pipeline {
    queue: EventQueue,
    ready: ReadyFlag,
}

impl Pipeline {
    pub const fn new() -> Self {
        Self {
            queue: EventQueue::new(),
            ready: ReadyFlag::new(),
        }
    }

    /// Handle for the input source.
    pub fn producer(&self) -> InputProducer<'_> {
        InputProducer::new(&self.queue)
    }

    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    /// Flag driven by the USB state handler.
    pub fn ready(&self) -> &ReadyFlag {
        &self.ready
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
