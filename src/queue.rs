//! Bounded hand-off between the input producer and the dispatcher.
//!
//! The producer side never waits: a full queue drops the event. The
//! consumer side waits for the next event in FIFO order.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, TrySendError};

use crate::config::EVENT_QUEUE_CAPACITY;
use crate::error::Error;
use crate::event::KeyEvent;
use crate::macros::error;

/// Fixed-capacity FIFO of [`KeyEvent`]s.
pub struct EventQueue {
    channel: Channel<CriticalSectionRawMutex, KeyEvent, EVENT_QUEUE_CAPACITY>,
}

impl EventQueue {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Enqueue without blocking. A full queue rejects the event.
    pub fn try_push(&self, event: KeyEvent) -> Result<(), Error> {
        self.channel
            .try_send(event)
            .map_err(|TrySendError::Full(_)| Error::QueueFull)
    }

    /// Wait for the oldest queued event.
    pub async fn pop(&self) -> KeyEvent {
        self.channel.receive().await
    }

    /// Take the oldest queued event if there is one.
    pub fn try_pop(&self) -> Option<KeyEvent> {
        self.channel.try_receive().ok()
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle given to the input source.
///
/// `report` is O(1) and allocation free, safe to call from a
/// latency-sensitive context.
#[derive(Clone, Copy)]
pub struct InputProducer<'a> {
    queue: &'a EventQueue,
}

impl<'a> InputProducer<'a> {
    pub const fn new(queue: &'a EventQueue) -> Self {
        Self { queue }
    }

    /// Wrap a raw `(code, value)` transition and enqueue it.
    ///
    /// On overflow the event is dropped and logged; the input source is
    /// never held up.
    pub fn report(&self, code: u16, value: i32) -> Result<(), Error> {
        let event = KeyEvent::new(code, value);
        self.queue.try_push(event).inspect_err(|_| {
            error!("Failed to put new input event (code {}, value {})", code, value);
        })
    }
}
