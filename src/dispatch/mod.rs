//! Press-duration state machine and sequence dispatch.
//!
//! The dispatcher is the single consumer of the event queue. A press
//! records the time; a release measures the hold, picks a sequence and
//! types it, one report per stroke.
//!
//! ```text
//!            press (records time)
//!   ┌──────┐ ─────────────────────▶ ┌─────────┐
//!   │ Idle │                        │ Pressed │ ◀─┐ press (overwrites time)
//!   └──────┘ ◀───────────────────── └─────────┘ ──┘
//!            release (types sequence if ready)
//! ```
//!
//! Time bookkeeping always happens. Only the typing is gated on the USB
//! interface being ready.
//!
//! The press time outlives the `Pressed` state: a release seen while
//! `Idle` still measures from the most recent press. Only a release before
//! any press at all has no hold time.

#[cfg(test)]
mod tests;

use crate::clock::Clock;
use crate::event::KeyEvent;
use crate::hid::{send_key, ReportSink};
use crate::macros::{debug, error, info};
use crate::pipeline::Pipeline;
use crate::ready::ReadyFlag;
use crate::sequence::SequenceKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    Idle,
    /// Held since the contained uptime (ms).
    Pressed(u64),
}

/// What handling one event amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Press recorded, nothing typed.
    Pressed,
    /// Sequence typed. `failed` strokes were refused by the transport.
    Typed { kind: SequenceKind, failed: usize },
    /// Release seen while the interface was not ready; nothing typed.
    NotReady,
}

pub struct Dispatcher<C, S> {
    clock: C,
    sink: S,
    state: ButtonState,
    /// Uptime of the most recent press. Only presses write it.
    last_press: Option<u64>,
}

impl<C: Clock, S: ReportSink> Dispatcher<C, S> {
    pub fn new(clock: C, sink: S) -> Self {
        Self {
            clock,
            sink,
            state: ButtonState::Idle,
            last_press: None,
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Advance the state machine. Returns the sequence to type, if any.
    fn track(&mut self, event: KeyEvent) -> Option<SequenceKind> {
        let now = self.clock.now_ms();
        if event.is_press() {
            self.state = ButtonState::Pressed(now);
            self.last_press = Some(now);
            return None;
        }

        let held = self.last_press.map(|at| now.saturating_sub(at));
        self.state = ButtonState::Idle;
        Some(SequenceKind::for_hold(held))
    }

    /// Handle one dequeued event.
    pub async fn handle(&mut self, event: KeyEvent, ready: &ReadyFlag) -> Outcome {
        debug!("Got key {} value {}", event.code, event.value);

        let Some(kind) = self.track(event) else {
            return Outcome::Pressed;
        };

        if !ready.is_ready() {
            error!("USB HID device is not ready");
            return Outcome::NotReady;
        }

        let failed = self.type_sequence(kind).await;
        Outcome::Typed { kind, failed }
    }

    /// Send every stroke of `kind`; a refused stroke does not stop the rest.
    async fn type_sequence(&mut self, kind: SequenceKind) -> usize {
        let mut failed = 0;
        for &stroke in kind.strokes() {
            if send_key(&mut self.sink, stroke).await.is_err() {
                failed += 1;
            }
        }
        failed
    }

    /// Wait for the next queued event and handle it.
    pub async fn process_next(&mut self, pipeline: &Pipeline) -> Outcome {
        let event = pipeline.queue().pop().await;
        self.handle(event, pipeline.ready()).await
    }

    /// Consumer loop. Never returns.
    pub async fn run(mut self, pipeline: &Pipeline) -> ! {
        info!("Dispatcher started");
        loop {
            self.process_next(pipeline).await;
        }
    }
}
