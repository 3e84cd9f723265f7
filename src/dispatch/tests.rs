//! Timing and dispatch scenarios, driven on the host with a manual clock
//! and a recording transport.

use embassy_futures::block_on;

use super::{ButtonState, Dispatcher, Outcome};
use crate::event::KeyEvent;
use crate::hid::keyboard::{keycode, modifier, KeyStroke, KeyboardReport};
use crate::pipeline::Pipeline;
use crate::ready::ReadyFlag;
use crate::sequence::{SequenceKind, LONG_PRESS_SEQUENCE, SHORT_PRESS_SEQUENCE};
use crate::test_support::{Frame, ManualClock, RecordingSink};

const BUTTON: u16 = 11;

fn ready() -> ReadyFlag {
    let flag = ReadyFlag::new();
    flag.set(true);
    flag
}

fn frames_for(strokes: &[KeyStroke]) -> heapless::Vec<Frame, 16> {
    strokes
        .iter()
        .map(|&s| *KeyboardReport::from_stroke(s).as_bytes())
        .collect()
}

/// Press at `down`, release at `up`, return the recorded frames and the
/// release outcome.
fn hold(down: u64, up: u64) -> (Outcome, RecordingSink) {
    let clock = ManualClock::at(down);
    let flag = ready();
    let mut dispatcher = Dispatcher::new(&clock, RecordingSink::default());

    let outcome = block_on(async {
        assert_eq!(
            dispatcher.handle(KeyEvent::press(BUTTON), &flag).await,
            Outcome::Pressed
        );
        clock.set(up);
        dispatcher.handle(KeyEvent::release(BUTTON), &flag).await
    });

    assert_eq!(dispatcher.state(), ButtonState::Idle);
    let Dispatcher { sink, .. } = dispatcher;
    (outcome, sink)
}

// ═══════════════════════════════════════════════════════════════════════════
// Duration classification
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn short_hold_types_short_sequence() {
    let (outcome, sink) = hold(0, 200);

    assert_eq!(
        outcome,
        Outcome::Typed {
            kind: SequenceKind::Short,
            failed: 0
        }
    );
    assert_eq!(sink.frames.len(), 10);
    assert_eq!(sink.frames.as_slice(), frames_for(&SHORT_PRESS_SEQUENCE).as_slice());

    let shifted: heapless::Vec<usize, 10> = sink
        .frames
        .iter()
        .enumerate()
        .filter(|(_, f)| f[0] != modifier::NONE)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(shifted.as_slice(), &[5, 7]);
    assert_eq!(sink.frames[5][2], keycode::RIGHT_BRACE);
    assert_eq!(sink.frames[6], [0; 8]);
}

#[test]
fn long_hold_types_long_sequence() {
    let (outcome, sink) = hold(0, 700);

    assert_eq!(
        outcome,
        Outcome::Typed {
            kind: SequenceKind::Long,
            failed: 0
        }
    );
    assert_eq!(sink.frames.len(), 9);
    assert_eq!(sink.frames.as_slice(), frames_for(&LONG_PRESS_SEQUENCE).as_slice());
    assert!(sink.frames.iter().all(|f| f[0] == modifier::NONE));
}

#[test]
fn threshold_is_inclusive_for_long() {
    let (outcome, _) = hold(1_000, 1_499);
    assert!(matches!(outcome, Outcome::Typed { kind: SequenceKind::Short, .. }));

    let (outcome, _) = hold(1_000, 1_500);
    assert!(matches!(outcome, Outcome::Typed { kind: SequenceKind::Long, .. }));
}

#[test]
fn release_without_press_types_long_sequence() {
    let clock = ManualClock::at(10);
    let flag = ready();
    let mut dispatcher = Dispatcher::new(&clock, RecordingSink::default());

    let outcome = block_on(dispatcher.handle(KeyEvent::release(BUTTON), &flag));

    assert_eq!(
        outcome,
        Outcome::Typed {
            kind: SequenceKind::Long,
            failed: 0
        }
    );
    assert_eq!(dispatcher.sink().frames.len(), 9);
}

#[test]
fn repeated_release_measures_from_last_press() {
    let clock = ManualClock::at(0);
    let flag = ready();
    let mut dispatcher = Dispatcher::new(&clock, RecordingSink::default());

    let outcome = block_on(async {
        dispatcher.handle(KeyEvent::press(BUTTON), &flag).await;
        clock.set(100);
        dispatcher.handle(KeyEvent::release(BUTTON), &flag).await;
        assert_eq!(dispatcher.state(), ButtonState::Idle);
        clock.set(300);
        dispatcher.handle(KeyEvent::release(BUTTON), &flag).await
    });

    // 300 ms since the only press, so still short.
    assert_eq!(
        outcome,
        Outcome::Typed {
            kind: SequenceKind::Short,
            failed: 0
        }
    );
    assert_eq!(dispatcher.sink().frames.len(), 20);
}

#[test]
fn repeated_release_past_threshold_is_long() {
    let clock = ManualClock::at(0);
    let flag = ready();
    let mut dispatcher = Dispatcher::new(&clock, RecordingSink::default());

    let outcome = block_on(async {
        dispatcher.handle(KeyEvent::press(BUTTON), &flag).await;
        clock.set(100);
        dispatcher.handle(KeyEvent::release(BUTTON), &flag).await;
        clock.set(650);
        dispatcher.handle(KeyEvent::release(BUTTON), &flag).await
    });

    assert!(matches!(outcome, Outcome::Typed { kind: SequenceKind::Long, .. }));
}

#[test]
fn second_press_restarts_the_hold() {
    let clock = ManualClock::at(0);
    let flag = ready();
    let mut dispatcher = Dispatcher::new(&clock, RecordingSink::default());

    let outcome = block_on(async {
        dispatcher.handle(KeyEvent::press(BUTTON), &flag).await;
        clock.set(600);
        dispatcher.handle(KeyEvent::press(BUTTON), &flag).await;
        assert_eq!(dispatcher.state(), ButtonState::Pressed(600));
        clock.set(800);
        dispatcher.handle(KeyEvent::release(BUTTON), &flag).await
    });

    // 200 ms since the second press, 800 ms since the first.
    assert!(matches!(outcome, Outcome::Typed { kind: SequenceKind::Short, .. }));
}

#[test]
fn press_alone_types_nothing() {
    let clock = ManualClock::at(0);
    let flag = ready();
    let mut dispatcher = Dispatcher::new(&clock, RecordingSink::default());

    let outcome = block_on(dispatcher.handle(KeyEvent::press(BUTTON), &flag));

    assert_eq!(outcome, Outcome::Pressed);
    assert_eq!(dispatcher.state(), ButtonState::Pressed(0));
    assert_eq!(dispatcher.sink().attempts, 0);
}

#[test]
fn any_non_zero_value_counts_as_press() {
    let clock = ManualClock::at(0);
    let flag = ready();
    let mut dispatcher = Dispatcher::new(&clock, RecordingSink::default());

    let outcome = block_on(dispatcher.handle(KeyEvent::new(BUTTON, 2), &flag));
    assert_eq!(outcome, Outcome::Pressed);
}

// ═══════════════════════════════════════════════════════════════════════════
// Readiness gate
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn not_ready_suppresses_output_but_returns_to_idle() {
    let clock = ManualClock::at(0);
    let flag = ReadyFlag::new();
    let mut dispatcher = Dispatcher::new(&clock, RecordingSink::default());

    let outcome = block_on(async {
        dispatcher.handle(KeyEvent::press(BUTTON), &flag).await;
        clock.set(100);
        dispatcher.handle(KeyEvent::release(BUTTON), &flag).await
    });

    assert_eq!(outcome, Outcome::NotReady);
    assert_eq!(dispatcher.state(), ButtonState::Idle);
    assert_eq!(dispatcher.sink().attempts, 0);
}

#[test]
fn press_is_recorded_while_not_ready() {
    let clock = ManualClock::at(0);
    let flag = ReadyFlag::new();
    let mut dispatcher = Dispatcher::new(&clock, RecordingSink::default());

    let outcome = block_on(async {
        dispatcher.handle(KeyEvent::press(BUTTON), &flag).await;
        // Host configures the interface while the button is held.
        flag.set(true);
        clock.set(300);
        dispatcher.handle(KeyEvent::release(BUTTON), &flag).await
    });

    assert!(matches!(outcome, Outcome::Typed { kind: SequenceKind::Short, .. }));
    assert_eq!(dispatcher.sink().frames.len(), 10);
}

#[test]
fn output_resumes_once_ready_again() {
    let clock = ManualClock::at(0);
    let flag = ReadyFlag::new();
    let mut dispatcher = Dispatcher::new(&clock, RecordingSink::default());

    block_on(async {
        dispatcher.handle(KeyEvent::press(BUTTON), &flag).await;
        clock.set(900);
        assert_eq!(
            dispatcher.handle(KeyEvent::release(BUTTON), &flag).await,
            Outcome::NotReady
        );

        flag.set(true);
        clock.set(1_000);
        dispatcher.handle(KeyEvent::press(BUTTON), &flag).await;
        clock.set(1_100);
        assert!(matches!(
            dispatcher.handle(KeyEvent::release(BUTTON), &flag).await,
            Outcome::Typed { kind: SequenceKind::Short, failed: 0 }
        ));
    });

    assert_eq!(dispatcher.sink().frames.len(), 10);
}

// ═══════════════════════════════════════════════════════════════════════════
// Submission failures
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn refused_stroke_does_not_abort_the_sequence() {
    let clock = ManualClock::at(0);
    let flag = ready();
    let mut dispatcher = Dispatcher::new(&clock, RecordingSink::rejecting(3));

    let outcome = block_on(async {
        dispatcher.handle(KeyEvent::press(BUTTON), &flag).await;
        clock.set(50);
        dispatcher.handle(KeyEvent::release(BUTTON), &flag).await
    });

    assert_eq!(
        outcome,
        Outcome::Typed {
            kind: SequenceKind::Short,
            failed: 1
        }
    );
    assert_eq!(dispatcher.sink().attempts, 10);
    assert_eq!(dispatcher.sink().frames.len(), 9);
    // 'o' (index 3) is the one missing.
    assert!(dispatcher.sink().frames.iter().all(|f| f[2] != keycode::O));
}

// ═══════════════════════════════════════════════════════════════════════════
// Queue-driven processing
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn process_next_consumes_queue_in_order() {
    let pipeline = Pipeline::new();
    pipeline.ready().set(true);
    let clock = ManualClock::at(0);
    let mut dispatcher = Dispatcher::new(&clock, RecordingSink::default());

    pipeline.producer().report(BUTTON, 1).unwrap();
    pipeline.producer().report(BUTTON, 0).unwrap();

    block_on(async {
        assert_eq!(dispatcher.process_next(&pipeline).await, Outcome::Pressed);
        clock.set(750);
        assert!(matches!(
            dispatcher.process_next(&pipeline).await,
            Outcome::Typed { kind: SequenceKind::Long, .. }
        ));
    });

    assert!(pipeline.queue().is_empty());
    assert_eq!(dispatcher.sink().frames.len(), 9);
}
