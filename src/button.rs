//! Debounced push-button input.
//!
//! The button is active-low with a pull-up. The watcher waits for any
//! edge, lets the contact settle, samples the level and reports a
//! transition only if the settled level differs from the last one
//! reported. Bounces that settle back to the old level produce nothing.

use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::event::KeyEvent;
use crate::macros::{info, warn};
use crate::queue::InputProducer;

pub struct ButtonWatcher<P, D> {
    pin: P,
    delay: D,
    code: u16,
    pressed: bool,
}

impl<P, D> ButtonWatcher<P, D>
where
    P: InputPin + Wait,
    D: DelayNs,
{
    /// Starts out assuming the button is released.
    pub fn new(pin: P, delay: D, code: u16) -> Self {
        Self {
            pin,
            delay,
            code,
            pressed: false,
        }
    }

    /// Wait for the next settled press or release.
    pub async fn next_event(&mut self) -> Result<KeyEvent, P::Error> {
        loop {
            self.pin.wait_for_any_edge().await?;
            self.delay.delay_ms(BUTTON_DEBOUNCE_MS).await;

            let pressed = self.pin.is_low()?;
            if pressed != self.pressed {
                self.pressed = pressed;
                return Ok(KeyEvent::new(self.code, i32::from(pressed)));
            }
        }
    }

    /// Wait for one transition and hand it to the producer.
    pub async fn forward_next(&mut self, producer: InputProducer<'_>) {
        match self.next_event().await {
            Ok(event) => {
                producer.report(event.code, event.value).ok();
            }
            Err(_) => warn!("Button pin read failed"),
        }
    }

    /// Feed every transition into the producer. Never returns.
    pub async fn run(mut self, producer: InputProducer<'_>) -> ! {
        info!("Button watcher started (code {})", self.code);
        loop {
            self.forward_next(producer).await;
        }
    }
}
