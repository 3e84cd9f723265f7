//! sudo-button firmware for the nRF52840.
//!
//! Tasks:
//! - `usb_task`    - runs the embassy-usb device stack
//! - `button_task` - debounces the button and feeds the event queue
//! - main          - the dispatcher loop (consumer of the queue)

#![no_std]
#![no_main]

mod usb;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::config::HfclkSource;
use embassy_nrf::gpio::{Input, Pull};
use embassy_time::{Delay, Instant};
use embassy_usb::UsbDevice;
use {defmt_rtt as _, panic_probe as _};

use sudo_button::button::ButtonWatcher;
use sudo_button::{config, Clock, Dispatcher, Pipeline};
use usb::hid_device::{self, UsbDriver};

static PIPELINE: Pipeline = Pipeline::new();

/// Uptime from the RTC-backed embassy time driver.
struct Uptime;

impl Clock for Uptime {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, UsbDriver>) -> ! {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::task]
async fn button_task(pin: Input<'static>) -> ! {
    ButtonWatcher::new(pin, Delay, config::BUTTON_CODE)
        .run(PIPELINE.producer())
        .await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // USB needs the external high-frequency crystal.
    let mut nrf_config = embassy_nrf::config::Config::default();
    nrf_config.hfclk_source = HfclkSource::ExternalXtal;
    let p = embassy_nrf::init(nrf_config);

    let usb = hid_device::init(p.USBD, PIPELINE.ready());
    unwrap!(spawner.spawn(usb_task(usb.device)));

    let button = Input::new(p.P0_11, Pull::Up);
    unwrap!(spawner.spawn(button_task(button)));

    info!("SUDO Button is initialized");

    Dispatcher::new(Uptime, usb.keyboard).run(&PIPELINE).await
}
