//! USB HID keyboard device.
//!
//! Initialises the Embassy USB stack on the nRF52840 hardware USB
//! peripheral, exposes one HID keyboard endpoint, and turns USB bus
//! events into the interface-ready flag.

use defmt::info;
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{self, bind_interrupts, peripherals};
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, ReportId, RequestHandler, State};
use embassy_usb::control::OutResponse;
use embassy_usb::driver::EndpointError;
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;

use sudo_button::config;
use sudo_button::hid::{HidRequests, ReportSink, ReportType, KEYBOARD_REPORT_DESCRIPTOR, KEYBOARD_REPORT_SIZE};
use sudo_button::{Error, ReadyFlag, SubmitError};

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

pub type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;

static KB_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static USB_STATE_HANDLER: StaticCell<UsbStateHandler> = StaticCell::new();
static KB_REQUEST_HANDLER: StaticCell<KeyboardRequestHandler> = StaticCell::new();

/// Receives bus status messages from the USB stack.
///
/// The interface counts as ready while the host has it configured and the
/// bus is not suspended.
struct UsbStateHandler {
    ready: &'static ReadyFlag,
    configured: bool,
    suspended: bool,
}

impl UsbStateHandler {
    fn update(&mut self) {
        self.ready.set(self.configured && !self.suspended);
    }
}

impl embassy_usb::Handler for UsbStateHandler {
    fn enabled(&mut self, enabled: bool) {
        info!("USBD message: VBUS {}", if enabled { "ready" } else { "removed" });
        if !enabled {
            self.configured = false;
            self.suspended = false;
            self.update();
        }
    }

    fn reset(&mut self) {
        info!("USBD message: bus reset");
        self.configured = false;
        self.update();
    }

    fn addressed(&mut self, addr: u8) {
        info!("USBD message: addressed {}", addr);
    }

    fn configured(&mut self, configured: bool) {
        info!("USBD message: configuration {}", if configured { 1 } else { 0 });
        self.configured = configured;
        self.update();
    }

    fn suspended(&mut self, suspended: bool) {
        info!("USBD message: {}", if suspended { "suspend" } else { "resume" });
        self.suspended = suspended;
        self.update();
    }
}

/// HID class requests for the keyboard interface.
struct KeyboardRequestHandler {
    requests: HidRequests,
}

fn split_report_id(id: ReportId) -> (ReportType, u8) {
    match id {
        ReportId::In(id) => (ReportType::Input, id),
        ReportId::Out(id) => (ReportType::Output, id),
        ReportId::Feature(id) => (ReportType::Feature, id),
    }
}

impl RequestHandler for KeyboardRequestHandler {
    fn get_report(&mut self, id: ReportId, _buf: &mut [u8]) -> Option<usize> {
        let (kind, id) = split_report_id(id);
        self.requests.get_report(kind, id)
    }

    fn set_report(&mut self, id: ReportId, data: &[u8]) -> OutResponse {
        let (kind, _) = split_report_id(id);
        match self.requests.set_report(kind, data) {
            Ok(()) => OutResponse::Accepted,
            Err(_) => OutResponse::Rejected,
        }
    }

    fn get_idle_ms(&mut self, id: Option<ReportId>) -> Option<u32> {
        let id = id.map_or(0, |id| split_report_id(id).1);
        Some(self.requests.idle_ms(id))
    }

    fn set_idle_ms(&mut self, id: Option<ReportId>, duration_ms: u32) {
        let id = id.map_or(0, |id| split_report_id(id).1);
        self.requests.set_idle_ms(id, duration_ms);
    }
}

/// The keyboard IN endpoint as seen by the dispatcher.
pub struct UsbKeyboard {
    writer: HidWriter<'static, UsbDriver, KEYBOARD_REPORT_SIZE>,
}

impl ReportSink for UsbKeyboard {
    async fn submit(&mut self, report: &[u8; KEYBOARD_REPORT_SIZE]) -> Result<(), Error> {
        self.writer.write(report).await.map_err(|e| match e {
            EndpointError::BufferOverflow => Error::Submit(SubmitError::BufferOverflow),
            EndpointError::Disabled => Error::Submit(SubmitError::Disabled),
        })
    }
}

/// Build result containing the USB device runner and the keyboard writer.
pub struct UsbHidDevice {
    pub device: UsbDevice<'static, UsbDriver>,
    pub keyboard: UsbKeyboard,
}

/// Initialise the USB stack and create the keyboard device.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usbd: peripherals::USBD, ready: &'static ReadyFlag) -> UsbHidDevice {
    // Hardware VBUS detection: the stack enables itself when the cable is
    // plugged in and disables on removal.
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = config::USB_MAX_POWER_MA;
    usb_config.max_packet_size_0 = 64;

    let mut builder = Builder::new(
        driver,
        usb_config,
        USB_CONFIG_DESC.init([0u8; 256]),
        USB_BOS_DESC.init([0u8; 256]),
        USB_MSOS_DESC.init([0u8; 256]),
        USB_CTRL_BUF.init([0u8; 64]),
    );

    let state_handler = USB_STATE_HANDLER.init(UsbStateHandler {
        ready,
        configured: false,
        suspended: false,
    });
    builder.handler(state_handler);

    let request_handler = KB_REQUEST_HANDLER.init(KeyboardRequestHandler {
        requests: HidRequests::new(),
    });
    let kb_config = HidConfig {
        report_descriptor: KEYBOARD_REPORT_DESCRIPTOR,
        request_handler: Some(request_handler),
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: config::USB_HID_MAX_PACKET_SIZE,
    };
    let writer = HidWriter::new(&mut builder, KB_STATE.init(State::new()), kb_config);

    let device = builder.build();

    info!("USB HID keyboard device initialised");

    UsbHidDevice {
        device,
        keyboard: UsbKeyboard { writer },
    }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// Handles enumeration, suspend/resume, and endpoint servicing.
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");
    device.run().await
}
