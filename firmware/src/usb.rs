use edge_mouse::report::REPORT_DESCRIPTOR_LEN;
use edge_mouse::{MouseConfig, PowerLink, PowerState, REPORT_LEN, ReportSink};
use embassy_futures::select::{Either, select};
use embassy_nrf::Peri;
use embassy_nrf::peripherals::USBD;
use embassy_nrf::usb::Driver as NrfUsbDriver;
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_usb::class::hid::{self, HidWriter};
use embassy_usb::driver::EndpointError;
use embassy_usb::{Builder, Config as UsbConfig, UsbDevice};
use static_cell::StaticCell;

use crate::Irqs;

pub type UsbDriver = NrfUsbDriver<'static, HardwareVbusDetect>;
pub type StaticUsbDevice = UsbDevice<'static, UsbDriver>;
pub type MouseWriter = HidWriter<'static, UsbDriver, REPORT_LEN>;

pub const VID: u16 = 0x1915;
pub const PID: u16 = 0x52A0;

const POLL_MS: u8 = 10;

macro_rules! static_byte_buffer {
    ($size:expr) => {{
        static BUFFER: ::static_cell::ConstStaticCell<[u8; $size]> =
            ::static_cell::ConstStaticCell::new([0; $size]);
        BUFFER.take()
    }};
}

/// Panics if called more than once.
pub fn usb_device(
    usbd: Peri<'static, USBD>,
    power: &'static PowerLink,
    mouse: &MouseConfig,
) -> (StaticUsbDevice, MouseWriter) {
    let vbus = HardwareVbusDetect::new(Irqs);
    let driver = UsbDriver::new(usbd, Irqs, vbus);

    let mut config = UsbConfig::new(VID, PID);
    config.manufacturer = Some("Edge Mouse");
    config.product = Some("Edge Mouse HID");
    config.max_power = 100;
    config.max_packet_size_0 = 64;
    config.supports_remote_wakeup = true;

    let config_descriptor = static_byte_buffer!(256);
    let bos_descriptor = static_byte_buffer!(256);
    let msos_descriptor = static_byte_buffer!(256);
    let control_buf = static_byte_buffer!(64);

    let mut builder = Builder::new(
        driver,
        config,
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );

    static HANDLER: StaticCell<StatusHandler> = StaticCell::new();
    let handler = HANDLER.init(StatusHandler { power });
    builder.handler(handler);

    static STATE: StaticCell<hid::State> = StaticCell::new();
    let state = STATE.init(hid::State::new());
    static DESCRIPTOR: StaticCell<[u8; REPORT_DESCRIPTOR_LEN]> = StaticCell::new();
    let report_descriptor = DESCRIPTOR.init(mouse.report_descriptor());
    let hid_config = hid::Config {
        report_descriptor,
        request_handler: None,
        poll_ms: POLL_MS,
        max_packet_size: REPORT_LEN as u16,
    };
    let writer = HidWriter::<_, REPORT_LEN>::new(&mut builder, state, hid_config);

    (builder.build(), writer)
}

/// Feeds bus status transitions into the [`PowerLink`].
struct StatusHandler {
    power: &'static PowerLink,
}

impl embassy_usb::Handler for StatusHandler {
    fn enabled(&mut self, enabled: bool) {
        let state = if enabled {
            PowerState::Connected
        } else {
            PowerState::Disconnected
        };
        defmt::info!("USB {}", state);
        self.power.set_state(state);
    }

    fn reset(&mut self) {
        defmt::warn!("USB bus reset");
        self.power.set_state(PowerState::Reset);
    }

    fn configured(&mut self, configured: bool) {
        defmt::info!("USB configured: {}", configured);
        if configured {
            self.power.set_state(PowerState::Configured);
        }
    }

    fn suspended(&mut self, suspended: bool) {
        defmt::info!("USB suspended: {}", suspended);
        if suspended {
            self.power.set_state(PowerState::Suspended);
        } else {
            // Requests raised while suspended are satisfied by this resume.
            self.power.take_wakeup_request();
            self.power.set_state(PowerState::Resumed);
        }
    }
}

/// Runs the device, issuing a remote wakeup when a button handler asks for
/// one while the bus is suspended.
#[embassy_executor::task]
pub async fn run_usb(mut device: StaticUsbDevice, power: &'static PowerLink) -> ! {
    loop {
        device.run_until_suspend().await;
        match select(device.wait_resume(), power.wait_wakeup_request()).await {
            Either::First(()) => {}
            Either::Second(()) => {
                defmt::info!("Requesting remote wakeup");
                if let Err(e) = device.remote_wakeup().await {
                    defmt::error!("Remote wakeup failed: {}", defmt::Debug2Format(&e));
                }
            }
        }
    }
}

/// Interrupt IN endpoint of the HID interface.
pub struct HidSink(pub MouseWriter);

impl ReportSink for HidSink {
    type Error = EndpointError;

    async fn send_report(&mut self, report: &[u8; REPORT_LEN]) -> Result<(), EndpointError> {
        self.0.write(report).await
    }
}
