#![no_std]
#![no_main]

#[macro_use]
mod pinout;
mod usb;

use defmt::{error, info};
use edge_mouse::{
    Dispatcher, HalInput, Monitors, MouseConfig, MouseCore, PinIndicator, PowerLink, bring_up,
};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pin, Pull};
use embassy_nrf::{Peri, peripherals, usb as nrf_usb};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::usb::{HidSink, run_usb, usb_device};

embassy_nrf::bind_interrupts!(struct Irqs {
    USBD => nrf_usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => nrf_usb::vbus_detect::InterruptHandler;
});

type Line = HalInput<Input<'static>>;
type Led = PinIndicator<Output<'static>>;

static POWER: PowerLink = PowerLink::new();

fn switch(pin: Peri<'static, impl Pin>) -> Line {
    HalInput(Input::new(pin, Pull::Up))
}

#[embassy_executor::task]
async fn lines_task(mut monitors: Monitors<'static, Line>) -> ! {
    monitors.run().await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("Edge mouse starting");

    let led = PinIndicator(Output::new(
        pinout!(p.led0),
        Level::Low,
        OutputDrive::Standard,
    ));
    let lines = board_lines!(p);

    let config = MouseConfig::DEFAULT;
    let (device, writer) = usb_device(pinout!(p.usbd), &POWER, &config);

    static CORE: StaticCell<MouseCore> = StaticCell::new();
    let core = CORE.init(MouseCore::new());

    let (monitors, mut dispatcher): (_, Dispatcher<'static, HidSink, Led>) = match bring_up(
        core,
        &POWER,
        &config,
        lines,
        HidSink(writer),
        led,
    ) {
        Ok(parts) => parts,
        Err(e) => {
            error!("Startup failed: {}", defmt::Debug2Format(&e));
            return;
        }
    };

    info!("Registering device");
    spawner.must_spawn(run_usb(device, &POWER));
    spawner.must_spawn(lines_task(monitors));

    dispatcher.run().await
}
