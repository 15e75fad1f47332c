//! The single consumer: waits on the doorbell, builds a report, clears the
//! movement accumulators, hands the report to the transport and toggles the
//! activity indicator.

use embedded_hal::digital::StatefulOutputPin;

use crate::doorbell::Doorbell;
use crate::fmt::{Debug2Format, error, trace};
use crate::report::{MouseReport, REPORT_LEN};
use crate::state::StateReader;

/// Host-facing transport for finished reports.
pub trait ReportSink {
    type Error: core::fmt::Debug;

    async fn send_report(&mut self, report: &[u8; REPORT_LEN]) -> Result<(), Self::Error>;
}

/// Activity indicator toggled once per dispatch.
pub trait Indicator {
    type Error: core::fmt::Debug;

    fn is_ready(&self) -> bool {
        true
    }

    fn toggle(&mut self) -> Result<(), Self::Error>;
}

/// [`Indicator`] over an `embedded-hal` output pin.
pub struct PinIndicator<P>(pub P);

impl<P: StatefulOutputPin> Indicator for PinIndicator<P> {
    type Error = P::Error;

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.0.toggle()
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchPhase {
    Idle,
    WaitingOnDoorbell,
    Snapshotting,
    Transmitting,
}

/// Outcome of one dispatch cycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dispatch {
    pub report: MouseReport,
    /// `false` when the transport rejected the report. It is not retried.
    pub delivered: bool,
}

pub struct Dispatcher<'a, S, L> {
    reader: StateReader<'a>,
    doorbell: &'a Doorbell,
    sink: S,
    indicator: L,
    phase: DispatchPhase,
}

impl<'a, S: ReportSink, L: Indicator> Dispatcher<'a, S, L> {
    pub fn new(reader: StateReader<'a>, doorbell: &'a Doorbell, sink: S, indicator: L) -> Self {
        Self {
            reader,
            doorbell,
            sink,
            indicator,
            phase: DispatchPhase::Idle,
        }
    }

    pub fn phase(&self) -> DispatchPhase {
        self.phase
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    /// Blocks until the doorbell rings, then sends exactly one report.
    pub async fn dispatch_once(&mut self) -> Dispatch {
        self.phase = DispatchPhase::WaitingOnDoorbell;
        self.doorbell.wait().await;

        self.phase = DispatchPhase::Snapshotting;
        let report = self.reader.snapshot_and_clear();
        trace!("report = {}", report);

        self.phase = DispatchPhase::Transmitting;
        let delivered = match self.sink.send_report(&report.to_bytes()).await {
            Ok(()) => true,
            Err(e) => {
                error!("HID write error, {}", Debug2Format(&e));
                false
            }
        };

        if let Err(e) = self.indicator.toggle() {
            error!("Failed to toggle the LED pin, error: {}", Debug2Format(&e));
        }

        self.phase = DispatchPhase::Idle;
        Dispatch { report, delivered }
    }

    pub async fn run(&mut self) -> ! {
        loop {
            self.dispatch_once().await;
        }
    }
}
