#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use edge_mouse::{EdgeInput, Indicator, Level, MouseReport, REPORT_LEN, ReportSink};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LineFault {
    Config,
    Read,
    Interrupt,
    Edge,
}

/// Test-side handle onto a [`MockLine`] after it has been moved into a monitor.
#[derive(Clone, Default)]
pub struct Probe {
    high: Arc<AtomicBool>,
    fail_reads: Arc<AtomicBool>,
    reads: Arc<AtomicUsize>,
    edges: Arc<Signal<CriticalSectionRawMutex, Result<(), LineFault>>>,
}

impl Probe {
    pub fn set(&self, level: Level) {
        self.high.store(level == Level::High, Ordering::SeqCst);
    }

    /// Drives the line to `level` and completes its pending edge wait.
    pub fn fire(&self, level: Level) {
        self.set(level);
        self.edges.signal(Ok(()));
    }

    /// Completes the pending edge wait with an error.
    pub fn fail_edge(&self) {
        self.edges.signal(Err(LineFault::Edge));
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

pub struct MockLine {
    probe: Probe,
    pub ready: bool,
    pub fault: Option<LineFault>,
}

impl MockLine {
    pub fn new(level: Level) -> (Self, Probe) {
        let probe = Probe::default();
        probe.set(level);
        let line = Self {
            probe: probe.clone(),
            ready: true,
            fault: None,
        };
        (line, probe)
    }
}

impl EdgeInput for MockLine {
    type Error = LineFault;

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn configure_input(&mut self) -> Result<(), LineFault> {
        match self.fault {
            Some(LineFault::Config) => Err(LineFault::Config),
            _ => Ok(()),
        }
    }

    fn read_level(&mut self) -> Result<Level, LineFault> {
        self.probe.reads.fetch_add(1, Ordering::SeqCst);
        if self.fault == Some(LineFault::Read) || self.probe.fail_reads.load(Ordering::SeqCst) {
            return Err(LineFault::Read);
        }
        Ok(Level::from(self.probe.high.load(Ordering::SeqCst)))
    }

    fn enable_edge_interrupt(&mut self) -> Result<(), LineFault> {
        match self.fault {
            Some(LineFault::Interrupt) => Err(LineFault::Interrupt),
            _ => Ok(()),
        }
    }

    async fn wait_for_edge(&mut self) -> Result<(), LineFault> {
        self.probe.edges.wait().await
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub reports: Vec<MouseReport>,
    pub reject: bool,
}

impl ReportSink for RecordingSink {
    type Error = &'static str;

    async fn send_report(&mut self, report: &[u8; REPORT_LEN]) -> Result<(), Self::Error> {
        if self.reject {
            return Err("endpoint write failed");
        }
        self.reports.push(MouseReport::from_bytes(*report));
        Ok(())
    }
}

#[derive(Default)]
pub struct MockLed {
    pub ready: bool,
    pub toggles: usize,
    pub broken: bool,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            ready: true,
            ..Default::default()
        }
    }
}

impl Indicator for MockLed {
    type Error = ();

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn toggle(&mut self) -> Result<(), ()> {
        self.toggles += 1;
        if self.broken { Err(()) } else { Ok(()) }
    }
}
