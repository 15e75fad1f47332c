//! Single-slot wake signal between line handlers and the dispatcher.
//!
//! Any number of rings before the dispatcher drains collapse into one wake.
//! Intermediate states between rings are not preserved; the dispatcher only
//! sees whatever the aggregate state holds when it snapshots.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

pub struct Doorbell {
    signal: Signal<CriticalSectionRawMutex, ()>,
}

impl Doorbell {
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    /// Safe to call from interrupt context.
    pub fn ring(&self) {
        self.signal.signal(());
    }

    /// Waits until rung at least once since the last drain, then drains.
    pub async fn wait(&self) {
        self.signal.wait().await;
    }

    pub fn is_pending(&self) -> bool {
        self.signal.signaled()
    }
}

impl Default for Doorbell {
    fn default() -> Self {
        Self::new()
    }
}
