//! Bus power state as pushed by the USB transport, plus the remote-wakeup
//! request path used by button handlers while the host is suspended.

use core::sync::atomic::{AtomicU8, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    Unknown = 0,
    Reset,
    Connected,
    Configured,
    Disconnected,
    Suspended,
    Resumed,
}

impl PowerState {
    const fn from_u8(v: u8) -> Self {
        match v {
            1 => PowerState::Reset,
            2 => PowerState::Connected,
            3 => PowerState::Configured,
            4 => PowerState::Disconnected,
            5 => PowerState::Suspended,
            6 => PowerState::Resumed,
            _ => PowerState::Unknown,
        }
    }
}

/// Written by the transport's status callback, read by line handlers.
pub struct PowerLink {
    state: AtomicU8,
    wakeup: Signal<CriticalSectionRawMutex, ()>,
}

impl PowerLink {
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(PowerState::Unknown as u8),
            wakeup: Signal::new(),
        }
    }

    pub fn set_state(&self, state: PowerState) {
        self.state.store(state as u8, Ordering::Release);
    }

    pub fn state(&self) -> PowerState {
        PowerState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn is_suspended(&self) -> bool {
        self.state() == PowerState::Suspended
    }

    /// Ask the transport to wake the host. Repeated requests before the
    /// transport services one collapse into a single wakeup.
    pub fn request_wakeup(&self) {
        self.wakeup.signal(());
    }

    pub async fn wait_wakeup_request(&self) {
        self.wakeup.wait().await;
    }

    /// Consumes a pending wakeup request, if any.
    pub fn take_wakeup_request(&self) -> bool {
        self.wakeup.try_take().is_some()
    }
}

impl Default for PowerLink {
    fn default() -> Self {
        Self::new()
    }
}
