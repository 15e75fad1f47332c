use crate::report::{DEFAULT_BUTTON_COUNT, REPORT_DESCRIPTOR_LEN, mouse_report_descriptor};

/// Movement per activation edge on an axis line.
pub const DEFAULT_MOVE_STEP: u8 = 10;

/// Build-time behavior of the engine.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseConfig {
    /// Added (mod 256) to an axis accumulator on each activation edge.
    pub move_step: u8,
    /// While the bus is suspended, button edges request a remote wakeup
    /// instead of updating state.
    pub remote_wakeup: bool,
    /// Button bits advertised in the report descriptor. Clamped to 1..=3.
    pub button_count: u8,
}

impl MouseConfig {
    pub const DEFAULT: MouseConfig = MouseConfig {
        move_step: DEFAULT_MOVE_STEP,
        remote_wakeup: cfg!(feature = "remote-wakeup"),
        button_count: DEFAULT_BUTTON_COUNT,
    };

    /// HID report descriptor advertising `button_count` buttons.
    pub const fn report_descriptor(&self) -> [u8; REPORT_DESCRIPTOR_LEN] {
        let buttons = if self.button_count < 1 {
            1
        } else if self.button_count > 3 {
            3
        } else {
            self.button_count
        };
        mouse_report_descriptor(buttons)
    }
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
