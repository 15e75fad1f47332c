//! Wire layout of the mouse input report and its HID report descriptor.

use bytemuck::{Pod, Zeroable};

/// Length of the input report on the interrupt endpoint.
pub const REPORT_LEN: usize = 4;

/// Button bits wired by default (left and right).
pub const DEFAULT_BUTTON_COUNT: u8 = 2;

/// One of the button bits in the report.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Left,
    Right,
    Middle,
}

impl Button {
    pub const fn mask(self) -> u8 {
        match self {
            Button::Left => Buttons::LEFT.0,
            Button::Right => Buttons::RIGHT.0,
            Button::Middle => Buttons::MIDDLE.0,
        }
    }
}

/// Button bitmask as sent in the first report byte.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const LEFT: Buttons = Buttons(1 << 0);
    pub const RIGHT: Buttons = Buttons(1 << 1);
    pub const MIDDLE: Buttons = Buttons(1 << 2);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    pub const fn with(self, button: Button, pressed: bool) -> Buttons {
        if pressed {
            Buttons(self.0 | button.mask())
        } else {
            Buttons(self.0 & !button.mask())
        }
    }
}

/// `[buttons, dx, dy, reserved]`
///
/// `dx` and `dy` are raw accumulator bytes; the host reads them as
/// two's-complement relative motion. `reserved` occupies the wheel slot of the
/// descriptor and is always zero.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseReport {
    pub buttons: Buttons,
    pub dx: u8,
    pub dy: u8,
    pub reserved: u8,
}

const _: () = assert!(core::mem::size_of::<MouseReport>() == REPORT_LEN);

impl MouseReport {
    pub const fn new(buttons: Buttons, dx: u8, dy: u8) -> Self {
        Self {
            buttons,
            dx,
            dy,
            reserved: 0,
        }
    }

    pub fn to_bytes(&self) -> [u8; REPORT_LEN] {
        bytemuck::cast(*self)
    }

    pub fn from_bytes(bytes: [u8; REPORT_LEN]) -> Self {
        bytemuck::cast(bytes)
    }

    /// Horizontal motion as the host sees it.
    pub const fn dx_signed(&self) -> i8 {
        self.dx as i8
    }

    /// Vertical motion as the host sees it.
    pub const fn dy_signed(&self) -> i8 {
        self.dy as i8
    }
}

pub const REPORT_DESCRIPTOR_LEN: usize = 52;

/// Relative mouse with `buttons` button bits, constant padding up to a full
/// byte, then X, Y and wheel as signed 8-bit relative values.
pub const fn mouse_report_descriptor(buttons: u8) -> [u8; REPORT_DESCRIPTOR_LEN] {
    assert!(buttons >= 1 && buttons <= 3);
    [
        0x05, 0x01, // Usage Page (Generic Desktop)
        0x09, 0x02, // Usage (Mouse)
        0xA1, 0x01, // Collection (Application)
        0x09, 0x01, //   Usage (Pointer)
        0xA1, 0x00, //   Collection (Physical)
        0x05, 0x09, //     Usage Page (Button)
        0x19, 0x01, //     Usage Minimum (1)
        0x29, buttons, //  Usage Maximum
        0x15, 0x00, //     Logical Minimum (0)
        0x25, 0x01, //     Logical Maximum (1)
        0x75, 0x01, //     Report Size (1)
        0x95, buttons, //  Report Count
        0x81, 0x02, //     Input (Data, Var, Abs)
        0x75, 8 - buttons, // Report Size (padding)
        0x95, 0x01, //     Report Count (1)
        0x81, 0x01, //     Input (Cnst, Ary, Abs)
        0x05, 0x01, //     Usage Page (Generic Desktop)
        0x09, 0x30, //     Usage (X)
        0x09, 0x31, //     Usage (Y)
        0x09, 0x38, //     Usage (Wheel)
        0x15, 0x81, //     Logical Minimum (-127)
        0x25, 0x7F, //     Logical Maximum (127)
        0x75, 0x08, //     Report Size (8)
        0x95, 0x03, //     Report Count (3)
        0x81, 0x06, //     Input (Data, Var, Rel)
        0xC0, //         End Collection
        0xC0, //       End Collection
    ]
}

/// Descriptor for the default two-button layout.
pub static MOUSE_REPORT_DESCRIPTOR: [u8; REPORT_DESCRIPTOR_LEN] =
    mouse_report_descriptor(DEFAULT_BUTTON_COUNT);
