//! USB relative mouse input reports.
//!
//! The encoder consumes the 4-byte boot-style layout:
//!
//! ```text
//! Byte 0: buttons (bit 0 left, bit 1 right, bit 2 middle, bit 3 back, bit 4 forward)
//! Byte 1: X delta, two's complement, positive = right
//! Byte 2: Y delta, two's complement, positive = down
//! Byte 3: wheel delta, two's complement
//! ```

use crate::ids::USB_REPORT_LEN;
use bitflags::bitflags;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    #[error("Invalid report size: expected {expected}, got {actual}")]
    InvalidReportSize { expected: usize, actual: usize },
}

pub type ReportResult<T> = Result<T, ReportError>;

bitflags! {
    /// Button bits of report byte 0.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const MIDDLE = 1 << 2;
        const BACK = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

/// One USB relative mouse report, kept as raw wire bytes so the encoder can
/// work on them bit-exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UsbMouseReport {
    buttons: u8,
    x: u8,
    y: u8,
    wheel: u8,
}

impl UsbMouseReport {
    pub const fn from_bytes(bytes: [u8; USB_REPORT_LEN]) -> Self {
        let [buttons, x, y, wheel] = bytes;
        Self {
            buttons,
            x,
            y,
            wheel,
        }
    }

    /// Parse a report delivered by the USB stack.
    ///
    /// Reports longer than four bytes are accepted and the tail ignored;
    /// some mice pad their boot reports.
    pub fn try_from_slice(data: &[u8]) -> ReportResult<Self> {
        match data {
            [buttons, x, y, wheel, ..] => Ok(Self::from_bytes([*buttons, *x, *y, *wheel])),
            _ => Err(ReportError::InvalidReportSize {
                expected: USB_REPORT_LEN,
                actual: data.len(),
            }),
        }
    }

    /// Build a report from signed deltas.
    pub fn from_motion(buttons: MouseButtons, dx: i8, dy: i8, wheel: i8) -> Self {
        Self {
            buttons: buttons.bits(),
            x: dx.to_ne_bytes()[0],
            y: dy.to_ne_bytes()[0],
            wheel: wheel.to_ne_bytes()[0],
        }
    }

    pub const fn to_bytes(self) -> [u8; USB_REPORT_LEN] {
        [self.buttons, self.x, self.y, self.wheel]
    }

    /// Raw button byte, including any bits above button 5.
    pub fn raw_buttons(&self) -> u8 {
        self.buttons
    }

    pub fn buttons(&self) -> MouseButtons {
        MouseButtons::from_bits_truncate(self.buttons)
    }

    pub fn raw_x(&self) -> u8 {
        self.x
    }

    pub fn raw_y(&self) -> u8 {
        self.y
    }

    pub fn raw_wheel(&self) -> u8 {
        self.wheel
    }

    pub fn dx(&self) -> i8 {
        i8::from_ne_bytes([self.x])
    }

    pub fn dy(&self) -> i8 {
        i8::from_ne_bytes([self.y])
    }

    pub fn wheel(&self) -> i8 {
        i8::from_ne_bytes([self.wheel])
    }
}

impl From<[u8; USB_REPORT_LEN]> for UsbMouseReport {
    fn from(bytes: [u8; USB_REPORT_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}
