//! USB relative motion → PS/2 movement packet encoding.
//!
//! All functions are pure and allocation-free.
//!
//! # Packet layout
//!
//! ```text
//! Byte 0: 0 0 YS XS 1 M R L      (YS/XS = Y/X sign, M/R/L = buttons)
//! Byte 1: X movement, low 8 bits of a 9-bit two's complement value
//! Byte 2: Y movement, low 8 bits of a 9-bit two's complement value (up = positive)
//! Byte 3: wheel nibble, plus button 4 in bit 4 and button 5 in bit 5 (wheel types only)
//! ```
//!
//! USB reports Y growing downward while PS/2 grows upward, so the Y field is
//! negated on the way through. Magnitudes are handled as 7-bit values with an
//! explicit sign and modular `u8` arithmetic (`0x100 - y` is `0u8.wrapping_sub(y)`),
//! which keeps the output bit-exact with the reference firmware.

use crate::ids::{WHEEL_PACKET_LEN, packet_bits};
use crate::report::{MouseButtons, UsbMouseReport};
use crate::types::DeviceType;
use core::ops::Deref;

const MAGNITUDE: u8 = 0x7F;
const SIGN: u8 = 0x80;
const WHEEL_MAGNITUDE: u8 = 0x07;
const WHEEL_BUTTON_4: u8 = 0x10;
const WHEEL_BUTTON_5: u8 = 0x20;

/// A 3- or 4-byte PS/2 movement packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionPacket {
    bytes: [u8; WHEEL_PACKET_LEN],
    len: usize,
}

impl MotionPacket {
    fn standard(status: u8, x: u8, y: u8) -> Self {
        Self {
            bytes: [status, x, y, 0],
            len: 3,
        }
    }

    fn with_wheel(status: u8, x: u8, y: u8, z: u8) -> Self {
        Self {
            bytes: [status, x, y, z],
            len: 4,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        self.bytes.get(..self.len).unwrap_or_default()
    }

    pub fn status(&self) -> u8 {
        self.bytes[0]
    }

    pub fn x(&self) -> u8 {
        self.bytes[1]
    }

    pub fn y(&self) -> u8 {
        self.bytes[2]
    }

    /// Fourth byte, present only for wheel device types.
    pub fn wheel(&self) -> Option<u8> {
        (self.len == WHEEL_PACKET_LEN).then_some(self.bytes[3])
    }

    pub fn x_negative(&self) -> bool {
        self.status() & packet_bits::X_SIGN != 0
    }

    pub fn y_negative(&self) -> bool {
        self.status() & packet_bits::Y_SIGN != 0
    }
}

impl Deref for MotionPacket {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Encode one USB report for the given capability level.
///
/// No validation beyond masking is performed; every input maps to a packet.
pub fn encode_motion(report: &UsbMouseReport, device_type: DeviceType) -> MotionPacket {
    let buttons = report.raw_buttons();
    let raw_x = report.raw_x();
    let raw_y = report.raw_y();

    let mut status = (buttons & packet_bits::BUTTONS) | packet_bits::ALWAYS_ONE;

    let mut x = raw_x & MAGNITUDE;
    if raw_x & SIGN != 0 {
        status |= packet_bits::X_SIGN;
        // restores the original two's complement byte
        x = x.wrapping_add(SIGN);
    }

    let mut y = raw_y & MAGNITUDE;
    if raw_y & SIGN != 0 {
        y = SIGN.wrapping_sub(y);
    } else if y != 0 {
        status |= packet_bits::Y_SIGN;
        y = 0u8.wrapping_sub(y);
    }

    if !device_type.has_wheel() {
        return MotionPacket::standard(status, x, y);
    }

    let mut z = encode_wheel(report.raw_wheel());
    if device_type == DeviceType::Wheel5Button {
        let extra = MouseButtons::from_bits_truncate(buttons);
        if extra.contains(MouseButtons::BACK) {
            z = z.wrapping_add(WHEEL_BUTTON_4);
        }
        if extra.contains(MouseButtons::FORWARD) {
            z = z.wrapping_add(WHEEL_BUTTON_5);
        }
    }

    MotionPacket::with_wheel(status, x, y, z)
}

/// Fold the USB wheel delta into the low nibble of the fourth packet byte.
fn encode_wheel(raw_wheel: u8) -> u8 {
    let z = raw_wheel & WHEEL_MAGNITUDE;
    if raw_wheel & SIGN != 0 {
        0x08u8.wrapping_sub(z)
    } else if z != 0 {
        0x10u8.wrapping_sub(z)
    } else {
        z
    }
}
