//! PS/2 mouse wire vocabulary: command bytes, response bytes, and packet bits.

#![deny(static_mut_refs)]

/// Command bytes a PS/2 host may send to the mouse.
pub mod commands {
    /// Reset and run the power-on self test.
    pub const RESET: u8 = 0xFF;
    /// Resend the last packet (not emulated; acknowledged only).
    pub const RESEND: u8 = 0xFE;
    /// Restore default settings and disable reporting.
    pub const SET_DEFAULTS: u8 = 0xF6;
    /// Disable data reporting.
    pub const DISABLE_REPORTING: u8 = 0xF5;
    /// Enable data reporting (stream packets).
    pub const ENABLE_REPORTING: u8 = 0xF4;
    /// Set sample rate; the next byte is the rate argument.
    pub const SET_SAMPLE_RATE: u8 = 0xF3;
    /// Report the device ID byte.
    pub const GET_DEVICE_ID: u8 = 0xF2;
    /// Enter remote (polled) mode (not emulated).
    pub const SET_REMOTE_MODE: u8 = 0xF0;
    /// Enter echo/wrap mode (not emulated).
    pub const SET_WRAP_MODE: u8 = 0xEE;
    /// Leave echo/wrap mode (not emulated).
    pub const RESET_WRAP_MODE: u8 = 0xEC;
    /// Poll a single movement packet in remote mode (not emulated).
    pub const READ_DATA: u8 = 0xEB;
    /// Enter stream mode.
    pub const SET_STREAM_MODE: u8 = 0xEA;
    /// Report status, resolution, and sample rate.
    pub const STATUS_REQUEST: u8 = 0xE9;
    /// Set resolution (not emulated; no argument is consumed).
    pub const SET_RESOLUTION: u8 = 0xE8;
    /// Set 2:1 scaling (not emulated).
    pub const SET_SCALING_2_1: u8 = 0xE7;
    /// Set 1:1 scaling (not emulated).
    pub const SET_SCALING_1_1: u8 = 0xE6;
}

/// Bytes the mouse sends back to the host outside of movement packets.
pub mod responses {
    /// Acknowledge. Every host command is acknowledged.
    pub const ACK: u8 = 0xFA;
    /// Basic assurance test passed (follows ACK after reset).
    pub const SELF_TEST_PASSED: u8 = 0xAA;
    /// Status byte returned by Status Request.
    ///
    /// Bit 6 remote mode, bit 5 reporting enabled, bit 4 2:1 scaling,
    /// bits 2..0 middle/right/left buttons. The emulation always reports 0.
    pub const STATUS: u8 = 0x00;
    /// Resolution byte returned by Status Request (4 counts/mm).
    pub const RESOLUTION: u8 = 0x02;
}

/// Device ID bytes, one per negotiated capability level.
pub mod device_ids {
    /// Standard 3-button mouse without wheel.
    pub const STANDARD: u8 = 0x00;
    /// IntelliMouse: 3 buttons plus scroll wheel.
    pub const WHEEL_3_BUTTON: u8 = 0x03;
    /// IntelliMouse Explorer: 5 buttons plus scroll wheel.
    pub const WHEEL_5_BUTTON: u8 = 0x04;
}

/// Sample-rate "knock" signatures, as the last three rate arguments packed
/// big-endian into 24 bits.
pub mod knocks {
    /// Rates 200, 100, 80: enable the scroll wheel.
    pub const WHEEL_3_BUTTON: u32 = 0x00C8_6450;
    /// Rates 200, 200, 80: enable buttons 4 and 5.
    pub const WHEEL_5_BUTTON: u32 = 0x00C8_C850;
    /// The accumulator keeps the last three arguments only.
    pub const MASK: u32 = 0x00FF_FFFF;
}

/// Bit layout of the first byte of a PS/2 movement packet.
pub mod packet_bits {
    /// Left, right, and middle button state.
    pub const BUTTONS: u8 = 0x07;
    /// Always set in a valid movement packet.
    pub const ALWAYS_ONE: u8 = 0x08;
    /// X movement is negative.
    pub const X_SIGN: u8 = 0x10;
    /// Y movement is negative (PS/2 Y grows upward).
    pub const Y_SIGN: u8 = 0x20;
}

/// Sample rate the device reports after power-on, Reset, or Set Defaults.
pub const DEFAULT_SAMPLE_RATE: u8 = 100;

/// Length of the USB relative mouse report consumed by the encoder.
pub const USB_REPORT_LEN: usize = 4;

/// Length of a standard (wheel-less) PS/2 movement packet.
pub const STANDARD_PACKET_LEN: usize = 3;

/// Length of an IntelliMouse movement packet.
pub const WHEEL_PACKET_LEN: usize = 4;
