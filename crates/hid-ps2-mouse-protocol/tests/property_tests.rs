//! Property-based tests for the PS/2 mouse protocol crate.
//!
//! Uses proptest with 500 cases to verify invariants on:
//! - movement packet encoding (button bits, always-one bit, X/Y sign handling)
//! - wheel byte folding for the IntelliMouse types
//! - the host command interpreter (every command is acknowledged, rate
//!   arguments are never dispatched, knocks only upgrade)

use hid_ps2_mouse_protocol::{
    DeviceType, InputState, Ps2MouseEmulator, ReportingMode, UsbMouseReport, encode_motion,
};
use proptest::prelude::*;

fn device_type_strategy() -> impl Strategy<Value = DeviceType> {
    prop_oneof![
        Just(DeviceType::Standard),
        Just(DeviceType::Wheel3Button),
        Just(DeviceType::Wheel5Button),
    ]
}

/// Decode a 9-bit two's complement field (sign bit + low byte).
fn nine_bit(sign: bool, low: u8) -> i16 {
    let value = i16::from(low);
    if sign { value - 0x100 } else { value }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // ── Status byte ──────────────────────────────────────────────────────────

    /// Buttons land in bits 0–2 and bit 3 is always set.
    #[test]
    fn prop_status_carries_buttons_and_always_one(
        bytes in any::<[u8; 4]>(),
        device_type in device_type_strategy(),
    ) {
        let packet = encode_motion(&UsbMouseReport::from_bytes(bytes), device_type);
        prop_assert_eq!(packet.status() & 0x07, bytes[0] & 0x07);
        prop_assert_eq!(packet.status() & 0x08, 0x08);
        prop_assert_eq!(packet.status() & 0xC0, 0x00, "overflow bits must stay clear");
    }

    // ── X axis ───────────────────────────────────────────────────────────────

    /// The X byte plus its sign bit reproduce the USB delta exactly.
    #[test]
    fn prop_x_round_trips(bytes in any::<[u8; 4]>()) {
        let report = UsbMouseReport::from_bytes(bytes);
        let packet = encode_motion(&report, DeviceType::Standard);
        prop_assert_eq!(packet.x(), bytes[1]);
        prop_assert_eq!(packet.x_negative(), bytes[1] & 0x80 != 0);
        prop_assert_eq!(
            nine_bit(packet.x_negative(), packet.x()),
            i16::from(report.dx())
        );
    }

    // ── Y axis ───────────────────────────────────────────────────────────────

    /// PS/2 Y is the USB Y delta negated (USB grows downward).
    #[test]
    fn prop_y_is_negated(bytes in any::<[u8; 4]>()) {
        let report = UsbMouseReport::from_bytes(bytes);
        let packet = encode_motion(&report, DeviceType::Standard);
        prop_assert_eq!(
            nine_bit(packet.y_negative(), packet.y()),
            -i16::from(report.dy())
        );
    }

    // ── Packet length ────────────────────────────────────────────────────────

    #[test]
    fn prop_packet_len_follows_device_type(
        bytes in any::<[u8; 4]>(),
        device_type in device_type_strategy(),
    ) {
        let packet = encode_motion(&UsbMouseReport::from_bytes(bytes), device_type);
        prop_assert_eq!(packet.len(), device_type.packet_len());
        prop_assert_eq!(packet.wheel().is_some(), device_type.has_wheel());
    }

    // ── Wheel byte ───────────────────────────────────────────────────────────

    /// Wheel byte never sets bits 6–7; only Wheel5 uses bits 4–5.
    #[test]
    fn prop_wheel_byte_range(
        bytes in any::<[u8; 4]>(),
        device_type in prop_oneof![Just(DeviceType::Wheel3Button), Just(DeviceType::Wheel5Button)],
    ) {
        let packet = encode_motion(&UsbMouseReport::from_bytes(bytes), device_type);
        let z = packet.wheel().unwrap_or(0xFF);
        prop_assert_eq!(z & 0xC0, 0);
        if device_type == DeviceType::Wheel3Button {
            prop_assert!(z <= 0x0F, "wheel3 z {:#04x} exceeds nibble", z);
        } else {
            prop_assert_eq!(z & 0x10 != 0, bytes[0] & 0x08 != 0);
            prop_assert_eq!(z & 0x20 != 0, bytes[0] & 0x10 != 0);
        }
    }

    // ── Interpreter ──────────────────────────────────────────────────────────

    /// Every command byte yields at least an ACK first, and the device type
    /// never changes on a single command byte outside Reset/Set Defaults.
    #[test]
    fn prop_every_command_is_acknowledged(byte in any::<u8>()) {
        let mut emu = Ps2MouseEmulator::new();
        let mut out = Vec::new();
        emu.handle_host_byte(byte, 0, &mut out);
        prop_assert_eq!(out.first().copied(), Some(0xFA));
        prop_assert!(out.len() <= 4);
        prop_assert_eq!(emu.state().device_type(), DeviceType::Standard);
    }

    /// Any byte following 0xF3 is stored as the rate and answered with ACK only.
    #[test]
    fn prop_rate_argument_is_absorbed(rate in any::<u8>()) {
        let mut emu = Ps2MouseEmulator::new();
        let mut out = Vec::new();
        emu.handle_host_byte(0xF3, 0, &mut out);
        prop_assert_eq!(emu.input_state(), InputState::AwaitingRateArgument);
        out.clear();

        emu.handle_host_byte(rate, 0xF3, &mut out);
        prop_assert_eq!(out, vec![0xFA]);
        prop_assert_eq!(emu.state().sample_rate(), rate);
        prop_assert_eq!(emu.input_state(), InputState::Command);
        prop_assert_eq!(emu.state().mode(), ReportingMode::Idle);
    }

    /// Arbitrary host traffic only ever moves the type upward, unless a
    /// Reset or Set Defaults was seen.
    #[test]
    fn prop_device_type_monotonic_between_resets(
        traffic in proptest::collection::vec(any::<u8>(), 0..=64usize),
    ) {
        let mut emu = Ps2MouseEmulator::new();
        let mut out = Vec::new();
        let mut prev = 0u8;
        for byte in traffic {
            let was_command = emu.input_state() == InputState::Command;
            let before = emu.state().device_type();
            emu.handle_host_byte(byte, prev, &mut out);
            let after = emu.state().device_type();
            if !(was_command && (byte == 0xFF || byte == 0xF6)) {
                prop_assert!(after >= before, "{:?} -> {:?} on {:#04x}", before, after, byte);
            }
            prev = byte;
        }
    }

    /// No motion bytes are emitted while idle, whatever the report.
    #[test]
    fn prop_idle_emits_nothing(bytes in any::<[u8; 4]>()) {
        let emu = Ps2MouseEmulator::new();
        let mut out = Vec::new();
        prop_assert!(emu.stream_report(&UsbMouseReport::from_bytes(bytes), &mut out).is_none());
        prop_assert!(out.is_empty());
    }
}
