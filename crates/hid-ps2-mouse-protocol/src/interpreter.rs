//! PS/2 host command interpreter.
//!
//! [`Ps2MouseEmulator`] answers host commands exactly like a real PS/2 mouse
//! and streams encoded movement packets while reporting is enabled.
//!
//! # Command table
//!
//! | Byte | Command            | Effect                                  | Response                      |
//! |------|--------------------|-----------------------------------------|-------------------------------|
//! | 0xFF | Reset              | type Standard, mode Idle, rate 100      | ACK, 0xAA, device ID          |
//! | 0xF6 | Set Defaults       | type Standard, rate 100, then Disable   | ACK                           |
//! | 0xF5 | Disable Reporting  | mode Idle                               | ACK                           |
//! | 0xEA | Set Stream Mode    | mode Idle                               | ACK                           |
//! | 0xF4 | Enable Reporting   | mode Streaming                          | ACK                           |
//! | 0xF3 | Set Sample Rate    | next byte is the rate argument          | ACK                           |
//! | 0xF2 | Get Device ID      |                                         | ACK, device ID                |
//! | 0xE9 | Status Request     |                                         | ACK, 0x00, 0x02, sample rate  |
//! | *    | anything else      |                                         | ACK                           |
//!
//! Every command other than Set Sample Rate clears the knock accumulator
//! before it is dispatched. The rate argument itself is never dispatched.

use crate::command::HostCommand;
use crate::encoder::{MotionPacket, encode_motion};
use crate::ids::responses;
use crate::knock::observe_rate_argument;
use crate::report::UsbMouseReport;
use crate::sink::ByteSink;
use crate::types::{DeviceState, DeviceType, ReportingMode};
use tracing::{debug, info, trace};

/// What the next host byte means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputState {
    /// The next byte is a command.
    #[default]
    Command,
    /// The next byte is the argument of a pending Set Sample Rate.
    AwaitingRateArgument,
}

/// Emulated PS/2 mouse: device state plus the host-input state machine.
#[derive(Debug, Clone, Default)]
pub struct Ps2MouseEmulator {
    state: DeviceState,
    input: InputState,
}

impl Ps2MouseEmulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    pub fn input_state(&self) -> InputState {
        self.input
    }

    /// The USB mouse was enumerated.
    ///
    /// A real mouse only announces its self test after a host Reset, so
    /// nothing is sent here.
    pub fn on_device_attached(&mut self) {
        info!(device_type = ?self.state.device_type(), "USB mouse attached");
    }

    /// The USB mouse went away. The PS/2 side keeps its negotiated state.
    pub fn on_device_detached(&mut self) {
        info!("USB mouse detached");
    }

    /// Handle one byte received from the PS/2 host.
    ///
    /// `previous_byte` is the byte received before this one; no command in
    /// the emulated set depends on it. Returns the new device type when this
    /// byte completed a capability knock.
    pub fn handle_host_byte<S: ByteSink + ?Sized>(
        &mut self,
        byte: u8,
        previous_byte: u8,
        sink: &mut S,
    ) -> Option<DeviceType> {
        if self.input == InputState::AwaitingRateArgument {
            return self.accept_rate_argument(byte, sink);
        }

        let command = HostCommand::from_byte(byte);
        debug!(
            ?command,
            emulated = command.is_emulated(),
            byte,
            previous_byte,
            "host command"
        );

        if command != HostCommand::SetSampleRate {
            self.state.clear_knock();
        }

        match command {
            HostCommand::Reset => self.reset(sink),
            HostCommand::SetDefaults => self.set_defaults(sink),
            HostCommand::DisableReporting | HostCommand::SetStreamMode => {
                self.disable_reporting(sink);
            }
            HostCommand::EnableReporting => {
                self.state.set_mode(ReportingMode::Streaming);
                send(sink, responses::ACK);
            }
            HostCommand::SetSampleRate => {
                self.input = InputState::AwaitingRateArgument;
                send(sink, responses::ACK);
            }
            HostCommand::GetDeviceId => {
                send(sink, responses::ACK);
                send(sink, self.state.device_type().device_id());
            }
            HostCommand::StatusRequest => {
                send(sink, responses::ACK);
                send(sink, responses::STATUS);
                send(sink, responses::RESOLUTION);
                send(sink, self.state.sample_rate());
            }
            HostCommand::Resend
            | HostCommand::SetRemoteMode
            | HostCommand::SetWrapMode
            | HostCommand::ResetWrapMode
            | HostCommand::ReadData
            | HostCommand::SetResolution
            | HostCommand::SetScaling2To1
            | HostCommand::SetScaling1To1
            | HostCommand::Unknown(_) => {
                trace!(?command, "command acknowledged without effect");
                send(sink, responses::ACK);
            }
        }

        None
    }

    /// Encode and emit one USB report if reporting is enabled.
    ///
    /// Returns the packet that was pushed, or `None` while idle. The sample
    /// rate is not used to pace output: one packet goes out per report.
    pub fn stream_report<S: ByteSink + ?Sized>(
        &self,
        report: &UsbMouseReport,
        sink: &mut S,
    ) -> Option<MotionPacket> {
        if !self.state.is_streaming() {
            return None;
        }

        let packet = encode_motion(report, self.state.device_type());
        for &byte in packet.iter() {
            send(sink, byte);
        }
        Some(packet)
    }

    fn accept_rate_argument<S: ByteSink + ?Sized>(
        &mut self,
        rate: u8,
        sink: &mut S,
    ) -> Option<DeviceType> {
        self.state.store_sample_rate(rate);
        self.input = InputState::Command;
        send(sink, responses::ACK);

        let upgraded = observe_rate_argument(&mut self.state, rate);
        if let Some(device_type) = upgraded {
            info!(
                ?device_type,
                device_id = device_type.device_id(),
                "host negotiated extended mouse capabilities"
            );
        }
        upgraded
    }

    fn reset<S: ByteSink + ?Sized>(&mut self, sink: &mut S) {
        self.state.reset_to_defaults();
        send(sink, responses::ACK);
        send(sink, responses::SELF_TEST_PASSED);
        send(sink, self.state.device_type().device_id());
    }

    fn set_defaults<S: ByteSink + ?Sized>(&mut self, sink: &mut S) {
        self.state.restore_identity();
        self.disable_reporting(sink);
    }

    fn disable_reporting<S: ByteSink + ?Sized>(&mut self, sink: &mut S) {
        self.state.set_mode(ReportingMode::Idle);
        send(sink, responses::ACK);
    }
}

fn send<S: ByteSink + ?Sized>(sink: &mut S, byte: u8) {
    if let Err(dropped) = sink.try_push(byte) {
        trace!(byte = dropped, "transmit queue full, byte dropped");
    }
}
