//! Host command decoding.

use crate::ids::commands;

/// A command byte received from the PS/2 host, resolved once before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCommand {
    /// 0xFF: restore power-on state and run the self test.
    Reset,
    /// 0xF6: restore type and rate, then stop reporting.
    SetDefaults,
    /// 0xF5: stop streaming movement packets.
    DisableReporting,
    /// 0xEA: select stream mode; handled like Disable Reporting.
    SetStreamMode,
    /// 0xF4: start streaming movement packets.
    EnableReporting,
    /// 0xF3: the next byte is a sample rate.
    SetSampleRate,
    /// 0xF2: report the device ID.
    GetDeviceId,
    /// 0xE9: report status, resolution and sample rate.
    StatusRequest,
    /// 0xFE. This and the following variants are recognised but not
    /// emulated: acknowledged with no other effect.
    Resend,
    /// 0xF0.
    SetRemoteMode,
    /// 0xEE.
    SetWrapMode,
    /// 0xEC.
    ResetWrapMode,
    /// 0xEB.
    ReadData,
    /// 0xE8. Its argument byte arrives as a separate command.
    SetResolution,
    /// 0xE7.
    SetScaling2To1,
    /// 0xE6.
    SetScaling1To1,
    /// Any other byte.
    Unknown(u8),
}

impl HostCommand {
    /// Decode a byte received in command position.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            commands::RESET => Self::Reset,
            commands::SET_DEFAULTS => Self::SetDefaults,
            commands::DISABLE_REPORTING => Self::DisableReporting,
            commands::SET_STREAM_MODE => Self::SetStreamMode,
            commands::ENABLE_REPORTING => Self::EnableReporting,
            commands::SET_SAMPLE_RATE => Self::SetSampleRate,
            commands::GET_DEVICE_ID => Self::GetDeviceId,
            commands::STATUS_REQUEST => Self::StatusRequest,
            commands::RESEND => Self::Resend,
            commands::SET_REMOTE_MODE => Self::SetRemoteMode,
            commands::SET_WRAP_MODE => Self::SetWrapMode,
            commands::RESET_WRAP_MODE => Self::ResetWrapMode,
            commands::READ_DATA => Self::ReadData,
            commands::SET_RESOLUTION => Self::SetResolution,
            commands::SET_SCALING_2_1 => Self::SetScaling2To1,
            commands::SET_SCALING_1_1 => Self::SetScaling1To1,
            other => Self::Unknown(other),
        }
    }

    /// Wire byte for this command.
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Reset => commands::RESET,
            Self::SetDefaults => commands::SET_DEFAULTS,
            Self::DisableReporting => commands::DISABLE_REPORTING,
            Self::SetStreamMode => commands::SET_STREAM_MODE,
            Self::EnableReporting => commands::ENABLE_REPORTING,
            Self::SetSampleRate => commands::SET_SAMPLE_RATE,
            Self::GetDeviceId => commands::GET_DEVICE_ID,
            Self::StatusRequest => commands::STATUS_REQUEST,
            Self::Resend => commands::RESEND,
            Self::SetRemoteMode => commands::SET_REMOTE_MODE,
            Self::SetWrapMode => commands::SET_WRAP_MODE,
            Self::ResetWrapMode => commands::RESET_WRAP_MODE,
            Self::ReadData => commands::READ_DATA,
            Self::SetResolution => commands::SET_RESOLUTION,
            Self::SetScaling2To1 => commands::SET_SCALING_2_1,
            Self::SetScaling1To1 => commands::SET_SCALING_1_1,
            Self::Unknown(byte) => byte,
        }
    }

    /// Whether the device emulates this command beyond a bare ACK.
    pub fn is_emulated(self) -> bool {
        matches!(
            self,
            Self::Reset
                | Self::SetDefaults
                | Self::DisableReporting
                | Self::SetStreamMode
                | Self::EnableReporting
                | Self::SetSampleRate
                | Self::GetDeviceId
                | Self::StatusRequest
        )
    }
}

impl From<u8> for HostCommand {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}
