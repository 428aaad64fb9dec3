//! Emulated device identity and mode.

use crate::ids::{DEFAULT_SAMPLE_RATE, STANDARD_PACKET_LEN, WHEEL_PACKET_LEN, device_ids, knocks};
use serde::{Deserialize, Serialize};

/// Capability level the host has negotiated.
///
/// Variants are ordered by capability so upgrades can be checked with `>`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum DeviceType {
    /// Plain 3-button mouse, 3-byte packets.
    #[default]
    Standard,
    /// IntelliMouse with scroll wheel, 4-byte packets.
    Wheel3Button,
    /// IntelliMouse Explorer: wheel plus buttons 4 and 5, 4-byte packets.
    Wheel5Button,
}

impl DeviceType {
    /// Device ID byte returned by Reset and Get Device ID.
    pub fn device_id(self) -> u8 {
        match self {
            Self::Standard => device_ids::STANDARD,
            Self::Wheel3Button => device_ids::WHEEL_3_BUTTON,
            Self::Wheel5Button => device_ids::WHEEL_5_BUTTON,
        }
    }

    /// Whether movement packets carry a fourth (wheel) byte.
    pub fn has_wheel(self) -> bool {
        !matches!(self, Self::Standard)
    }

    /// Movement packet length for this capability level.
    pub fn packet_len(self) -> usize {
        if self.has_wheel() {
            WHEEL_PACKET_LEN
        } else {
            STANDARD_PACKET_LEN
        }
    }
}

/// Whether movement packets are streamed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportingMode {
    /// Reports from the USB side are swallowed.
    #[default]
    Idle,
    /// One packet is emitted per USB report.
    Streaming,
}

/// State of the emulated mouse.
///
/// Mutators keep the invariants the command interpreter relies on:
/// the device type only moves up except through [`DeviceState::reset_to_defaults`],
/// and the knock accumulator never holds more than 24 bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    device_type: DeviceType,
    mode: ReportingMode,
    sample_rate: u8,
    knock: u32,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceState {
    /// Power-on state: standard mouse, idle, 100 samples/s.
    pub const fn new() -> Self {
        Self {
            device_type: DeviceType::Standard,
            mode: ReportingMode::Idle,
            sample_rate: DEFAULT_SAMPLE_RATE,
            knock: 0,
        }
    }

    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    pub fn mode(&self) -> ReportingMode {
        self.mode
    }

    pub fn is_streaming(&self) -> bool {
        self.mode == ReportingMode::Streaming
    }

    /// Last rate requested by the host. Stored and reported, never enforced.
    pub fn sample_rate(&self) -> u8 {
        self.sample_rate
    }

    /// Last three sample-rate arguments, oldest in bits 23..16.
    pub fn knock_accumulator(&self) -> u32 {
        self.knock
    }

    /// Restore type, rate, and mode to their power-on values.
    ///
    /// The knock accumulator is left alone; the interpreter clears it for
    /// every non-rate command before this runs.
    pub fn reset_to_defaults(&mut self) {
        self.device_type = DeviceType::Standard;
        self.sample_rate = DEFAULT_SAMPLE_RATE;
        self.mode = ReportingMode::Idle;
    }

    /// Restore type and rate only, leaving the reporting mode untouched.
    pub fn restore_identity(&mut self) {
        self.device_type = DeviceType::Standard;
        self.sample_rate = DEFAULT_SAMPLE_RATE;
    }

    pub fn set_mode(&mut self, mode: ReportingMode) {
        self.mode = mode;
    }

    pub fn store_sample_rate(&mut self, rate: u8) {
        self.sample_rate = rate;
    }

    /// Shift a rate argument into the accumulator and return the new value.
    pub fn absorb_rate_argument(&mut self, rate: u8) -> u32 {
        self.knock = ((self.knock << 8) | u32::from(rate)) & knocks::MASK;
        self.knock
    }

    pub fn clear_knock(&mut self) {
        self.knock = 0;
    }

    /// Move to a higher capability level. Returns `false` (and changes
    /// nothing) if `next` is not strictly above the current type.
    pub fn upgrade_to(&mut self, next: DeviceType) -> bool {
        if next > self.device_type {
            self.device_type = next;
            true
        } else {
            false
        }
    }

    /// Point-in-time copy for diagnostics.
    pub fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            device_type: self.device_type,
            device_id: self.device_type.device_id(),
            mode: self.mode,
            sample_rate: self.sample_rate,
            knock_accumulator: self.knock,
        }
    }
}

/// Serializable copy of [`DeviceState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub device_type: DeviceType,
    pub device_id: u8,
    pub mode: ReportingMode,
    pub sample_rate: u8,
    pub knock_accumulator: u32,
}
