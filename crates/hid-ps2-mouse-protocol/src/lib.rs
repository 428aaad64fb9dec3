//! PS/2 mouse protocol emulation: host command handling, capability
//! negotiation, and USB-to-PS/2 motion packet encoding.
//!
//! This crate is intentionally I/O-free and allocation-free on hot paths.
//! The physical layers on both sides (USB host stack, PS/2 clock/data
//! driver) are collaborators: they feed bytes and reports in, and drain the
//! response stream from whatever [`ByteSink`] the caller provides.
//!
//! ## Features
//! - Full response vocabulary of a standard PS/2 mouse (reset, defaults,
//!   reporting enable/disable, sample rate, device ID, status request)
//! - IntelliMouse "magic knock" negotiation: Standard → 3-button wheel →
//!   5-button wheel
//! - Bit-exact sign/magnitude packing of USB relative motion into 3- and
//!   4-byte PS/2 packets

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod command;
pub mod encoder;
pub mod ids;
pub mod interpreter;
pub mod knock;
pub mod report;
pub mod sink;
pub mod types;

pub use command::HostCommand;
pub use encoder::{MotionPacket, encode_motion};
pub use ids::{commands, responses};
pub use interpreter::{InputState, Ps2MouseEmulator};
pub use knock::observe_rate_argument;
pub use report::{MouseButtons, ReportError, ReportResult, UsbMouseReport};
pub use sink::ByteSink;
pub use types::{DeviceSnapshot, DeviceState, DeviceType, ReportingMode};
