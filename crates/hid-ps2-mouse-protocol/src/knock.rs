//! IntelliMouse capability negotiation ("magic knock").
//!
//! A host probes for a wheel by sending three Set Sample Rate commands with
//! the arguments 200, 100, 80 back to back, then reading the device ID. A
//! mouse that already answers as a wheel mouse is probed again with
//! 200, 200, 80 for buttons 4 and 5. Any other command in between breaks the
//! sequence; the interpreter enforces that by clearing the accumulator.

use crate::ids::knocks;
use crate::types::{DeviceState, DeviceType};
use tracing::trace;

/// Feed one accepted sample-rate argument to the detector.
///
/// Returns the new device type if this argument completed a knock.
pub fn observe_rate_argument(state: &mut DeviceState, rate: u8) -> Option<DeviceType> {
    let knock = state.absorb_rate_argument(rate);
    trace!(knock = format_args!("{knock:06x}"), device_type = ?state.device_type(), "knock accumulator");

    let next = match (state.device_type(), knock) {
        (DeviceType::Standard, knocks::WHEEL_3_BUTTON) => DeviceType::Wheel3Button,
        (DeviceType::Wheel3Button, knocks::WHEEL_5_BUTTON) => DeviceType::Wheel5Button,
        _ => return None,
    };

    state.upgrade_to(next).then_some(next)
}
