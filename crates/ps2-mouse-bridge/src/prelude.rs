//! Prelude for ps2-mouse-bridge.
//!
//! Re-exports the bridge types together with the protocol types callers
//! usually need next to them.
//!
//! # Example
//!
//! ```rust
//! use ps2_mouse_bridge::prelude::*;
//!
//! let bridge = Ps2MouseBridge::default();
//! assert_eq!(bridge.snapshot().device_type, DeviceType::Standard);
//! ```

pub use crate::bridge::Ps2MouseBridge;
pub use crate::config::{BridgeConfig, BridgeConfigBuilder};
pub use crate::counters::BridgeStats;
pub use crate::error::{BridgeError, BridgeResult};
pub use crate::tx_queue::{DEFAULT_TX_QUEUE_CAPACITY, TxQueue, TxQueueStats};

pub use hid_ps2_mouse_protocol::{DeviceSnapshot, DeviceType, MouseButtons, ReportingMode};
