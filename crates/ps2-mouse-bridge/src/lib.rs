//! # ps2-mouse-bridge
//!
//! Thread-safe glue between a USB host stack, the PS/2 mouse emulator in
//! [`hid_ps2_mouse_protocol`], and a PS/2 physical-layer driver.
//!
//! ## Architecture
//!
//! - [`bridge`] - [`Ps2MouseBridge`], the callback surface for both collaborators
//! - [`tx_queue`] - Bounded lock-free byte queue drained by the PHY
//! - [`counters`] - Atomic event counters
//! - [`config`] - Validated runtime configuration
//!
//! ## Usage
//!
//! ```rust
//! use ps2_mouse_bridge::prelude::*;
//!
//! # fn main() -> Result<(), BridgeError> {
//! let bridge = Ps2MouseBridge::new(BridgeConfig::builder().tx_queue_capacity(32).build()?)?;
//! let tx = bridge.tx_queue();
//!
//! // PHY receive path
//! bridge.on_host_byte(0xF4, 0x00);
//!
//! // USB interrupt-in path
//! bridge.on_motion_report(&[0x01, 0x05, 0x00, 0x00])?;
//!
//! // PHY transmit path
//! assert_eq!(tx.drain(), vec![0xFA, 0x09, 0x05, 0x00]);
//! # Ok(())
//! # }
//! ```

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bridge;
pub mod config;
pub mod counters;
pub mod error;
pub mod prelude;
pub mod tx_queue;

pub use bridge::Ps2MouseBridge;
pub use config::{BridgeConfig, BridgeConfigBuilder, MAX_TX_QUEUE_CAPACITY, MIN_TX_QUEUE_CAPACITY};
pub use counters::{BridgeCounters, BridgeStats};
pub use error::{BridgeError, BridgeResult};
pub use tx_queue::{DEFAULT_TX_QUEUE_CAPACITY, TxQueue, TxQueueStats};
