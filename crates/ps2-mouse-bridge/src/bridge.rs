//! Shared bridge object handed to the USB stack and the PS/2 PHY driver.
//!
//! The two collaborators call in from different contexts. Each call takes the
//! emulator lock for the whole of its response, so the bytes of one response
//! or one movement packet always land in the transmit queue contiguously.

use crate::config::BridgeConfig;
use crate::counters::{BridgeCounters, BridgeStats};
use crate::error::BridgeResult;
use crate::tx_queue::TxQueue;
use hid_ps2_mouse_protocol::{
    ByteSink, DeviceSnapshot, Ps2MouseEmulator, UsbMouseReport, ids::USB_REPORT_LEN,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// Thread-safe front end for a [`Ps2MouseEmulator`].
///
/// # Example
///
/// ```rust
/// use ps2_mouse_bridge::{BridgeConfig, Ps2MouseBridge};
///
/// # fn main() -> Result<(), ps2_mouse_bridge::BridgeError> {
/// let bridge = Ps2MouseBridge::new(BridgeConfig::default())?;
/// let tx = bridge.tx_queue();
///
/// bridge.on_host_byte(0xFF, 0x00);
/// assert_eq!(tx.drain(), vec![0xFA, 0xAA, 0x00]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Ps2MouseBridge {
    emulator: Mutex<Ps2MouseEmulator>,
    tx: Arc<TxQueue>,
    counters: BridgeCounters,
    config: BridgeConfig,
}

impl Default for Ps2MouseBridge {
    fn default() -> Self {
        Self::from_validated(BridgeConfig::default())
    }
}

impl Ps2MouseBridge {
    /// Create a bridge in the power-on state.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(config: BridgeConfig) -> BridgeResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: BridgeConfig) -> Self {
        debug!(
            tx_queue_capacity = config.tx_queue_capacity,
            trace_wire = config.trace_wire,
            "creating PS/2 mouse bridge"
        );
        Self {
            emulator: Mutex::new(Ps2MouseEmulator::new()),
            tx: Arc::new(TxQueue::with_capacity(config.tx_queue_capacity)),
            counters: BridgeCounters::new(),
            config,
        }
    }

    /// Handle to the transmit queue for the PHY driver.
    #[must_use]
    pub fn tx_queue(&self) -> Arc<TxQueue> {
        Arc::clone(&self.tx)
    }

    /// Configuration the bridge was built with.
    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// USB stack callback: a mouse was enumerated.
    pub fn on_device_attached(&self) {
        self.counters.inc_attach();
        self.emulator.lock().on_device_attached();
    }

    /// USB stack callback: the mouse was removed.
    pub fn on_device_detached(&self) {
        self.counters.inc_detach();
        self.emulator.lock().on_device_detached();
    }

    /// USB stack callback: a boot-protocol report arrived.
    ///
    /// Bytes past the fourth are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is shorter than a mouse report. Nothing is
    /// transmitted in that case.
    pub fn on_motion_report(&self, data: &[u8]) -> BridgeResult<()> {
        self.counters.inc_report_received();
        let report = match UsbMouseReport::try_from_slice(data) {
            Ok(report) => report,
            Err(err) => {
                self.counters.inc_report_rejected();
                warn!(%err, "dropping malformed USB mouse report");
                return Err(err.into());
            }
        };
        self.forward(&report);
        Ok(())
    }

    /// USB stack callback for stacks that already hand over a fixed-size
    /// report. Cannot fail.
    pub fn on_motion_report_raw(&self, data: [u8; USB_REPORT_LEN]) {
        self.counters.inc_report_received();
        self.forward(&UsbMouseReport::from_bytes(data));
    }

    /// PHY callback: one byte arrived from the PS/2 host.
    pub fn on_host_byte(&self, byte: u8, previous_byte: u8) {
        self.counters.inc_host_byte();
        if self.config.trace_wire {
            trace!(byte, previous_byte, "ps2 rx");
        }

        let mut emulator = self.emulator.lock();
        let mut sink = self.sink();
        if let Some(device_type) = emulator.handle_host_byte(byte, previous_byte, &mut sink) {
            self.counters.inc_capability_upgrade();
            info!(?device_type, "bridge now reporting as extended mouse");
        }
    }

    /// Current device state.
    #[must_use]
    pub fn snapshot(&self) -> DeviceSnapshot {
        self.emulator.lock().state().snapshot()
    }

    /// Event counters since creation.
    #[must_use]
    pub fn stats(&self) -> BridgeStats {
        self.counters.snapshot()
    }

    fn forward(&self, report: &UsbMouseReport) {
        let emulator = self.emulator.lock();
        let mut sink = self.sink();
        match emulator.stream_report(report, &mut sink) {
            Some(_) => self.counters.inc_report_encoded(),
            None => self.counters.inc_report_suppressed(),
        }
    }

    fn sink(&self) -> WireSink<'_> {
        WireSink {
            queue: &self.tx,
            trace: self.config.trace_wire,
        }
    }
}

/// Transmit queue adapter that optionally logs every outgoing byte.
struct WireSink<'a> {
    queue: &'a TxQueue,
    trace: bool,
}

impl ByteSink for WireSink<'_> {
    fn try_push(&mut self, byte: u8) -> Result<(), u8> {
        if self.trace {
            trace!(byte, "ps2 tx");
        }
        self.queue.push(byte)
    }
}
