//! Bridge configuration.

use crate::error::{BridgeError, BridgeResult};
use crate::tx_queue::DEFAULT_TX_QUEUE_CAPACITY;
use hid_ps2_mouse_protocol::ids::WHEEL_PACKET_LEN;
use serde::{Deserialize, Serialize};

/// Smallest queue that still fits the longest single emission (a 4-byte
/// wheel packet or a 4-byte status response).
pub const MIN_TX_QUEUE_CAPACITY: usize = WHEEL_PACKET_LEN;

/// Largest accepted queue capacity.
pub const MAX_TX_QUEUE_CAPACITY: usize = 4096;

/// Runtime settings for [`crate::Ps2MouseBridge`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Transmit queue capacity in bytes.
    pub tx_queue_capacity: usize,
    /// Log every byte in both directions at `trace` level.
    pub trace_wire: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            tx_queue_capacity: DEFAULT_TX_QUEUE_CAPACITY,
            trace_wire: false,
        }
    }
}

impl BridgeConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the queue capacity is outside
    /// [`MIN_TX_QUEUE_CAPACITY`]..=[`MAX_TX_QUEUE_CAPACITY`].
    pub fn validate(&self) -> BridgeResult<()> {
        if self.tx_queue_capacity < MIN_TX_QUEUE_CAPACITY {
            return Err(BridgeError::invalid_configuration(format!(
                "tx_queue_capacity must be at least {MIN_TX_QUEUE_CAPACITY}, got {}",
                self.tx_queue_capacity
            )));
        }
        if self.tx_queue_capacity > MAX_TX_QUEUE_CAPACITY {
            return Err(BridgeError::invalid_configuration(format!(
                "tx_queue_capacity must be at most {MAX_TX_QUEUE_CAPACITY}, got {}",
                self.tx_queue_capacity
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, has unknown fields, or
    /// fails [`BridgeConfig::validate`].
    pub fn from_json_str(json: &str) -> BridgeResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> BridgeConfigBuilder {
        BridgeConfigBuilder::default()
    }
}

/// Builder for `BridgeConfig`.
#[derive(Debug, Default)]
pub struct BridgeConfigBuilder {
    config: BridgeConfig,
}

impl BridgeConfigBuilder {
    /// Set transmit queue capacity in bytes.
    #[must_use]
    pub fn tx_queue_capacity(mut self, capacity: usize) -> Self {
        self.config.tx_queue_capacity = capacity;
        self
    }

    /// Enable or disable per-byte wire tracing.
    #[must_use]
    pub fn trace_wire(mut self, enabled: bool) -> Self {
        self.config.trace_wire = enabled;
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> BridgeResult<BridgeConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
