//! Atomic event counters for the bridge.
//!
//! Both collaborator call paths bump these without taking the emulator lock.
//! All counters use `Ordering::Relaxed`: they are diagnostics, not
//! synchronization.

use core::sync::atomic::{AtomicU64, Ordering};
use serde::Serialize;

/// Counter snapshot returned by [`BridgeCounters::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BridgeStats {
    /// Bytes received from the PS/2 host.
    pub host_bytes: u64,
    /// Reports delivered by the USB stack (including rejected ones).
    pub reports_received: u64,
    /// Reports turned into movement packets.
    pub reports_encoded: u64,
    /// Reports swallowed because reporting was disabled.
    pub reports_suppressed: u64,
    /// Reports rejected as malformed.
    pub reports_rejected: u64,
    /// USB attach notifications.
    pub attach_events: u64,
    /// USB detach notifications.
    pub detach_events: u64,
    /// Completed capability knocks.
    pub capability_upgrades: u64,
}

/// Lock-free counters behind [`BridgeStats`].
#[derive(Debug, Default)]
pub struct BridgeCounters {
    host_bytes: AtomicU64,
    reports_received: AtomicU64,
    reports_encoded: AtomicU64,
    reports_suppressed: AtomicU64,
    reports_rejected: AtomicU64,
    attach_events: AtomicU64,
    detach_events: AtomicU64,
    capability_upgrades: AtomicU64,
}

impl BridgeCounters {
    /// Create zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            host_bytes: AtomicU64::new(0),
            reports_received: AtomicU64::new(0),
            reports_encoded: AtomicU64::new(0),
            reports_suppressed: AtomicU64::new(0),
            reports_rejected: AtomicU64::new(0),
            attach_events: AtomicU64::new(0),
            detach_events: AtomicU64::new(0),
            capability_upgrades: AtomicU64::new(0),
        }
    }

    /// Count a byte received from the host.
    #[inline]
    pub fn inc_host_byte(&self) {
        self.host_bytes.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a report delivered by the USB stack.
    #[inline]
    pub fn inc_report_received(&self) {
        self.reports_received.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a report sent as a movement packet.
    #[inline]
    pub fn inc_report_encoded(&self) {
        self.reports_encoded.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a report swallowed while reporting is disabled.
    #[inline]
    pub fn inc_report_suppressed(&self) {
        self.reports_suppressed.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a malformed report.
    #[inline]
    pub fn inc_report_rejected(&self) {
        self.reports_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a USB attach notification.
    #[inline]
    pub fn inc_attach(&self) {
        self.attach_events.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a USB detach notification.
    #[inline]
    pub fn inc_detach(&self) {
        self.detach_events.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a completed capability knock.
    #[inline]
    pub fn inc_capability_upgrade(&self) {
        self.capability_upgrades.fetch_add(1, Ordering::Relaxed);
    }

    /// Read all counters. Individual loads are not atomic with each other.
    #[must_use]
    pub fn snapshot(&self) -> BridgeStats {
        BridgeStats {
            host_bytes: self.host_bytes.load(Ordering::Relaxed),
            reports_received: self.reports_received.load(Ordering::Relaxed),
            reports_encoded: self.reports_encoded.load(Ordering::Relaxed),
            reports_suppressed: self.reports_suppressed.load(Ordering::Relaxed),
            reports_rejected: self.reports_rejected.load(Ordering::Relaxed),
            attach_events: self.attach_events.load(Ordering::Relaxed),
            detach_events: self.detach_events.load(Ordering::Relaxed),
            capability_upgrades: self.capability_upgrades.load(Ordering::Relaxed),
        }
    }
}
