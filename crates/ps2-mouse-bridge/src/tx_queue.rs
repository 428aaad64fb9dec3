//! Lock-free transmit queue between the emulator and the PS/2 physical layer.
//!
//! Bytes are pushed from the USB report path and the host command path and
//! popped by the PHY driver as the host clocks them out.
//!
//! # RT Safety
//!
//! `push`, `push_drop`, and `pop` are RT-safe:
//! - Bounded capacity (no allocation after construction)
//! - Lock-free implementation
//! - Drop on overflow, never block
//!
//! # Overflow Behavior
//!
//! When the queue is full, new bytes are dropped and counted. A PS/2 host
//! that stops clocking (inhibits the link) for long enough will lose
//! movement packets rather than stall the USB side.

use core::sync::atomic::{AtomicU64, Ordering};
use crossbeam::queue::ArrayQueue;
use hid_ps2_mouse_protocol::ByteSink;
use serde::Serialize;

/// Default transmit queue capacity in bytes.
pub const DEFAULT_TX_QUEUE_CAPACITY: usize = 64;

/// Bounded MPMC byte queue headed for the PS/2 host.
///
/// # Example
///
/// ```rust
/// use ps2_mouse_bridge::TxQueue;
///
/// let queue = TxQueue::with_capacity(4);
/// assert!(queue.push(0xFA).is_ok());
///
/// // PHY side
/// assert_eq!(queue.pop(), Some(0xFA));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Debug)]
pub struct TxQueue {
    bytes: ArrayQueue<u8>,
    enqueued: AtomicU64,
    dropped: AtomicU64,
    transmitted: AtomicU64,
}

impl Default for TxQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl TxQueue {
    /// Create a queue with [`DEFAULT_TX_QUEUE_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TX_QUEUE_CAPACITY)
    }

    /// Create a queue holding at most `capacity` bytes.
    ///
    /// # Panics
    ///
    /// Panics if capacity is 0. [`crate::BridgeConfig::validate`] rejects
    /// such capacities before a bridge builds its queue.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: ArrayQueue::new(capacity),
            enqueued: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
            transmitted: AtomicU64::new(0),
        }
    }

    /// Push a byte.
    ///
    /// # Errors
    ///
    /// Returns `Err(byte)` if the queue is full. The byte is counted as dropped.
    #[inline]
    pub fn push(&self, byte: u8) -> Result<(), u8> {
        match self.bytes.push(byte) {
            Ok(()) => {
                self.enqueued.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            Err(rejected) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                Err(rejected)
            }
        }
    }

    /// Push a byte, dropping it on overflow.
    #[inline]
    pub fn push_drop(&self, byte: u8) {
        let _ = self.push(byte);
    }

    /// Take the next byte for the wire. Called by the PHY driver.
    #[inline]
    pub fn pop(&self) -> Option<u8> {
        let byte = self.bytes.pop();
        if byte.is_some() {
            self.transmitted.fetch_add(1, Ordering::Relaxed);
        }
        byte
    }

    /// Pop everything currently queued.
    ///
    /// **NOT RT-safe**. Allocates a vector.
    pub fn drain(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.bytes.len());
        while let Some(byte) = self.pop() {
            out.push(byte);
        }
        out
    }

    /// Bytes currently queued.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether no bytes are queued.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the next push would be dropped.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.bytes.is_full()
    }

    /// Maximum number of queued bytes.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Number of bytes dropped on overflow since creation.
    #[inline]
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Snapshot of queue occupancy and counters.
    #[must_use]
    pub fn stats(&self) -> TxQueueStats {
        TxQueueStats {
            queued: self.bytes.len(),
            capacity: self.bytes.capacity(),
            enqueued: self.enqueued.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            transmitted: self.transmitted.load(Ordering::Relaxed),
        }
    }
}

impl ByteSink for &TxQueue {
    #[inline]
    fn try_push(&mut self, byte: u8) -> Result<(), u8> {
        self.push(byte)
    }
}

impl ByteSink for TxQueue {
    #[inline]
    fn try_push(&mut self, byte: u8) -> Result<(), u8> {
        self.push(byte)
    }
}

/// Statistics about transmit queue usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TxQueueStats {
    /// Bytes currently waiting for the PHY.
    pub queued: usize,
    /// Maximum number of bytes the queue holds.
    pub capacity: usize,
    /// Bytes accepted since creation.
    pub enqueued: u64,
    /// Bytes dropped because the queue was full.
    pub dropped: u64,
    /// Bytes handed to the PHY.
    pub transmitted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let queue = TxQueue::with_capacity(8);
        for byte in [0xFA, 0xAA, 0x00] {
            assert!(queue.push(byte).is_ok());
        }
        assert_eq!(queue.drain(), vec![0xFA, 0xAA, 0x00]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_overflow_drops_and_counts() {
        let queue = TxQueue::with_capacity(2);
        assert!(queue.push(1).is_ok());
        assert!(queue.push(2).is_ok());
        assert!(queue.is_full());
        assert_eq!(queue.push(3), Err(3));
        queue.push_drop(4);

        let stats = queue.stats();
        assert_eq!(stats.enqueued, 2);
        assert_eq!(stats.dropped, 2);
        assert_eq!(stats.queued, 2);
        assert_eq!(queue.drain(), vec![1, 2]);
    }

    #[test]
    fn test_pop_counts_transmitted() {
        let queue = TxQueue::with_capacity(4);
        queue.push_drop(0x08);
        queue.push_drop(0x00);
        assert_eq!(queue.pop(), Some(0x08));
        assert_eq!(queue.pop(), Some(0x00));
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.stats().transmitted, 2);
    }

    #[test]
    fn test_byte_sink_by_reference() {
        let queue = TxQueue::with_capacity(1);
        let mut sink = &queue;
        assert_eq!(sink.try_push(0xFA), Ok(()));
        assert_eq!(sink.try_push(0xFA), Err(0xFA));
        assert_eq!(queue.dropped(), 1);
    }

    #[test]
    fn test_default_capacity() {
        let queue = TxQueue::default();
        assert_eq!(queue.capacity(), DEFAULT_TX_QUEUE_CAPACITY);
    }
}
