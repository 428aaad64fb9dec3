//! Concurrency tests for ps2-mouse-bridge.
//!
//! The USB stack and the PS/2 PHY call in from different threads; these tests
//! check that responses and packets never interleave on the wire.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use ps2_mouse_bridge::{BridgeConfig, BridgeError, MAX_TX_QUEUE_CAPACITY, Ps2MouseBridge, TxQueue};

const ID_RESPONSE: [u8; 2] = [0xFA, 0x00];
const IDLE_PACKET: [u8; 3] = [0x08, 0x00, 0x00];

/// Split the wire into whole responses, failing on any torn sequence.
fn tokenize(wire: &[u8]) -> Option<(usize, usize)> {
    let (mut ids, mut packets) = (0, 0);
    let mut rest = wire;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(&ID_RESPONSE) {
            ids += 1;
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(&IDLE_PACKET) {
            packets += 1;
            rest = tail;
        } else {
            return None;
        }
    }
    Some((ids, packets))
}

fn streaming_bridge() -> Result<Arc<Ps2MouseBridge>, BridgeError> {
    let config = BridgeConfig::builder()
        .tx_queue_capacity(MAX_TX_QUEUE_CAPACITY)
        .build()?;
    let bridge = Ps2MouseBridge::new(config)?;
    bridge.on_host_byte(0xF4, 0x00);
    let _ = bridge.tx_queue().drain();
    Ok(Arc::new(bridge))
}

#[test]
fn test_host_commands_and_reports_do_not_interleave() -> Result<(), BridgeError> {
    let bridge = streaming_bridge()?;
    let iterations: usize = 500;

    let host = {
        let bridge = Arc::clone(&bridge);
        thread::spawn(move || {
            for _ in 0..iterations {
                bridge.on_host_byte(0xF2, 0xF2);
            }
        })
    };
    let usb = {
        let bridge = Arc::clone(&bridge);
        thread::spawn(move || {
            for _ in 0..iterations {
                bridge.on_motion_report_raw([0x00; 4]);
            }
        })
    };

    assert!(host.join().is_ok(), "host thread panicked unexpectedly");
    assert!(usb.join().is_ok(), "usb thread panicked unexpectedly");

    let wire = bridge.tx_queue().drain();
    assert_eq!(tokenize(&wire), Some((iterations, iterations)));
    assert_eq!(bridge.tx_queue().dropped(), 0);
    Ok(())
}

#[test]
fn test_phy_drains_while_producers_run() -> Result<(), BridgeError> {
    let bridge = streaming_bridge()?;
    let tx: Arc<TxQueue> = bridge.tx_queue();
    let done = Arc::new(AtomicBool::new(false));
    let producers: usize = 4;
    // total output stays under the queue capacity, so nothing may be dropped
    let reports_per_producer: usize = 300;
    let baseline = tx.stats().transmitted;

    let phy = {
        let tx = Arc::clone(&tx);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut wire = Vec::new();
            loop {
                match tx.pop() {
                    Some(byte) => wire.push(byte),
                    None if done.load(Ordering::Acquire) && tx.is_empty() => break,
                    None => thread::yield_now(),
                }
            }
            wire
        })
    };

    let handles: Vec<_> = (0..producers)
        .map(|_| {
            let bridge = Arc::clone(&bridge);
            thread::spawn(move || {
                for _ in 0..reports_per_producer {
                    bridge.on_motion_report_raw([0x00; 4]);
                }
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().is_ok(), "thread panicked unexpectedly");
    }
    done.store(true, Ordering::Release);

    let wire = phy.join().unwrap_or_default();
    let total = producers * reports_per_producer;

    assert!(total * IDLE_PACKET.len() <= MAX_TX_QUEUE_CAPACITY);
    assert_eq!(tx.dropped(), 0);
    assert_eq!(bridge.stats().reports_encoded, total as u64);
    assert_eq!(tx.stats().transmitted - baseline, wire.len() as u64);
    assert_eq!(tokenize(&wire), Some((0, total)));
    Ok(())
}

#[test]
fn test_concurrent_counters_are_exact() {
    let bridge = Arc::new(Ps2MouseBridge::default());
    let threads: u64 = 8;
    let calls: u64 = 1_000;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let bridge = Arc::clone(&bridge);
            thread::spawn(move || {
                for _ in 0..calls {
                    bridge.on_device_attached();
                    bridge.on_motion_report_raw([0x01, 0x01, 0x01, 0x00]);
                }
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().is_ok(), "thread panicked unexpectedly");
    }

    let stats = bridge.stats();
    assert_eq!(stats.attach_events, threads * calls);
    assert_eq!(stats.reports_received, threads * calls);
    assert_eq!(stats.reports_suppressed, threads * calls);
}
