//! Lifecycle Tests
//!
//! Tests verify:
//! - Executor state transitions (Running → Draining → Stopped)
//! - Full drain of queued commands on shutdown
//! - Fail-fast enqueue after shutdown
//! - No reader left blocked across shutdown or drop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use solokv::{Engine, ExecutorState, SoloError};

// =============================================================================
// State Transition Tests
// =============================================================================

#[test]
fn test_new_engine_is_running() {
    let engine = Engine::new().unwrap();

    assert_eq!(engine.state(), ExecutorState::Running);
}

#[test]
fn test_shutdown_stops_executor() {
    let engine = Engine::new().unwrap();

    let report = engine.shutdown().unwrap().expect("first shutdown returns a report");

    assert_eq!(report.commands_applied, 0);
    assert_eq!(report.keys_remaining, 0);
    assert_eq!(engine.state(), ExecutorState::Stopped);
    assert_eq!(engine.pending_commands(), 0);
}

#[test]
fn test_shutdown_twice_is_noop() {
    let engine = Engine::new().unwrap();

    assert!(engine.shutdown().unwrap().is_some());
    assert!(engine.shutdown().unwrap().is_none());
    assert_eq!(engine.state(), ExecutorState::Stopped);
}

#[test]
fn test_concurrent_shutdown_callers_all_wait_for_stop() {
    let engine = Arc::new(Engine::new().unwrap());

    // Give the executor enough work that the join takes a while
    for i in 0..50_000 {
        engine.set(format!("key{}", i), "value").unwrap();
    }

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let report = engine.shutdown().unwrap();
                // Whoever returns, the executor is already gone
                assert_eq!(engine.state(), ExecutorState::Stopped);
                report
            })
        })
        .collect();

    let reports: Vec<_> = handles
        .into_iter()
        .filter_map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].keys_remaining, 50_000);
}

// =============================================================================
// Drain Tests
// =============================================================================

#[test]
fn test_shutdown_applies_all_queued_writes() {
    let engine = Engine::new().unwrap();

    for i in 0..10_000 {
        engine.set(format!("key{}", i), "value").unwrap();
    }

    let report = engine.shutdown().unwrap().unwrap();

    assert_eq!(report.commands_applied, 10_000);
    assert_eq!(report.keys_remaining, 10_000);
}

#[test]
fn test_shutdown_report_counts_evictions_and_deletes() {
    let engine = Engine::new().unwrap();

    engine.set_with_ttl("gone", "v", 0).unwrap();
    engine.set("kept", "v").unwrap();
    engine.set("deleted", "v").unwrap();
    engine.del("deleted").unwrap();
    assert_eq!(engine.get("gone").unwrap(), None);

    let report = engine.shutdown().unwrap().unwrap();

    assert_eq!(report.commands_applied, 5);
    assert_eq!(report.expired_evictions, 1);
    assert_eq!(report.keys_remaining, 1);
}

#[test]
fn test_readers_never_block_across_shutdown() {
    let engine = Arc::new(Engine::new().unwrap());
    engine.set("k", "v").unwrap();

    let started = Arc::new(AtomicBool::new(false));
    let mut handles = vec![];
    for _ in 0..8 {
        let engine = Arc::clone(&engine);
        let started = Arc::clone(&started);
        handles.push(thread::spawn(move || {
            let mut answered = 0u64;
            loop {
                started.store(true, Ordering::SeqCst);
                match engine.get("k") {
                    Ok(value) => {
                        assert_eq!(value, Some("v".to_string()));
                        answered += 1;
                    }
                    Err(SoloError::ShutDown) => return answered,
                    Err(e) => panic!("unexpected error: {}", e),
                }
            }
        }));
    }

    while !started.load(Ordering::SeqCst) {
        thread::yield_now();
    }
    engine.shutdown().unwrap();

    // Every reader returns instead of hanging
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(engine.state(), ExecutorState::Stopped);
}

#[test]
fn test_read_racing_shutdown_is_answered_or_rejected() {
    let engine = Arc::new(Engine::new().unwrap());

    // Keep the executor busy so the read is likely still queued at shutdown
    for i in 0..50_000 {
        engine.set(format!("filler{}", i), "x").unwrap();
    }
    engine.set("target", "answer").unwrap();

    let reader = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || engine.get("target"))
    };
    engine.shutdown().unwrap();

    // Accepted before the shutdown: real answer. Otherwise: fail fast.
    match reader.join().unwrap() {
        Ok(value) => assert_eq!(value, Some("answer".to_string())),
        Err(SoloError::ShutDown) => {}
        Err(e) => panic!("unexpected error: {}", e),
    }
}

// =============================================================================
// Fail-Fast Tests
// =============================================================================

#[test]
fn test_operations_after_shutdown_fail_fast() {
    let engine = Engine::new().unwrap();
    engine.shutdown().unwrap();

    assert!(matches!(engine.set("k", "v"), Err(SoloError::ShutDown)));
    assert!(matches!(engine.set_with_ttl("k", "v", 1), Err(SoloError::ShutDown)));
    assert!(matches!(engine.get("k"), Err(SoloError::ShutDown)));
    assert!(matches!(engine.del("k"), Err(SoloError::ShutDown)));
    assert!(matches!(engine.flush(), Err(SoloError::ShutDown)));
    assert!(matches!(engine.stats(), Err(SoloError::ShutDown)));
    assert!(matches!(engine.len(), Err(SoloError::ShutDown)));
}

// =============================================================================
// Drop Tests
// =============================================================================

#[test]
fn test_drop_with_pending_commands_completes() {
    let engine = Engine::new().unwrap();

    for i in 0..10_000 {
        engine.set(format!("key{}", i), "value").unwrap();
    }

    // Drop drains and joins; the test hangs if it does not
    drop(engine);
}

#[test]
fn test_drop_after_explicit_shutdown() {
    let engine = Engine::new().unwrap();
    engine.set("k", "v").unwrap();
    engine.shutdown().unwrap();

    drop(engine);
}
