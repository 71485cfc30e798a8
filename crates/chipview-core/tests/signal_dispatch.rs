//! Integration tests for signal dispatch across shared owners.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chipview_core::Signal;
use parking_lot::Mutex;

#[test]
fn test_shared_signal_reaches_every_owner() {
    let signal = Arc::new(Signal::<u32>::new());
    let total = Arc::new(AtomicUsize::new(0));

    for _ in 0..3 {
        let total = total.clone();
        signal.connect(move |value| {
            total.fetch_add(*value as usize, Ordering::SeqCst);
        });
    }

    signal.emit(5);
    assert_eq!(total.load(Ordering::SeqCst), 15);
}

#[test]
fn test_slot_may_connect_during_emit() {
    let signal = Arc::new(Signal::<()>::new());
    let calls = Arc::new(Mutex::new(Vec::new()));

    let weak = Arc::downgrade(&signal);
    let calls_outer = calls.clone();
    signal.connect(move |_| {
        calls_outer.lock().push("outer");
        if let Some(signal) = weak.upgrade() {
            let calls_inner = calls_outer.clone();
            signal.connect(move |_| calls_inner.lock().push("inner"));
        }
    });

    // The slot connected during the first emit only runs from the second.
    signal.emit(());
    assert_eq!(*calls.lock(), vec!["outer"]);

    signal.emit(());
    assert_eq!(*calls.lock(), vec!["outer", "outer", "inner"]);
}

#[test]
fn test_emit_from_other_thread() {
    let signal = Arc::new(Signal::<String>::new());
    let received = Arc::new(Mutex::new(None));

    let received_clone = received.clone();
    signal.connect(move |text| *received_clone.lock() = Some(text.clone()));

    let emitter = signal.clone();
    std::thread::spawn(move || emitter.emit("from worker".to_string()))
        .join()
        .unwrap();

    assert_eq!(received.lock().as_deref(), Some("from worker"));
}
