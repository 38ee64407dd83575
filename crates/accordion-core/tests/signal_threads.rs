//! Integration tests for signals shared across threads.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use accordion_core::Signal;

#[test]
fn test_emit_from_multiple_threads() {
    let signal = Arc::new(Signal::<usize>::new());
    let total = Arc::new(AtomicUsize::new(0));

    let total_clone = total.clone();
    signal.connect(move |&n| {
        total_clone.fetch_add(n, Ordering::SeqCst);
    });

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let signal = signal.clone();
            thread::spawn(move || signal.emit(n))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(total.load(Ordering::SeqCst), 10);
}

#[test]
fn test_emit_with_subscriber_installed() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let signal = Signal::<u64>::new();
    let seen = Arc::new(AtomicUsize::new(0));

    let seen_clone = seen.clone();
    signal.connect(move |_| {
        seen_clone.fetch_add(1, Ordering::SeqCst);
    });

    signal.emit(1);
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}
