//! Integration tests for the memoizers.

#![cfg(feature = "memo")]

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use funclib::memo::{Memoized, memoize, memoize_concurrent, memoize_recursive};
use rstest::rstest;

// =============================================================================
// Memoized
// =============================================================================

#[rstest]
fn repeated_key_invokes_function_once() {
    let calls = Cell::new(0);
    let memoized = memoize(|n: u32| {
        calls.set(calls.get() + 1);
        n * 100
    });

    let results: Vec<u32> = (0..3).map(|_| memoized.call(5)).collect();
    assert_eq!(results, vec![500, 500, 500]);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn distinct_keys_invoke_function_once_each() {
    let calls = Cell::new(0);
    let memoized = memoize(|n: u32| {
        calls.set(calls.get() + 1);
        format!("value-{n}")
    });

    let first = memoized.call(5);
    let second = memoized.call(7);
    let third = memoized.call(5);

    assert_eq!(calls.get(), 2);
    assert_eq!(first, third);
    assert_eq!(second, "value-7");
}

#[rstest]
fn caches_are_independent_per_wrapper() {
    let calls = Cell::new(0);
    let function = |n: u8| {
        calls.set(calls.get() + 1);
        n
    };
    let first = Memoized::new(function);
    let second = Memoized::new(function);

    first.call(1);
    second.call(1);
    assert_eq!(calls.get(), 2);
}

// =============================================================================
// Recursive
// =============================================================================

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(10, 55)]
#[case(50, 12_586_269_025)]
fn recursive_fibonacci(#[case] n: u64, #[case] expected: u64) {
    let fibonacci = memoize_recursive(|recurse: &dyn Fn(u64) -> u64, n: u64| {
        if n < 2 { n } else { recurse(n - 1) + recurse(n - 2) }
    });
    assert_eq!(fibonacci.call(n), expected);
}

#[rstest]
fn recursive_handle_shares_cache_across_top_level_calls() {
    let calls = Cell::new(0);
    let factorial = memoize_recursive(|recurse: &dyn Fn(u32) -> u128, n: u32| {
        calls.set(calls.get() + 1);
        if n == 0 { 1 } else { u128::from(n) * recurse(n - 1) }
    });

    assert_eq!(factorial.call(10), 3_628_800);
    assert_eq!(calls.get(), 11);
    assert_eq!(factorial.call(12), 479_001_600);
    assert_eq!(calls.get(), 13);
}

// =============================================================================
// Concurrent
// =============================================================================

#[rstest]
fn concurrent_callers_compute_each_key_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let memoized = Arc::new(memoize_concurrent(move |n: u64| {
        counter.fetch_add(1, Ordering::SeqCst);
        thread::yield_now();
        n.pow(2)
    }));

    let handles: Vec<_> = (0..8)
        .map(|offset| {
            let memoized = Arc::clone(&memoized);
            thread::spawn(move || (0..32).map(|key| memoized.call((key + offset) % 32)).sum::<u64>())
        })
        .collect();

    let expected: u64 = (0..32_u64).map(|n| n * n).sum();
    for handle in handles {
        assert_eq!(handle.join().expect("worker panicked"), expected);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 32);
    assert_eq!(memoized.len(), 32);
}
