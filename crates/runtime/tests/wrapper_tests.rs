// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Initialization failure normalization tests

use std::error::Error;
use std::panic::panic_any;
use std::sync::LazyLock;
use std::thread;
use unified_sql_runtime::{
    BoxError, Enumerable, EnumerableError, InitializerError, PanicError, enumerable_fn,
    wrap_enumerable,
};

static BROKEN_TABLE: LazyLock<Vec<i32>> =
    LazyLock::new(|| panic_any(InitializerError::with_cause("bad config")));

fn assert_send_sync<T: Send + Sync>(_: &T) {}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_returned_failure_with_cause() {
    init_tracing();
    let source = enumerable_fn(|| -> Result<Vec<i32>, BoxError> {
        Err(Box::new(InitializerError::with_cause("bad config")))
    });
    let err = wrap_enumerable(source).try_enumerator().unwrap_err();

    assert_eq!(err.to_string(), "bad config");
    let EnumerableError::Initialization { source, .. } = &err;
    assert_eq!(source.to_string(), "initializer failed");
    assert!(source.downcast_ref::<InitializerError>().is_some());
}

#[test]
fn test_cause_chain_reaches_root() {
    let source = enumerable_fn(|| -> Result<Vec<i32>, BoxError> {
        Err(Box::new(InitializerError::with_cause("bad config")))
    });
    let err = wrap_enumerable(source).try_enumerator().unwrap_err();

    let original = err.source().expect("original failure");
    assert_eq!(original.to_string(), "initializer failed");
    let root = original.source().expect("root cause");
    assert_eq!(root.to_string(), "bad config");
}

#[test]
fn test_failure_without_cause_is_the_source() {
    let source = enumerable_fn(|| -> Result<Vec<i32>, BoxError> {
        Err("connection refused".into())
    });
    let err = wrap_enumerable(source).try_enumerator().unwrap_err();

    assert_eq!(err.message(), "connection refused");
    let original = err.into_source();
    assert_eq!(original.to_string(), "connection refused");
    assert!(original.source().is_none());
}

#[test]
fn test_panic_with_initializer_error() {
    init_tracing();
    let source = enumerable_fn(|| -> Result<Vec<i32>, BoxError> {
        panic_any(InitializerError::with_cause("bad config"))
    });
    let err = wrap_enumerable(source).try_enumerator().unwrap_err();

    assert_eq!(err.message(), "bad config");
    assert!(err.into_source().downcast_ref::<InitializerError>().is_some());
}

#[test]
fn test_panic_with_message() {
    init_tracing();
    let source = enumerable_fn(|| -> Result<Vec<i32>, BoxError> {
        panic!("static table missing: {}", "orders")
    });
    let err = wrap_enumerable(source).try_enumerator().unwrap_err();

    assert_eq!(err.message(), "static table missing: orders");
    assert!(err.into_source().downcast_ref::<PanicError>().is_some());
}

#[test]
fn test_lazy_static_initialization_failure() {
    init_tracing();
    let guarded = wrap_enumerable(enumerable_fn(|| Ok::<_, BoxError>(BROKEN_TABLE.clone())));

    let first = guarded.try_enumerator().unwrap_err();
    assert_eq!(first.message(), "bad config");

    // the poisoned static keeps failing, and keeps being caught
    let second = guarded.try_enumerator().unwrap_err();
    assert!(matches!(second, EnumerableError::Initialization { .. }));
}

#[test]
fn test_guarded_enumerable_is_an_enumerable() {
    let guarded = wrap_enumerable(enumerable_fn(|| -> Result<Vec<i32>, BoxError> {
        Err(Box::new(InitializerError::new()))
    }));
    let err = guarded.enumerator().unwrap_err();
    assert_eq!(err.to_string(), "initializer failed");
    assert!(err.downcast_ref::<EnumerableError>().is_some());
}

#[test]
fn test_shared_across_threads() {
    let guarded = wrap_enumerable(enumerable_fn(|| Ok::<_, BoxError>(vec![1, 2, 3])));
    assert_send_sync(&guarded);

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| guarded.try_enumerator().map(|it| it.sum::<i32>())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 6);
        }
    });
}
