// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Enumerables
//!
//! An [`Enumerable`] hands out a fresh pull-based enumerator (an
//! [`Iterator`]) each time one is requested. Creating an enumerator may run
//! arbitrary setup code, including one-time initialization that can fail by
//! returning an error or by panicking.
//!
//! [`wrap_enumerable`] guards that boundary: both kinds of failure come back
//! as an ordinary [`EnumerableError::Initialization`].
//!
//! ```rust
//! use unified_sql_runtime::{BoxError, InitializerError, enumerable_fn, wrap_enumerable};
//!
//! let source = enumerable_fn(|| -> Result<Vec<i32>, BoxError> {
//!     Err(Box::new(InitializerError::with_cause("bad config")))
//! });
//!
//! let err = wrap_enumerable(source).try_enumerator().unwrap_err();
//! assert_eq!(err.to_string(), "bad config");
//! ```

use crate::error::{BoxError, EnumerableError, EnumerableResult, InitializerError, PanicError};
use std::any::Any;
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};
use tracing::warn;

/// Source of enumerators over `Item`
pub trait Enumerable {
    type Item;
    type Enumerator: Iterator<Item = Self::Item>;

    /// Start a new pass over the items
    fn enumerator(&self) -> Result<Self::Enumerator, BoxError>;
}

/// Enumerable backed by a closure producing the items of each pass
#[derive(Debug, Clone)]
pub struct FnEnumerable<F> {
    f: F,
}

/// Build an enumerable whose passes are produced by `f`
pub fn enumerable_fn<F, I>(f: F) -> FnEnumerable<F>
where
    F: Fn() -> Result<I, BoxError>,
    I: IntoIterator,
{
    FnEnumerable { f }
}

impl<F, I> Enumerable for FnEnumerable<F>
where
    F: Fn() -> Result<I, BoxError>,
    I: IntoIterator,
{
    type Item = I::Item;
    type Enumerator = I::IntoIter;

    fn enumerator(&self) -> Result<Self::Enumerator, BoxError> {
        (self.f)().map(IntoIterator::into_iter)
    }
}

/// Enumerable that turns every enumerator setup failure into an
/// [`EnumerableError`]
///
/// Thread-safety is exactly that of the delegate.
#[derive(Debug, Clone)]
pub struct GuardedEnumerable<E> {
    delegate: E,
}

/// Guard enumerator creation of `delegate`
pub fn wrap_enumerable<E: Enumerable>(delegate: E) -> GuardedEnumerable<E> {
    GuardedEnumerable { delegate }
}

impl<E: Enumerable> GuardedEnumerable<E> {
    /// Create an enumerator, catching errors and panics from the delegate
    pub fn try_enumerator(&self) -> EnumerableResult<E::Enumerator> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.delegate.enumerator()));
        let failure = match outcome {
            Ok(Ok(enumerator)) => return Ok(enumerator),
            Ok(Err(err)) => err,
            Err(payload) => from_panic(payload),
        };
        Err(initialization_error(failure))
    }

    pub fn get_ref(&self) -> &E {
        &self.delegate
    }

    pub fn into_inner(self) -> E {
        self.delegate
    }
}

impl<E: Enumerable> Enumerable for GuardedEnumerable<E> {
    type Item = E::Item;
    type Enumerator = E::Enumerator;

    fn enumerator(&self) -> Result<Self::Enumerator, BoxError> {
        self.try_enumerator().map_err(BoxError::from)
    }
}

/// Turn a panic payload into an error value
fn from_panic(payload: Box<dyn Any + Send>) -> BoxError {
    let payload = match payload.downcast::<InitializerError>() {
        Ok(err) => return err,
        Err(payload) => payload,
    };
    let message = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else {
        "enumerator initialization panicked".to_string()
    };
    Box::new(PanicError::new(message))
}

fn initialization_error(failure: BoxError) -> EnumerableError {
    let message = match failure.source() {
        Some(cause) => cause.to_string(),
        None => failure.to_string(),
    };
    warn!(%message, failure = %failure, "Enumerator initialization failed");
    EnumerableError::Initialization {
        message,
        source: failure,
    }
}
