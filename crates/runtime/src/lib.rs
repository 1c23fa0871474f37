// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Unified SQL - Runtime Guards
//!
//! This crate sits at the boundary where a lazily evaluated pipeline is
//! first instantiated. Setup code behind that boundary may fail in ways a
//! caller would not normally be able to handle (a panic during one-time
//! initialization, an initializer whose own message says nothing useful).
//! [`wrap_enumerable`] turns all of them into [`EnumerableError`], keeping
//! the original failure as the error source.

pub mod enumerable;
pub mod error;

// Re-export commonly used types
pub use enumerable::{Enumerable, FnEnumerable, GuardedEnumerable, enumerable_fn, wrap_enumerable};
pub use error::{BoxError, EnumerableError, EnumerableResult, InitializerError, PanicError};
