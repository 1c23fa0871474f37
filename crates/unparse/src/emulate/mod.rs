// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Feature Emulation
//!
//! Rewrites shared by dialects whose backend lacks a standard feature:
//!
//! - [`null_direction`]: NULLS FIRST/LAST through an extra `IS NULL` sort key
//! - [`single_value`]: the SINGLE_VALUE aggregate as a COUNT-driven CASE
//! - [`floor`]: FLOOR(x TO unit) through native bucketing functions

pub mod floor;
pub mod null_direction;
pub mod single_value;

pub use floor::{floor_operands, unparse_bucket_function};
pub use null_direction::{NullDirection, SortDirection, null_direction_with_is_null, order_by_items};
pub use single_value::single_value_case;
