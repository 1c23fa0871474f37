// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect Context
//!
//! This module defines the immutable configuration that describes one target
//! backend: which product it is, how identifiers are quoted, where NULLs sort
//! and how date arithmetic behaves.
//!
//! ## Design
//!
//! A [`DialectContext`] is a plain value. It is built once per backend,
//! starting from [`DialectContext::empty`] and refined with the `with_*`
//! methods, each of which returns a new context:
//!
//! ```rust
//! use unified_sql_ir::{DatabaseProduct, DialectContext, NullCollation};
//!
//! let ctx = DialectContext::empty()
//!     .with_database_product(DatabaseProduct::ClickHouse)
//!     .with_identifier_quote_string("`")
//!     .with_null_collation(NullCollation::Low);
//!
//! assert_eq!(ctx.identifier_quote_string(), Some("`"));
//! ```
//!
//! Two contexts with the same fields are equal; there is no identity beyond
//! the field values.
//!
//! ## Null Collation
//!
//! - `First` / `Last`: NULLs sort first (or last) regardless of direction
//! - `Low`: NULLs behave as the lowest value (first when ascending, last when descending)
//! - `High`: NULLs behave as the highest value (last when ascending, first when descending)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend identity of a dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseProduct {
    /// No particular backend
    Unknown,
    /// Standard SQL, used by the generic rendering
    Ansi,
    /// ClickHouse
    ClickHouse,
    /// MySQL
    MySql,
    /// PostgreSQL
    #[serde(alias = "postgres")]
    PostgreSql,
}

impl DatabaseProduct {
    /// Human readable product name, used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            DatabaseProduct::Unknown => "Unknown",
            DatabaseProduct::Ansi => "ANSI",
            DatabaseProduct::ClickHouse => "ClickHouse",
            DatabaseProduct::MySql => "MySQL",
            DatabaseProduct::PostgreSql => "PostgreSQL",
        }
    }
}

impl fmt::Display for DatabaseProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where NULL values sort relative to non-NULL values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullCollation {
    /// NULLs first regardless of sort direction
    First,
    /// NULLs last regardless of sort direction
    Last,
    /// NULLs sort as the lowest value
    Low,
    /// NULLs sort as the highest value
    High,
}

impl NullCollation {
    /// Whether a native sort already places NULLs where requested
    ///
    /// Returns `true` when sorting in direction `desc` puts NULLs first
    /// exactly when `nulls_first` is set, so no emulation is needed.
    pub fn is_default_order(self, nulls_first: bool, desc: bool) -> bool {
        let asc = !desc;
        let nulls_last = !nulls_first;
        match self {
            NullCollation::First => nulls_first,
            NullCollation::Last => nulls_last,
            NullCollation::Low => (asc && nulls_first) || (desc && nulls_last),
            NullCollation::High => (asc && nulls_last) || (desc && nulls_first),
        }
    }

    /// Whether NULLs come first when sorting in the given direction
    pub fn nulls_first_for(self, desc: bool) -> bool {
        self.is_default_order(true, desc)
    }
}

/// How a backend performs date arithmetic across epoch/calendar boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarPolicy {
    /// No particular policy
    Null,
    /// Julian calendar throughout
    Julian,
    /// Gregorian dates are shifted to the proleptic calendar
    Shift,
}

/// Immutable description of one target backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DialectContext {
    database_product: DatabaseProduct,
    identifier_quote_string: Option<String>,
    null_collation: NullCollation,
    calendar_policy: CalendarPolicy,
}

impl DialectContext {
    /// The starting point for every dialect: unknown product, no quoting,
    /// high null collation
    pub fn empty() -> Self {
        Self {
            database_product: DatabaseProduct::Unknown,
            identifier_quote_string: None,
            null_collation: NullCollation::High,
            calendar_policy: CalendarPolicy::Null,
        }
    }

    pub fn with_database_product(mut self, product: DatabaseProduct) -> Self {
        self.database_product = product;
        self
    }

    pub fn with_identifier_quote_string(mut self, quote: impl Into<String>) -> Self {
        let quote = quote.into();
        self.identifier_quote_string = if quote.is_empty() { None } else { Some(quote) };
        self
    }

    pub fn with_null_collation(mut self, collation: NullCollation) -> Self {
        self.null_collation = collation;
        self
    }

    pub fn with_calendar_policy(mut self, policy: CalendarPolicy) -> Self {
        self.calendar_policy = policy;
        self
    }

    pub fn database_product(&self) -> DatabaseProduct {
        self.database_product
    }

    pub fn identifier_quote_string(&self) -> Option<&str> {
        self.identifier_quote_string.as_deref()
    }

    pub fn null_collation(&self) -> NullCollation {
        self.null_collation
    }

    pub fn calendar_policy(&self) -> CalendarPolicy {
        self.calendar_policy
    }
}

impl Default for DialectContext {
    fn default() -> Self {
        Self::empty()
    }
}
