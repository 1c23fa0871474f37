// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Unified SQL - Intermediate Representation
//!
//! This crate provides the backend-neutral operator tree that the unparser
//! renders into dialect-specific SQL text. The IR is designed to:
//! - Be dialect-agnostic (ClickHouse, MySQL, PostgreSQL, ...)
//! - Be read-only while rendering
//! - Model closed vocabularies (operator kinds, time units, type names,
//!   literal subtypes) as enums so every dialect match is exhaustive
//! - Describe each backend with an immutable [`DialectContext`]

pub mod dialect;
pub mod kind;
pub mod literal;
pub mod node;
pub mod time_unit;
pub mod types;

// Re-export commonly used types
pub use dialect::{CalendarPolicy, DatabaseProduct, DialectContext, NullCollation};
pub use kind::{SqlKind, SqlSyntax};
pub use literal::{DateTimeLiteral, SqlLiteral};
pub use node::{SqlCall, SqlCase, SqlIdentifier, SqlNode, SqlSelect};
pub use time_unit::TimeUnit;
pub use types::{DataTypeSpec, RelDataType, SqlTypeName, TypeNameSpec};
