// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Unified SQL - Unparsing Layer
//!
//! This crate renders a backend-neutral operator tree
//! ([`unified_sql_ir::SqlNode`]) into SQL text for a specific backend.
//!
//! ## Overview
//!
//! The unparsing layer is responsible for:
//! - Answering capability questions about a backend ([`SqlDialect`])
//! - Translating cast target types into native spellings
//! - Emulating features a backend lacks (NULL ordering, SINGLE_VALUE,
//!   time bucketing)
//! - Rendering calls and literals with correct parenthesization
//!
//! ## Rendering Process
//!
//! ```text
//! SqlNode → SqlDialect::unparse_call ─┬→ dialect override (FLOOR, literals, ...)
//!                                     └→ generic renderer
//!                                              ↓
//!                                         SqlWriter → SQL text
//! ```
//!
//! ## Error Handling Strategy
//!
//! Rendering is all-or-nothing. An input the dialect cannot express is an
//! [`UnparseError`] and aborts the render; there is no partial output.
//!
//! ## Usage
//!
//! ```rust
//! use unified_sql_ir::{DatabaseProduct, SqlKind, SqlLiteral, SqlNode, TimeUnit};
//! use unified_sql_unparse::{registry, to_sql};
//!
//! let floor = SqlKind::Floor.create_call(vec![
//!     SqlNode::identifier("ts"),
//!     SqlNode::literal(SqlLiteral::TimeUnit(TimeUnit::Month)),
//! ]);
//!
//! let clickhouse = registry::dialect_for(DatabaseProduct::ClickHouse).unwrap();
//! assert_eq!(to_sql(clickhouse, &floor).unwrap(), "toStartOfMonth(`ts`)");
//! ```

pub mod cast;
pub mod config;
pub mod dialect;
pub mod emulate;
pub mod error;
pub mod generic;
pub mod registry;
pub mod writer;

// Re-export commonly used types
pub use config::DialectConfig;
pub use dialect::{
    AnsiSqlDialect, ClickHouseSqlDialect, MySqlDialect, PostgreSqlDialect, SqlDialect,
};
pub use emulate::{NullDirection, SortDirection, order_by_items};
pub use error::{ErrorKind, UnparseError, UnparseResult};
pub use registry::{DialectRegistry, dialect_for};
pub use writer::{PrettyWriter, SqlWriter};

use unified_sql_ir::SqlNode;

/// Render a whole tree to SQL text
pub fn to_sql<D: SqlDialect + ?Sized>(dialect: &D, node: &SqlNode) -> UnparseResult<String> {
    let mut writer = PrettyWriter::new();
    generic::unparse_node(dialect, &mut writer, node, 0, 0)?;
    Ok(writer.into_sql())
}
