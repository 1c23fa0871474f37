// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialects
//!
//! [`SqlDialect`] is the single seam between the generic renderer and a
//! backend. Every method has a generic default; a dialect overrides only
//! what its backend spells differently or cannot express at all.
//!
//! ## Capability defaults
//!
//! | method                           | default                         |
//! |----------------------------------|---------------------------------|
//! | `supports_char_set`              | `true`                          |
//! | `supports_offset_fetch`          | `true`                          |
//! | `supports_aggregate_function`    | COUNT, SUM, SUM0, MIN, MAX      |
//! | `supports_nested_aggregations`   | `true`                          |
//! | `supports_nulls_first_last`      | `true`                          |
//! | `calendar_policy`                | taken from the context          |
//!
//! ## Rendering hooks
//!
//! `unparse_call` and `unparse_date_time_literal` are consulted for every
//! call and date/time literal node. An override handles the cases it must
//! rewrite and hands everything else to [`generic`](crate::generic), which
//! is also what the default implementations do.

pub mod ansi;
pub mod clickhouse;
pub mod mysql;
pub mod postgresql;

pub use ansi::AnsiSqlDialect;
pub use clickhouse::ClickHouseSqlDialect;
pub use mysql::MySqlDialect;
pub use postgresql::PostgreSqlDialect;

use crate::error::UnparseResult;
use crate::writer::SqlWriter;
use crate::{cast, generic};
use std::fmt;
use tracing::debug;
use unified_sql_ir::{
    CalendarPolicy, DataTypeSpec, DateTimeLiteral, DialectContext, NullCollation, RelDataType,
    SqlCall, SqlKind, SqlNode, SqlTypeName,
};

/// Rendering rules and capabilities of one target backend
pub trait SqlDialect: fmt::Debug + Send + Sync {
    /// The immutable context this dialect was built from
    fn context(&self) -> &DialectContext;

    /// Dialect name for display/logging
    fn name(&self) -> &'static str {
        self.context().database_product().name()
    }

    // =========================================================================
    // Capabilities
    // =========================================================================

    /// Whether `CHARACTER SET` may appear in type specifications
    fn supports_char_set(&self) -> bool {
        true
    }

    /// Whether `OFFSET ... FETCH NEXT ...` is understood
    fn supports_offset_fetch(&self) -> bool {
        true
    }

    /// Whether the backend has a native aggregate for `kind`
    ///
    /// Kinds outside the allow-list, including non-aggregates, return false.
    fn supports_aggregate_function(&self, kind: SqlKind) -> bool {
        matches!(
            kind,
            SqlKind::Count | SqlKind::Sum | SqlKind::Sum0 | SqlKind::Min | SqlKind::Max
        )
    }

    /// Whether an aggregate may take another aggregate as argument
    fn supports_nested_aggregations(&self) -> bool {
        true
    }

    /// Whether `NULLS FIRST` / `NULLS LAST` are understood
    fn supports_nulls_first_last(&self) -> bool {
        true
    }

    fn calendar_policy(&self) -> CalendarPolicy {
        self.context().calendar_policy()
    }

    fn null_collation(&self) -> NullCollation {
        self.context().null_collation()
    }

    // =========================================================================
    // Quoting
    // =========================================================================

    /// Quote an identifier with the context's quote string
    ///
    /// Embedded closing quotes are doubled. Without a quote string the name
    /// is returned unchanged.
    fn quote_identifier(&self, name: &str) -> String {
        match self.context().identifier_quote_string() {
            Some(open) => {
                let close = if open == "[" { "]" } else { open };
                let escaped = name.replace(close, &close.repeat(2));
                format!("{open}{escaped}{close}")
            }
            None => name.to_string(),
        }
    }

    /// Quote a string literal, doubling embedded single quotes
    fn quote_string_literal(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    // =========================================================================
    // Emulation
    // =========================================================================

    /// Extra ORDER BY key that places NULLs as requested
    ///
    /// `None` means no extra key is needed, either because the dialect
    /// spells NULLS FIRST/LAST natively or because its native ordering
    /// already matches.
    fn emulate_null_direction(
        &self,
        _node: &SqlNode,
        _nulls_first: bool,
        _desc: bool,
    ) -> Option<SqlNode> {
        None
    }

    /// Standard type names this dialect spells with a native name in CAST
    fn cast_type_overrides(&self) -> &'static [(SqlTypeName, &'static str)] {
        &[]
    }

    /// Type specification to use when casting to `ty`
    ///
    /// Never fails: types without an override keep their standard spelling.
    fn get_cast_spec(&self, ty: &RelDataType) -> DataTypeSpec {
        match cast::lookup_override(self.cast_type_overrides(), ty.type_name) {
            Some(native) => cast::native_cast_spec(native, ty),
            None => cast::default_cast_spec(self, ty),
        }
    }

    /// Rewrite a `SINGLE_VALUE(x)` aggregate for backends lacking it
    ///
    /// The default returns the call unchanged.
    fn rewrite_single_value_expr(&self, agg_call: &SqlNode) -> UnparseResult<SqlNode> {
        debug!(dialect = self.name(), "SINGLE_VALUE left as is");
        Ok(agg_call.clone())
    }

    // =========================================================================
    // Rendering hooks
    // =========================================================================

    /// Render a call node
    fn unparse_call(
        &self,
        writer: &mut dyn SqlWriter,
        call: &SqlCall,
        left_prec: u32,
        right_prec: u32,
    ) -> UnparseResult<()> {
        generic::unparse_call(self, writer, call, left_prec, right_prec)
    }

    /// Render a date, time or timestamp literal
    fn unparse_date_time_literal(
        &self,
        writer: &mut dyn SqlWriter,
        literal: &DateTimeLiteral,
        _left_prec: u32,
        _right_prec: u32,
    ) -> UnparseResult<()> {
        writer.literal(&literal.to_string());
        Ok(())
    }

    /// Render the OFFSET/FETCH part of a SELECT
    fn unparse_offset_fetch(
        &self,
        writer: &mut dyn SqlWriter,
        offset: Option<&SqlNode>,
        fetch: Option<&SqlNode>,
    ) -> UnparseResult<()> {
        if self.supports_offset_fetch() {
            generic::unparse_fetch_using_ansi(self, writer, offset, fetch)
        } else {
            generic::unparse_fetch_using_limit(self, writer, offset, fetch)
        }
    }
}
