// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # ClickHouse Dialect
//!
//! ClickHouse differs from standard SQL in ways that matter for generated
//! queries:
//!
//! - no `CHARACTER SET`, no `OFFSET ... FETCH`, no nested aggregates
//! - NULLs sort low and NULLS FIRST/LAST is emulated with `IS NULL` keys
//! - `SINGLE_VALUE` is rewritten into a COUNT-driven CASE
//! - `FLOOR(ts TO unit)` maps onto bucketing functions such as
//!   `toStartOfMonth(ts)`
//! - date/time literals are function calls: `toDate('2024-01-15')`
//! - `VARCHAR` and `INTEGER` are spelled `String` and `Int32` in CAST

use super::SqlDialect;
use crate::emulate::{
    floor_operands, null_direction_with_is_null, single_value_case, unparse_bucket_function,
};
use crate::error::{UnparseError, UnparseResult};
use crate::generic;
use crate::writer::SqlWriter;
use unified_sql_ir::{
    CalendarPolicy, DatabaseProduct, DateTimeLiteral, DialectContext, NullCollation, SqlCall,
    SqlKind, SqlNode, SqlTypeName, TimeUnit,
};

const CAST_TYPES: &[(SqlTypeName, &str)] = &[
    (SqlTypeName::Varchar, "String"),
    (SqlTypeName::Integer, "Int32"),
];

/// ClickHouse SQL dialect
#[derive(Debug, Clone)]
pub struct ClickHouseSqlDialect {
    context: DialectContext,
}

impl ClickHouseSqlDialect {
    pub fn new(context: DialectContext) -> Self {
        Self { context }
    }

    /// Backtick quoting, NULLs sorting low
    pub fn default_context() -> DialectContext {
        DialectContext::empty()
            .with_database_product(DatabaseProduct::ClickHouse)
            .with_identifier_quote_string("`")
            .with_null_collation(NullCollation::Low)
    }

    /// Bucketing function implementing `FLOOR(x TO unit)`
    pub fn floor_function(unit: TimeUnit) -> Option<&'static str> {
        match unit {
            TimeUnit::Year => Some("toStartOfYear"),
            TimeUnit::Month => Some("toStartOfMonth"),
            TimeUnit::Week => Some("toMonday"),
            TimeUnit::Day => Some("toDate"),
            TimeUnit::Hour => Some("toStartOfHour"),
            TimeUnit::Minute => Some("toStartOfMinute"),
            TimeUnit::Quarter
            | TimeUnit::Second
            | TimeUnit::Millisecond
            | TimeUnit::Microsecond => None,
        }
    }

    fn unparse_floor(&self, writer: &mut dyn SqlWriter, call: &SqlCall) -> UnparseResult<()> {
        let (value, unit) = floor_operands(call)?;
        let function =
            Self::floor_function(unit).ok_or_else(|| UnparseError::UnsupportedTimeUnit {
                dialect: self.name().to_string(),
                unit,
            })?;
        unparse_bucket_function(self, writer, function, value)
    }
}

impl Default for ClickHouseSqlDialect {
    fn default() -> Self {
        Self::new(Self::default_context())
    }
}

impl SqlDialect for ClickHouseSqlDialect {
    fn context(&self) -> &DialectContext {
        &self.context
    }

    fn supports_char_set(&self) -> bool {
        false
    }

    fn supports_offset_fetch(&self) -> bool {
        false
    }

    fn supports_aggregate_function(&self, kind: SqlKind) -> bool {
        matches!(
            kind,
            SqlKind::Count
                | SqlKind::Sum
                | SqlKind::Sum0
                | SqlKind::Min
                | SqlKind::Max
                | SqlKind::SingleValue
        )
    }

    fn supports_nested_aggregations(&self) -> bool {
        false
    }

    fn supports_nulls_first_last(&self) -> bool {
        false
    }

    fn calendar_policy(&self) -> CalendarPolicy {
        CalendarPolicy::Shift
    }

    fn emulate_null_direction(
        &self,
        node: &SqlNode,
        nulls_first: bool,
        desc: bool,
    ) -> Option<SqlNode> {
        null_direction_with_is_null(self, node, nulls_first, desc)
    }

    fn cast_type_overrides(&self) -> &'static [(SqlTypeName, &'static str)] {
        CAST_TYPES
    }

    fn rewrite_single_value_expr(&self, agg_call: &SqlNode) -> UnparseResult<SqlNode> {
        single_value_case(self, agg_call)
    }

    fn unparse_call(
        &self,
        writer: &mut dyn SqlWriter,
        call: &SqlCall,
        left_prec: u32,
        right_prec: u32,
    ) -> UnparseResult<()> {
        match call.kind() {
            SqlKind::Floor if call.operand_count() == 2 => self.unparse_floor(writer, call),
            _ => generic::unparse_call(self, writer, call, left_prec, right_prec),
        }
    }

    fn unparse_date_time_literal(
        &self,
        writer: &mut dyn SqlWriter,
        literal: &DateTimeLiteral,
        _left_prec: u32,
        _right_prec: u32,
    ) -> UnparseResult<()> {
        let function = match literal {
            DateTimeLiteral::Date(_) => "toDate",
            DateTimeLiteral::Timestamp { .. } => "toDateTime",
            DateTimeLiteral::Time { .. } => "toTime",
            DateTimeLiteral::TimestampWithLocalTimeZone { .. } => {
                return Err(UnparseError::UnsupportedDateTimeLiteral {
                    dialect: self.name().to_string(),
                    literal: literal.to_string(),
                });
            }
        };
        writer.print(function);
        let frame = writer.start_list("(", ")");
        writer.literal(&self.quote_string_literal(&literal.to_formatted_string()));
        writer.end_list(frame);
        Ok(())
    }
}
