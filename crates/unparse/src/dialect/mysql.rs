// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! MySQL dialect
//!
//! Shares the ClickHouse emulations for NULL ordering and SINGLE_VALUE;
//! FLOOR is expressed through `DATE_FORMAT`.

use super::SqlDialect;
use crate::cast;
use crate::emulate::{floor_operands, null_direction_with_is_null, single_value_case};
use crate::error::{UnparseError, UnparseResult};
use crate::generic::{self, unparse_function};
use crate::writer::SqlWriter;
use unified_sql_ir::{
    CalendarPolicy, DataTypeSpec, DatabaseProduct, DialectContext, NullCollation, RelDataType,
    SqlCall, SqlKind, SqlLiteral, SqlNode, SqlTypeName, TimeUnit,
};

const CAST_TYPES: &[(SqlTypeName, &str)] = &[
    (SqlTypeName::Integer, "SIGNED"),
    (SqlTypeName::BigInt, "SIGNED"),
];

/// Longest CHAR MySQL accepts
const MAX_CHAR_PRECISION: u32 = 255;

#[derive(Debug, Clone)]
pub struct MySqlDialect {
    context: DialectContext,
}

impl MySqlDialect {
    pub fn new(context: DialectContext) -> Self {
        Self { context }
    }

    pub fn default_context() -> DialectContext {
        DialectContext::empty()
            .with_database_product(DatabaseProduct::MySql)
            .with_identifier_quote_string("`")
            .with_null_collation(NullCollation::Low)
    }

    /// `DATE_FORMAT` pattern truncating a value to `unit`
    ///
    /// WEEK has no single pattern and is handled separately.
    pub fn floor_format(unit: TimeUnit) -> Option<&'static str> {
        match unit {
            TimeUnit::Year => Some("%Y-01-01"),
            TimeUnit::Month => Some("%Y-%m-01"),
            TimeUnit::Day => Some("%Y-%m-%d"),
            TimeUnit::Hour => Some("%Y-%m-%d %H:00:00"),
            TimeUnit::Minute => Some("%Y-%m-%d %H:%i:00"),
            TimeUnit::Second => Some("%Y-%m-%d %H:%i:%s"),
            TimeUnit::Week
            | TimeUnit::Quarter
            | TimeUnit::Millisecond
            | TimeUnit::Microsecond => None,
        }
    }

    fn unparse_floor(&self, writer: &mut dyn SqlWriter, call: &SqlCall) -> UnparseResult<()> {
        let (value, unit) = floor_operands(call)?;
        let date_format = |format: &str| {
            SqlNode::Call(SqlCall::function(
                "DATE_FORMAT",
                vec![value.clone(), SqlNode::literal(SqlLiteral::string(format))],
            ))
        };

        if unit == TimeUnit::Week {
            // Monday of the ISO week
            let operands = [
                date_format("%x%v-1"),
                SqlNode::literal(SqlLiteral::string("%x%v-%w")),
            ];
            return unparse_function(self, writer, "STR_TO_DATE", &operands);
        }

        let format = Self::floor_format(unit).ok_or_else(|| UnparseError::UnsupportedTimeUnit {
            dialect: self.name().to_string(),
            unit,
        })?;
        generic::unparse_node(self, writer, &date_format(format), 0, 0)
    }
}

impl Default for MySqlDialect {
    fn default() -> Self {
        Self::new(Self::default_context())
    }
}

impl SqlDialect for MySqlDialect {
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

    fn get_cast_spec(&self, ty: &RelDataType) -> DataTypeSpec {
        if ty.type_name == SqlTypeName::Varchar {
            // no VARCHAR in CAST, only CHAR
            let precision = ty.precision.map(|p| p.min(MAX_CHAR_PRECISION));
            return DataTypeSpec::builtin(SqlTypeName::Char, precision, None);
        }
        match cast::lookup_override(CAST_TYPES, ty.type_name) {
            Some(native) => cast::native_cast_spec(native, ty),
            None => cast::default_cast_spec(self, ty),
        }
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
}
