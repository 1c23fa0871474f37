// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! FLOOR(x TO unit) helpers

use crate::dialect::SqlDialect;
use crate::error::{UnparseError, UnparseResult};
use crate::generic::{operands, unparse_function};
use crate::writer::SqlWriter;
use unified_sql_ir::{SqlCall, SqlNode, TimeUnit};

/// Split a two-operand FLOOR into its value and time unit
pub fn floor_operands(call: &SqlCall) -> UnparseResult<(&SqlNode, TimeUnit)> {
    let [value, unit] = operands::<2>(call)?;
    let unit = unit
        .as_literal()
        .and_then(|literal| literal.as_time_unit())
        .ok_or_else(|| UnparseError::UnexpectedOperand {
            operator: call.name().to_string(),
            expected: "time unit".to_string(),
            found: unit.describe().to_string(),
        })?;
    Ok((value, unit))
}

/// Render `function(value)`
pub fn unparse_bucket_function<D: SqlDialect + ?Sized>(
    dialect: &D,
    writer: &mut dyn SqlWriter,
    function: &str,
    value: &SqlNode,
) -> UnparseResult<()> {
    unparse_function(dialect, writer, function, std::slice::from_ref(value))
}
