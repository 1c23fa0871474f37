// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! SINGLE_VALUE emulation
//!
//! `SINGLE_VALUE(x)` returns the only value of its group and fails when the
//! group has more than one row. Backends without it get:
//!
//! ```text
//! CASE COUNT(x)
//!   WHEN 0 THEN NULL
//!   WHEN 1 THEN x
//!   ELSE (SELECT NULL UNION ALL SELECT NULL)
//! END
//! ```
//!
//! The ELSE branch is a scalar subquery returning two rows, which makes the
//! backend raise its own "more than one row" error.

use crate::dialect::SqlDialect;
use crate::error::{UnparseError, UnparseResult};
use crate::generic::operands;
use tracing::debug;
use unified_sql_ir::{SqlCase, SqlKind, SqlNode, SqlSelect};

/// Rewrite `SINGLE_VALUE(x)` into the COUNT-driven CASE above
pub fn single_value_case<D: SqlDialect + ?Sized>(
    dialect: &D,
    agg_call: &SqlNode,
) -> UnparseResult<SqlNode> {
    let call = agg_call
        .as_call()
        .ok_or_else(|| UnparseError::UnexpectedOperand {
            operator: SqlKind::SingleValue.sql_name().to_string(),
            expected: "aggregate call".to_string(),
            found: agg_call.describe().to_string(),
        })?;
    let [operand] = operands::<1>(call)?;

    debug!(dialect = dialect.name(), "Rewriting SINGLE_VALUE as CASE");

    let count = SqlKind::Count.create_call(vec![operand.clone()]);
    let select_null = || SqlNode::from(SqlSelect::new(vec![SqlNode::null()]));
    let two_rows = SqlKind::UnionAll.create_call(vec![select_null(), select_null()]);
    let fail = SqlKind::ScalarQuery.create_call(vec![two_rows]);

    Ok(SqlNode::from(SqlCase::new(
        Some(count),
        vec![SqlNode::exact_numeric("0"), SqlNode::exact_numeric("1")],
        vec![SqlNode::null(), operand.clone()],
        Some(fail),
    )))
}
