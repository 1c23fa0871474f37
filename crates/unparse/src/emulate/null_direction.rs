// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! NULLS FIRST / NULLS LAST emulation
//!
//! Backends without the NULLS FIRST/LAST syntax still sort NULLs somewhere
//! (their [`NullCollation`](unified_sql_ir::NullCollation)). When that place
//! differs from the requested one, an extra sort key is emitted before the
//! original key:
//!
//! ```text
//! ORDER BY x NULLS LAST        -- requested
//! ORDER BY x IS NULL, x        -- emulated (ascending: false sorts first)
//! ORDER BY x IS NULL DESC, x   -- emulated NULLS FIRST
//! ```

use crate::dialect::SqlDialect;
use crate::error::{UnparseError, UnparseResult};
use tracing::debug;
use unified_sql_ir::{SqlKind, SqlNode};

/// Sort direction of an ORDER BY key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Requested placement of NULLs for an ORDER BY key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullDirection {
    /// Whatever the backend does natively
    #[default]
    Unspecified,
    First,
    Last,
}

/// Extra sort key placing NULLs as requested, via `IS NULL`
///
/// Returns `None` when the dialect's collation already yields the requested
/// order.
pub fn null_direction_with_is_null<D: SqlDialect + ?Sized>(
    dialect: &D,
    node: &SqlNode,
    nulls_first: bool,
    desc: bool,
) -> Option<SqlNode> {
    if dialect
        .null_collation()
        .is_default_order(nulls_first, desc)
    {
        return None;
    }

    debug!(
        dialect = dialect.name(),
        nulls_first, desc, "Emulating null direction with IS NULL"
    );
    let is_null = SqlKind::IsNull.create_call(vec![node.clone()]);
    if nulls_first {
        Some(SqlKind::Descending.create_call(vec![is_null]))
    } else {
        Some(is_null)
    }
}

/// Build the ORDER BY items for one sort key
///
/// Dialects with native NULLS FIRST/LAST get the clause; others get the
/// emulated discriminator in front of the key when their collation does not
/// already match.
pub fn order_by_items<D: SqlDialect + ?Sized>(
    dialect: &D,
    key: &SqlNode,
    direction: SortDirection,
    null_direction: NullDirection,
) -> UnparseResult<Vec<SqlNode>> {
    let desc = direction == SortDirection::Descending;
    let ordered = if desc {
        SqlKind::Descending.create_call(vec![key.clone()])
    } else {
        key.clone()
    };

    let nulls_first = match null_direction {
        NullDirection::Unspecified => return Ok(vec![ordered]),
        NullDirection::First => true,
        NullDirection::Last => false,
    };

    if dialect.supports_nulls_first_last() {
        let kind = if nulls_first {
            SqlKind::NullsFirst
        } else {
            SqlKind::NullsLast
        };
        return Ok(vec![kind.create_call(vec![ordered])]);
    }

    if dialect
        .null_collation()
        .is_default_order(nulls_first, desc)
    {
        return Ok(vec![ordered]);
    }

    match dialect.emulate_null_direction(key, nulls_first, desc) {
        Some(discriminator) => Ok(vec![discriminator, ordered]),
        None => Err(UnparseError::UnsupportedNullDirection {
            dialect: dialect.name().to_string(),
            placement: if nulls_first { "first" } else { "last" },
            direction: if desc { "descending" } else { "ascending" },
        }),
    }
}
