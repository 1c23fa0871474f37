// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! PostgreSQL dialect

use super::SqlDialect;
use crate::emulate::floor_operands;
use crate::error::UnparseResult;
use crate::generic::{self, unparse_function};
use crate::writer::SqlWriter;
use unified_sql_ir::{
    DatabaseProduct, DialectContext, NullCollation, SqlCall, SqlKind, SqlLiteral, SqlNode,
    SqlTypeName,
};

const CAST_TYPES: &[(SqlTypeName, &str)] = &[
    (SqlTypeName::TinyInt, "smallint"),
    (SqlTypeName::Double, "double precision"),
];

#[derive(Debug, Clone)]
pub struct PostgreSqlDialect {
    context: DialectContext,
}

impl PostgreSqlDialect {
    pub fn new(context: DialectContext) -> Self {
        Self { context }
    }

    pub fn default_context() -> DialectContext {
        DialectContext::empty()
            .with_database_product(DatabaseProduct::PostgreSql)
            .with_identifier_quote_string("\"")
            .with_null_collation(NullCollation::High)
    }
}

impl Default for PostgreSqlDialect {
    fn default() -> Self {
        Self::new(Self::default_context())
    }
}

impl SqlDialect for PostgreSqlDialect {
    fn context(&self) -> &DialectContext {
        &self.context
    }

    fn supports_char_set(&self) -> bool {
        false
    }

    fn cast_type_overrides(&self) -> &'static [(SqlTypeName, &'static str)] {
        CAST_TYPES
    }

    fn unparse_call(
        &self,
        writer: &mut dyn SqlWriter,
        call: &SqlCall,
        left_prec: u32,
        right_prec: u32,
    ) -> UnparseResult<()> {
        match call.kind() {
            SqlKind::Floor if call.operand_count() == 2 => {
                // DATE_TRUNC('MONTH', ts)
                let (value, unit) = floor_operands(call)?;
                let operands = [
                    SqlNode::literal(SqlLiteral::string(unit.as_str())),
                    value.clone(),
                ];
                unparse_function(self, writer, "DATE_TRUNC", &operands)
            }
            _ => generic::unparse_call(self, writer, call, left_prec, right_prec),
        }
    }
}
