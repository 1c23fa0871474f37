// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Standard SQL with no backend-specific rules

use super::SqlDialect;
use unified_sql_ir::{DatabaseProduct, DialectContext};

/// Dialect relying entirely on the generic defaults
#[derive(Debug, Clone)]
pub struct AnsiSqlDialect {
    context: DialectContext,
}

impl AnsiSqlDialect {
    pub fn new(context: DialectContext) -> Self {
        Self { context }
    }

    pub fn default_context() -> DialectContext {
        DialectContext::empty()
            .with_database_product(DatabaseProduct::Ansi)
            .with_identifier_quote_string("`")
    }
}

impl Default for AnsiSqlDialect {
    fn default() -> Self {
        Self::new(Self::default_context())
    }
}

impl SqlDialect for AnsiSqlDialect {
    fn context(&self) -> &DialectContext {
        &self.context
    }
}
