// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Dialect configuration
//!
//! Builds a dialect from a small JSON document:
//!
//! ```json
//! {
//!   "product": "clickhouse",
//!   "identifier_quote_string": "\"",
//!   "null_collation": "high"
//! }
//! ```
//!
//! Only `product` is required; every other field overrides the product's
//! default context.

use crate::dialect::{
    AnsiSqlDialect, ClickHouseSqlDialect, MySqlDialect, PostgreSqlDialect, SqlDialect,
};
use crate::error::{UnparseError, UnparseResult};
use serde::{Deserialize, Serialize};
use tracing::debug;
use unified_sql_ir::{CalendarPolicy, DatabaseProduct, DialectContext, NullCollation};

/// Dialect selection and context overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialectConfig {
    pub product: DatabaseProduct,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier_quote_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub null_collation: Option<NullCollation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_policy: Option<CalendarPolicy>,
}

impl DialectConfig {
    pub fn new(product: DatabaseProduct) -> Self {
        Self {
            product,
            identifier_quote_string: None,
            null_collation: None,
            calendar_policy: None,
        }
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> UnparseResult<Self> {
        serde_json::from_str(json).map_err(|e| UnparseError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// The product's default context with the overrides applied
    pub fn context(&self) -> UnparseResult<DialectContext> {
        let mut context = match self.product {
            DatabaseProduct::Ansi => AnsiSqlDialect::default_context(),
            DatabaseProduct::ClickHouse => ClickHouseSqlDialect::default_context(),
            DatabaseProduct::MySql => MySqlDialect::default_context(),
            DatabaseProduct::PostgreSql => PostgreSqlDialect::default_context(),
            DatabaseProduct::Unknown => {
                return Err(UnparseError::UnknownDialect {
                    product: self.product.to_string(),
                });
            }
        };

        if let Some(quote) = &self.identifier_quote_string {
            context = context.with_identifier_quote_string(quote.as_str());
        }
        if let Some(collation) = self.null_collation {
            context = context.with_null_collation(collation);
        }
        if let Some(policy) = self.calendar_policy {
            context = context.with_calendar_policy(policy);
        }
        Ok(context)
    }

    /// Build the configured dialect
    pub fn build(&self) -> UnparseResult<Box<dyn SqlDialect>> {
        let context = self.context()?;
        debug!(product = %self.product, "Building dialect from configuration");
        let dialect: Box<dyn SqlDialect> = match self.product {
            DatabaseProduct::Ansi => Box::new(AnsiSqlDialect::new(context)),
            DatabaseProduct::ClickHouse => Box::new(ClickHouseSqlDialect::new(context)),
            DatabaseProduct::MySql => Box::new(MySqlDialect::new(context)),
            DatabaseProduct::PostgreSql => Box::new(PostgreSqlDialect::new(context)),
            DatabaseProduct::Unknown => {
                return Err(UnparseError::UnknownDialect {
                    product: self.product.to_string(),
                });
            }
        };
        Ok(dialect)
    }
}
