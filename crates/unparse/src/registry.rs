// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Dialect lookup
//!
//! One shared, lazily built instance per built-in backend, plus a
//! [`DialectRegistry`] for callers that configure their own dialects.

use crate::dialect::{
    AnsiSqlDialect, ClickHouseSqlDialect, MySqlDialect, PostgreSqlDialect, SqlDialect,
};
use crate::error::{UnparseError, UnparseResult};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tracing::trace;
use unified_sql_ir::DatabaseProduct;

pub static ANSI: LazyLock<AnsiSqlDialect> = LazyLock::new(AnsiSqlDialect::default);
pub static CLICKHOUSE: LazyLock<ClickHouseSqlDialect> =
    LazyLock::new(ClickHouseSqlDialect::default);
pub static MYSQL: LazyLock<MySqlDialect> = LazyLock::new(MySqlDialect::default);
pub static POSTGRESQL: LazyLock<PostgreSqlDialect> = LazyLock::new(PostgreSqlDialect::default);

/// Shared default dialect for a database product
///
/// # Returns
///
/// `None` for [`DatabaseProduct::Unknown`].
pub fn dialect_for(product: DatabaseProduct) -> Option<&'static dyn SqlDialect> {
    trace!(%product, "Looking up default dialect");
    match product {
        DatabaseProduct::Ansi => Some(&*ANSI),
        DatabaseProduct::ClickHouse => Some(&*CLICKHOUSE),
        DatabaseProduct::MySql => Some(&*MYSQL),
        DatabaseProduct::PostgreSql => Some(&*POSTGRESQL),
        DatabaseProduct::Unknown => None,
    }
}

/// Dialects keyed by database product
///
/// Starts out with the built-in defaults; [`DialectRegistry::register`]
/// replaces the entry for a product.
#[derive(Debug, Clone)]
pub struct DialectRegistry {
    dialects: HashMap<DatabaseProduct, Arc<dyn SqlDialect>>,
}

impl DialectRegistry {
    /// Create a registry with every built-in dialect loaded
    pub fn new() -> Self {
        let mut registry = Self {
            dialects: HashMap::new(),
        };
        registry.register(Arc::new(AnsiSqlDialect::default()));
        registry.register(Arc::new(ClickHouseSqlDialect::default()));
        registry.register(Arc::new(MySqlDialect::default()));
        registry.register(Arc::new(PostgreSqlDialect::default()));
        registry
    }

    /// Register a dialect under the product of its context
    ///
    /// # Returns
    ///
    /// The dialect previously registered for that product, if any.
    pub fn register(&mut self, dialect: Arc<dyn SqlDialect>) -> Option<Arc<dyn SqlDialect>> {
        let product = dialect.context().database_product();
        trace!(%product, "Registering dialect");
        self.dialects.insert(product, dialect)
    }

    /// Get the dialect for a product
    ///
    /// # Errors
    ///
    /// [`UnparseError::UnknownDialect`] when nothing is registered for it.
    pub fn get(&self, product: DatabaseProduct) -> UnparseResult<Arc<dyn SqlDialect>> {
        self.dialects
            .get(&product)
            .cloned()
            .ok_or_else(|| UnparseError::UnknownDialect {
                product: product.to_string(),
            })
    }

    pub fn contains(&self, product: DatabaseProduct) -> bool {
        self.dialects.contains_key(&product)
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
