// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Operator Tree
//!
//! [`SqlNode`] is the backend-neutral tree that dialects render to text.
//!
//! ```text
//! Call(FLOOR) {
//!   operands: [
//!     Identifier("ts"),
//!     Literal(TimeUnit(YEAR)),
//!   ]
//! }
//! ```
//!
//! Represents: `FLOOR(ts TO YEAR)`
//!
//! The tree is owned by the caller and only read while rendering. Calls
//! expose their operator through [`SqlCall::kind`] and their operands by
//! index, which is all the dialect layer relies on.

use crate::kind::SqlKind;
use crate::literal::{DateTimeLiteral, SqlLiteral};
use crate::types::DataTypeSpec;
use serde::{Deserialize, Serialize};

/// A node of the operator tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlNode {
    /// Possibly qualified identifier, e.g. `t.x`
    Identifier(SqlIdentifier),
    Literal(SqlLiteral),
    Call(SqlCall),
    /// `CASE [value] WHEN ... THEN ... [ELSE ...] END`
    Case(SqlCase),
    Select(Box<SqlSelect>),
    /// Type name inside a CAST
    DataType(DataTypeSpec),
}

impl SqlNode {
    pub fn identifier(name: impl Into<String>) -> Self {
        SqlNode::Identifier(SqlIdentifier::new(name))
    }

    pub fn literal(literal: SqlLiteral) -> Self {
        SqlNode::Literal(literal)
    }

    pub fn null() -> Self {
        SqlNode::Literal(SqlLiteral::Null)
    }

    pub fn exact_numeric(text: impl Into<String>) -> Self {
        SqlNode::Literal(SqlLiteral::exact_numeric(text))
    }

    pub fn date_time(literal: DateTimeLiteral) -> Self {
        SqlNode::Literal(SqlLiteral::DateTime(literal))
    }

    pub fn as_call(&self) -> Option<&SqlCall> {
        match self {
            SqlNode::Call(call) => Some(call),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&SqlLiteral> {
        match self {
            SqlNode::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Short description of the node variant, for diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            SqlNode::Identifier(_) => "identifier",
            SqlNode::Literal(_) => "literal",
            SqlNode::Call(_) => "call",
            SqlNode::Case(_) => "CASE expression",
            SqlNode::Select(_) => "SELECT",
            SqlNode::DataType(_) => "data type",
        }
    }
}

impl From<SqlCall> for SqlNode {
    fn from(call: SqlCall) -> Self {
        SqlNode::Call(call)
    }
}

impl From<SqlCase> for SqlNode {
    fn from(case: SqlCase) -> Self {
        SqlNode::Case(case)
    }
}

impl From<SqlSelect> for SqlNode {
    fn from(select: SqlSelect) -> Self {
        SqlNode::Select(Box::new(select))
    }
}

impl From<DataTypeSpec> for SqlNode {
    fn from(spec: DataTypeSpec) -> Self {
        SqlNode::DataType(spec)
    }
}

/// Identifier with one or more name parts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SqlIdentifier {
    pub names: Vec<String>,
}

impl SqlIdentifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
        }
    }

    pub fn qualified<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The last name part
    pub fn simple(&self) -> &str {
        self.names.last().map(String::as_str).unwrap_or_default()
    }
}

/// Operator applied to an ordered list of operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlCall {
    kind: SqlKind,
    operands: Vec<SqlNode>,
    /// Set only for [`SqlKind::OtherFunction`]
    function_name: Option<String>,
}

impl SqlCall {
    pub fn new(kind: SqlKind, operands: Vec<SqlNode>) -> Self {
        Self {
            kind,
            operands,
            function_name: None,
        }
    }

    /// Call of a function that has no dedicated kind
    pub fn function(name: impl Into<String>, operands: Vec<SqlNode>) -> Self {
        Self {
            kind: SqlKind::OtherFunction,
            operands,
            function_name: Some(name.into()),
        }
    }

    pub fn kind(&self) -> SqlKind {
        self.kind
    }

    pub fn operand(&self, index: usize) -> Option<&SqlNode> {
        self.operands.get(index)
    }

    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    pub fn operands(&self) -> &[SqlNode] {
        &self.operands
    }

    /// Name the call renders with
    pub fn name(&self) -> &str {
        self.function_name
            .as_deref()
            .unwrap_or_else(|| self.kind.sql_name())
    }
}

impl SqlKind {
    /// Build a call node of this kind
    pub fn create_call(self, operands: Vec<SqlNode>) -> SqlNode {
        SqlNode::Call(SqlCall::new(self, operands))
    }
}

/// CASE expression
///
/// With `value` set this is the simple form `CASE value WHEN v THEN r ...`;
/// otherwise each `when` entry is a boolean condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlCase {
    pub value: Option<Box<SqlNode>>,
    pub when_list: Vec<SqlNode>,
    pub then_list: Vec<SqlNode>,
    pub else_expr: Option<Box<SqlNode>>,
}

impl SqlCase {
    pub fn new(
        value: Option<SqlNode>,
        when_list: Vec<SqlNode>,
        then_list: Vec<SqlNode>,
        else_expr: Option<SqlNode>,
    ) -> Self {
        debug_assert_eq!(when_list.len(), then_list.len());
        Self {
            value: value.map(Box::new),
            when_list,
            then_list,
            else_expr: else_expr.map(Box::new),
        }
    }
}

/// SELECT statement
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SqlSelect {
    pub select_list: Vec<SqlNode>,
    pub from: Option<SqlNode>,
    pub where_clause: Option<SqlNode>,
    pub order_by: Vec<SqlNode>,
    pub offset: Option<SqlNode>,
    pub fetch: Option<SqlNode>,
}

impl SqlSelect {
    pub fn new(select_list: Vec<SqlNode>) -> Self {
        Self {
            select_list,
            ..Default::default()
        }
    }

    pub fn with_from(mut self, from: SqlNode) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_where(mut self, condition: SqlNode) -> Self {
        self.where_clause = Some(condition);
        self
    }

    pub fn with_order_by(mut self, order_by: Vec<SqlNode>) -> Self {
        self.order_by = order_by;
        self
    }

    pub fn with_offset(mut self, offset: SqlNode) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_fetch(mut self, fetch: SqlNode) -> Self {
        self.fetch = Some(fetch);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_unit::TimeUnit;

    #[test]
    fn test_call_accessors() {
        let call = SqlCall::new(
            SqlKind::Floor,
            vec![
                SqlNode::identifier("ts"),
                SqlNode::literal(SqlLiteral::TimeUnit(TimeUnit::Year)),
            ],
        );
        assert_eq!(call.kind(), SqlKind::Floor);
        assert_eq!(call.operand_count(), 2);
        assert_eq!(call.operand(0), Some(&SqlNode::identifier("ts")));
        assert!(call.operand(2).is_none());
        assert_eq!(call.name(), "FLOOR");
    }

    #[test]
    fn test_function_name() {
        let call = SqlCall::function("toMonday", vec![SqlNode::identifier("d")]);
        assert_eq!(call.kind(), SqlKind::OtherFunction);
        assert_eq!(call.name(), "toMonday");
    }

    #[test]
    fn test_qualified_identifier() {
        let id = SqlIdentifier::qualified(["sales", "amount"]);
        assert_eq!(id.names.len(), 2);
        assert_eq!(id.simple(), "amount");
    }
}
