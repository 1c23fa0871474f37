// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Operator Kinds
//!
//! [`SqlKind`] is the closed vocabulary of operators a call node can carry.
//! Dialects dispatch on it, so adding a kind means every `match` over it has
//! to be revisited.
//!
//! ## Precedence
//!
//! Each kind has a left and a right binding precedence. A call is wrapped
//! in parentheses when the precedence its context demands is stronger than
//! its own. Left-associative binary operators with precedence `p` use
//! `(p, p + 1)`:
//!
//! | operators                  | precedence |
//! |----------------------------|-----------|
//! | `UNION`, `UNION ALL`       | 14        |
//! | `NULLS FIRST`, `NULLS LAST`| 18        |
//! | `DESC`, `AS`               | 20        |
//! | `OR`                       | 22        |
//! | `AND`                      | 24        |
//! | `NOT`                      | 26        |
//! | `IS NULL`, `IS NOT NULL`   | 28        |
//! | comparisons                | 30        |
//! | `+`, `-`                   | 40        |
//! | `*`, `/`                   | 60        |
//! | prefix `-`                 | 80        |
//! | functions                  | 100       |

use serde::{Deserialize, Serialize};

/// Operator of a call node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlKind {
    // Aggregates
    Count,
    Sum,
    /// SUM that returns 0 instead of NULL on empty input
    Sum0,
    Min,
    Max,
    Avg,
    /// Aggregate asserting that its input has at most one row
    SingleValue,

    // Functions
    Floor,
    Ceil,
    /// Any other function; the name is carried by the call
    OtherFunction,

    // Arithmetic
    Plus,
    Minus,
    Times,
    Divide,

    // Comparison
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,

    // Logical
    And,
    Or,
    Not,

    /// Prefix `-x`
    MinusPrefix,

    // Postfix
    IsNull,
    IsNotNull,
    Descending,
    NullsFirst,
    NullsLast,

    // Set operations
    Union,
    UnionAll,

    // Special forms
    Cast,
    /// Parenthesized subquery used as a scalar value
    ScalarQuery,
    As,
}

/// How a call is laid out when rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlSyntax {
    /// `NAME(arg, ...)`
    Function,
    /// `left OP right`
    Binary,
    /// `OP operand`
    Prefix,
    /// `operand OP`
    Postfix,
    /// Layout specific to the kind (CAST, FLOOR ... TO, scalar query)
    Special,
}

const FUNCTION_PRECEDENCE: u32 = 100;

impl SqlKind {
    pub fn syntax(&self) -> SqlSyntax {
        match self {
            SqlKind::Count
            | SqlKind::Sum
            | SqlKind::Sum0
            | SqlKind::Min
            | SqlKind::Max
            | SqlKind::Avg
            | SqlKind::SingleValue
            | SqlKind::Ceil
            | SqlKind::OtherFunction => SqlSyntax::Function,
            SqlKind::Plus
            | SqlKind::Minus
            | SqlKind::Times
            | SqlKind::Divide
            | SqlKind::Equals
            | SqlKind::NotEquals
            | SqlKind::LessThan
            | SqlKind::LessThanOrEqual
            | SqlKind::GreaterThan
            | SqlKind::GreaterThanOrEqual
            | SqlKind::And
            | SqlKind::Or
            | SqlKind::Union
            | SqlKind::UnionAll
            | SqlKind::As => SqlSyntax::Binary,
            SqlKind::Not | SqlKind::MinusPrefix => SqlSyntax::Prefix,
            SqlKind::IsNull
            | SqlKind::IsNotNull
            | SqlKind::Descending
            | SqlKind::NullsFirst
            | SqlKind::NullsLast => SqlSyntax::Postfix,
            SqlKind::Floor | SqlKind::Cast | SqlKind::ScalarQuery => SqlSyntax::Special,
        }
    }

    /// SQL spelling of the operator
    ///
    /// Empty for [`SqlKind::OtherFunction`], whose name lives on the call.
    pub fn sql_name(&self) -> &'static str {
        match self {
            SqlKind::Count => "COUNT",
            SqlKind::Sum => "SUM",
            SqlKind::Sum0 => "$SUM0",
            SqlKind::Min => "MIN",
            SqlKind::Max => "MAX",
            SqlKind::Avg => "AVG",
            SqlKind::SingleValue => "SINGLE_VALUE",
            SqlKind::Floor => "FLOOR",
            SqlKind::Ceil => "CEIL",
            SqlKind::OtherFunction => "",
            SqlKind::Plus => "+",
            SqlKind::Minus => "-",
            SqlKind::Times => "*",
            SqlKind::Divide => "/",
            SqlKind::Equals => "=",
            SqlKind::NotEquals => "<>",
            SqlKind::LessThan => "<",
            SqlKind::LessThanOrEqual => "<=",
            SqlKind::GreaterThan => ">",
            SqlKind::GreaterThanOrEqual => ">=",
            SqlKind::And => "AND",
            SqlKind::Or => "OR",
            SqlKind::Not => "NOT",
            SqlKind::MinusPrefix => "-",
            SqlKind::IsNull => "IS NULL",
            SqlKind::IsNotNull => "IS NOT NULL",
            SqlKind::Descending => "DESC",
            SqlKind::NullsFirst => "NULLS FIRST",
            SqlKind::NullsLast => "NULLS LAST",
            SqlKind::Union => "UNION",
            SqlKind::UnionAll => "UNION ALL",
            SqlKind::Cast => "CAST",
            SqlKind::ScalarQuery => "$SCALAR_QUERY",
            SqlKind::As => "AS",
        }
    }

    /// Left and right binding precedence
    pub fn precedence(&self) -> (u32, u32) {
        let prec = match self {
            SqlKind::Union | SqlKind::UnionAll => 14,
            SqlKind::NullsFirst | SqlKind::NullsLast => 18,
            SqlKind::Descending | SqlKind::As => 20,
            SqlKind::Or => 22,
            SqlKind::And => 24,
            SqlKind::Not => return (26, 26),
            SqlKind::IsNull | SqlKind::IsNotNull => 28,
            SqlKind::Equals
            | SqlKind::NotEquals
            | SqlKind::LessThan
            | SqlKind::LessThanOrEqual
            | SqlKind::GreaterThan
            | SqlKind::GreaterThanOrEqual => 30,
            SqlKind::Plus | SqlKind::Minus => 40,
            SqlKind::Times | SqlKind::Divide => 60,
            SqlKind::MinusPrefix => return (80, 80),
            _ => return (FUNCTION_PRECEDENCE, FUNCTION_PRECEDENCE),
        };
        (prec, prec + 1)
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            SqlKind::Count
                | SqlKind::Sum
                | SqlKind::Sum0
                | SqlKind::Min
                | SqlKind::Max
                | SqlKind::Avg
                | SqlKind::SingleValue
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_precedence_is_left_associative() {
        assert_eq!(SqlKind::Plus.precedence(), (40, 41));
        assert_eq!(SqlKind::Times.precedence(), (60, 61));
        assert_eq!(SqlKind::UnionAll.precedence(), (14, 15));
    }

    #[test]
    fn test_syntax_classes() {
        assert_eq!(SqlKind::Count.syntax(), SqlSyntax::Function);
        assert_eq!(SqlKind::Floor.syntax(), SqlSyntax::Special);
        assert_eq!(SqlKind::IsNull.syntax(), SqlSyntax::Postfix);
        assert_eq!(SqlKind::Not.syntax(), SqlSyntax::Prefix);
    }

    #[test]
    fn test_aggregates() {
        assert!(SqlKind::SingleValue.is_aggregate());
        assert!(!SqlKind::Floor.is_aggregate());
    }
}
