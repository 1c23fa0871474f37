// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for the unparsing layer
//!
//! Unparsing has no partial-success mode: a node that cannot be rendered
//! correctly aborts the whole render and the error travels up the tree walk
//! unchanged.

use serde::Serialize;
use unified_sql_ir::TimeUnit;

/// Result type alias for unparsing operations
pub type UnparseResult<T> = Result<T, UnparseError>;

/// Errors that can occur while rendering an operator tree
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
pub enum UnparseError {
    /// A FLOOR time unit the dialect has no bucketing function for
    #[error("{dialect} does not support FLOOR for time unit: {unit}")]
    UnsupportedTimeUnit { dialect: String, unit: TimeUnit },

    /// A date/time literal subtype the dialect cannot spell
    #[error("{dialect} does not support DateTime literal: {literal}")]
    UnsupportedDateTimeLiteral { dialect: String, literal: String },

    /// NULLS FIRST/LAST requested from a dialect that can neither express
    /// nor emulate it
    #[error("{dialect} cannot place NULLs {placement} when sorting {direction}")]
    UnsupportedNullDirection {
        dialect: String,
        placement: &'static str,
        direction: &'static str,
    },

    /// A call has the wrong number of operands
    #[error("{operator} expects {expected} operand(s), found {actual}")]
    OperandCount {
        operator: String,
        expected: usize,
        actual: usize,
    },

    /// A call operand has the wrong shape
    #[error("Unexpected operand for {operator}: expected {expected}, found {found}")]
    UnexpectedOperand {
        operator: String,
        expected: String,
        found: String,
    },

    /// No dialect is registered for the requested product
    #[error("No dialect available for database product: {product}")]
    UnknownDialect { product: String },

    /// Dialect configuration could not be read
    #[error("Invalid dialect configuration: {message}")]
    InvalidConfig { message: String },
}

impl UnparseError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UnparseError::UnsupportedTimeUnit { .. }
            | UnparseError::UnsupportedDateTimeLiteral { .. }
            | UnparseError::UnsupportedNullDirection { .. }
            | UnparseError::UnknownDialect { .. }
            | UnparseError::InvalidConfig { .. } => ErrorKind::ConfigurationIncomplete,
            UnparseError::OperandCount { .. } | UnparseError::UnexpectedOperand { .. } => {
                ErrorKind::PreconditionViolation
            }
        }
    }
}

/// Category of an [`UnparseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The dialect definition is missing a case for its input
    ConfigurationIncomplete,
    /// The caller handed over a tree the operation is not defined for
    PreconditionViolation,
}
