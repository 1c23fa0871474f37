// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Type Descriptors
//!
//! [`RelDataType`] describes the type of a value flowing through the operator
//! tree: a [`SqlTypeName`] tag plus optional precision, scale and character
//! set. `None` means "unspecified".
//!
//! [`DataTypeSpec`] is the renderable form of a type, as it appears inside
//! `CAST(x AS <spec>)`. Its name is either a standard type
//! ([`TypeNameSpec::Builtin`]), which renders with precision and scale when
//! the type allows them, or a backend-native name ([`TypeNameSpec::Named`]),
//! which renders bare.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard SQL type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SqlTypeName {
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Decimal,
    Float,
    Real,
    Double,
    Char,
    Varchar,
    Binary,
    Varbinary,
    Date,
    Time,
    Timestamp,
}

impl SqlTypeName {
    /// Standard spelling of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlTypeName::Boolean => "BOOLEAN",
            SqlTypeName::TinyInt => "TINYINT",
            SqlTypeName::SmallInt => "SMALLINT",
            SqlTypeName::Integer => "INTEGER",
            SqlTypeName::BigInt => "BIGINT",
            SqlTypeName::Decimal => "DECIMAL",
            SqlTypeName::Float => "FLOAT",
            SqlTypeName::Real => "REAL",
            SqlTypeName::Double => "DOUBLE",
            SqlTypeName::Char => "CHAR",
            SqlTypeName::Varchar => "VARCHAR",
            SqlTypeName::Binary => "BINARY",
            SqlTypeName::Varbinary => "VARBINARY",
            SqlTypeName::Date => "DATE",
            SqlTypeName::Time => "TIME",
            SqlTypeName::Timestamp => "TIMESTAMP",
        }
    }

    /// Whether a precision may follow the type name, e.g. `VARCHAR(10)`
    pub fn allows_precision(&self) -> bool {
        matches!(
            self,
            SqlTypeName::Decimal
                | SqlTypeName::Char
                | SqlTypeName::Varchar
                | SqlTypeName::Binary
                | SqlTypeName::Varbinary
                | SqlTypeName::Time
                | SqlTypeName::Timestamp
        )
    }

    /// Whether a scale may follow the precision, e.g. `DECIMAL(10, 2)`
    pub fn allows_scale(&self) -> bool {
        matches!(self, SqlTypeName::Decimal)
    }

    /// Whether values of this type carry a character set
    pub fn is_character(&self) -> bool {
        matches!(self, SqlTypeName::Char | SqlTypeName::Varchar)
    }
}

impl fmt::Display for SqlTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a value in the operator tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelDataType {
    pub type_name: SqlTypeName,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub charset: Option<String>,
}

impl RelDataType {
    pub fn new(type_name: SqlTypeName) -> Self {
        Self {
            type_name,
            precision: None,
            scale: None,
            charset: None,
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }
}

/// Name part of a [`DataTypeSpec`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeNameSpec {
    /// A standard SQL type
    Builtin(SqlTypeName),
    /// A backend-native type name, rendered verbatim
    Named(String),
}

/// Renderable type, the target of a CAST
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataTypeSpec {
    pub name: TypeNameSpec,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub charset: Option<String>,
}

impl DataTypeSpec {
    pub fn builtin(type_name: SqlTypeName, precision: Option<u32>, scale: Option<u32>) -> Self {
        Self {
            name: TypeNameSpec::Builtin(type_name),
            precision,
            scale,
            charset: None,
        }
    }

    pub fn named(name: impl Into<String>, precision: Option<u32>, scale: Option<u32>) -> Self {
        Self {
            name: TypeNameSpec::Named(name.into()),
            precision,
            scale,
            charset: None,
        }
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// The spelled type name, without precision or scale
    pub fn type_name(&self) -> &str {
        match &self.name {
            TypeNameSpec::Builtin(t) => t.as_str(),
            TypeNameSpec::Named(name) => name,
        }
    }
}
