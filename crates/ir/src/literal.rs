// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Literals
//!
//! [`SqlLiteral`] covers the literal values an operator tree can carry.
//! Numeric literals keep their source text so that rendering never changes
//! the digits (`1.10` stays `1.10`).
//!
//! Date and time literals are a separate closed family,
//! [`DateTimeLiteral`], because dialects format them very differently:
//!
//! ```text
//! DATE '2024-01-15'          -- standard
//! toDate('2024-01-15')       -- ClickHouse
//! ```
//!
//! Both spellings share the canonical text produced by
//! [`DateTimeLiteral::to_formatted_string`].

use crate::time_unit::TimeUnit;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlLiteral {
    Null,
    Boolean(bool),
    /// Exact numeric, e.g. `42` or `1.50`
    ExactNumeric(String),
    /// Approximate numeric, e.g. `1.5E3`
    ApproxNumeric(String),
    /// Character string, unquoted
    CharString(String),
    /// Time unit symbol, e.g. the `YEAR` in `FLOOR(ts TO YEAR)`
    TimeUnit(TimeUnit),
    DateTime(DateTimeLiteral),
}

impl SqlLiteral {
    pub fn exact_numeric(text: impl Into<String>) -> Self {
        SqlLiteral::ExactNumeric(text.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        SqlLiteral::CharString(text.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlLiteral::Null)
    }

    /// The time unit carried by this literal, if it is a time unit symbol
    pub fn as_time_unit(&self) -> Option<TimeUnit> {
        match self {
            SqlLiteral::TimeUnit(unit) => Some(*unit),
            _ => None,
        }
    }
}

/// Date, time and timestamp literals
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateTimeLiteral {
    Date(NaiveDate),
    Timestamp {
        value: NaiveDateTime,
        precision: u32,
    },
    Time {
        value: NaiveTime,
        precision: u32,
    },
    TimestampWithLocalTimeZone {
        value: NaiveDateTime,
        precision: u32,
    },
}

impl DateTimeLiteral {
    pub fn date(value: NaiveDate) -> Self {
        DateTimeLiteral::Date(value)
    }

    pub fn timestamp(value: NaiveDateTime) -> Self {
        DateTimeLiteral::Timestamp {
            value,
            precision: 0,
        }
    }

    pub fn time(value: NaiveTime) -> Self {
        DateTimeLiteral::Time {
            value,
            precision: 0,
        }
    }

    /// SQL keyword introducing the standard literal syntax
    pub fn type_keyword(&self) -> &'static str {
        match self {
            DateTimeLiteral::Date(_) => "DATE",
            DateTimeLiteral::Timestamp { .. } => "TIMESTAMP",
            DateTimeLiteral::Time { .. } => "TIME",
            DateTimeLiteral::TimestampWithLocalTimeZone { .. } => {
                "TIMESTAMP WITH LOCAL TIME ZONE"
            }
        }
    }

    /// Canonical text of the value, without quotes or keyword
    ///
    /// `yyyy-MM-dd` for dates, `yyyy-MM-dd HH:mm:ss` for timestamps and
    /// `HH:mm:ss` for times, followed by `precision` fractional digits.
    pub fn to_formatted_string(&self) -> String {
        match self {
            DateTimeLiteral::Date(value) => value.format("%Y-%m-%d").to_string(),
            DateTimeLiteral::Timestamp { value, precision }
            | DateTimeLiteral::TimestampWithLocalTimeZone { value, precision } => format!(
                "{}{}",
                value.format("%Y-%m-%d %H:%M:%S"),
                fraction(value.nanosecond(), *precision)
            ),
            DateTimeLiteral::Time { value, precision } => format!(
                "{}{}",
                value.format("%H:%M:%S"),
                fraction(value.nanosecond(), *precision)
            ),
        }
    }
}

fn fraction(nanos: u32, precision: u32) -> String {
    if precision == 0 {
        return String::new();
    }
    // chrono encodes leap seconds as nanos >= 1e9
    let digits = format!("{:09}", nanos % 1_000_000_000);
    let len = precision.min(9) as usize;
    format!(".{}", &digits[..len])
}

/// Standard literal syntax, e.g. `DATE '2024-01-15'`
impl fmt::Display for DateTimeLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.type_keyword(), self.to_formatted_string())
    }
}
