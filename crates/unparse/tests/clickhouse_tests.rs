// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! ClickHouse rendering tests

use chrono::{NaiveDate, NaiveTime};
use unified_sql_ir::{
    CalendarPolicy, DateTimeLiteral, RelDataType, SqlKind, SqlLiteral, SqlNode, SqlSelect,
    SqlTypeName, TimeUnit, TypeNameSpec,
};
use unified_sql_unparse::cast::cast;
use unified_sql_unparse::{ClickHouseSqlDialect, ErrorKind, SqlDialect, UnparseError, to_sql};

const ALL_TYPES: [SqlTypeName; 16] = [
    SqlTypeName::Boolean,
    SqlTypeName::TinyInt,
    SqlTypeName::SmallInt,
    SqlTypeName::Integer,
    SqlTypeName::BigInt,
    SqlTypeName::Decimal,
    SqlTypeName::Float,
    SqlTypeName::Real,
    SqlTypeName::Double,
    SqlTypeName::Char,
    SqlTypeName::Varchar,
    SqlTypeName::Binary,
    SqlTypeName::Varbinary,
    SqlTypeName::Date,
    SqlTypeName::Time,
    SqlTypeName::Timestamp,
];

fn dialect() -> ClickHouseSqlDialect {
    ClickHouseSqlDialect::default()
}

fn floor(unit: TimeUnit) -> SqlNode {
    SqlKind::Floor.create_call(vec![
        SqlNode::identifier("ts"),
        SqlNode::literal(SqlLiteral::TimeUnit(unit)),
    ])
}

fn jan_15() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

// =========================================================================
// Capabilities
// =========================================================================

#[test]
fn test_capabilities() {
    let dialect = dialect();
    assert!(!dialect.supports_char_set());
    assert!(!dialect.supports_offset_fetch());
    assert!(!dialect.supports_nested_aggregations());
    assert!(!dialect.supports_nulls_first_last());
    assert_eq!(dialect.calendar_policy(), CalendarPolicy::Shift);
}

#[test]
fn test_aggregate_allow_list() {
    let dialect = dialect();
    for kind in [
        SqlKind::Count,
        SqlKind::Sum,
        SqlKind::Sum0,
        SqlKind::Min,
        SqlKind::Max,
        SqlKind::SingleValue,
    ] {
        assert!(dialect.supports_aggregate_function(kind), "{kind:?}");
    }
    for kind in [SqlKind::Avg, SqlKind::Floor, SqlKind::Plus, SqlKind::Cast] {
        assert!(!dialect.supports_aggregate_function(kind), "{kind:?}");
    }
}

#[test]
fn test_capabilities_are_stable() {
    let dialect = dialect();
    let first: Vec<bool> = [SqlKind::Count, SqlKind::Avg]
        .iter()
        .map(|k| dialect.supports_aggregate_function(*k))
        .collect();
    let second: Vec<bool> = [SqlKind::Count, SqlKind::Avg]
        .iter()
        .map(|k| dialect.supports_aggregate_function(*k))
        .collect();
    assert_eq!(first, second);
}

// =========================================================================
// Casts
// =========================================================================

#[test]
fn test_cast_native_names() {
    let dialect = dialect();

    let spec = dialect.get_cast_spec(&RelDataType::new(SqlTypeName::Varchar).with_precision(10));
    assert_eq!(spec.name, TypeNameSpec::Named("String".to_string()));
    assert_eq!(spec.precision, Some(10));
    assert_eq!(spec.scale, None);

    let spec = dialect.get_cast_spec(&RelDataType::new(SqlTypeName::Integer));
    assert_eq!(spec.name, TypeNameSpec::Named("Int32".to_string()));
}

#[test]
fn test_cast_spec_is_total() {
    let dialect = dialect();
    for type_name in ALL_TYPES {
        let spec = dialect.get_cast_spec(&RelDataType::new(type_name).with_charset("UTF8"));
        assert!(!spec.type_name().is_empty());
        assert!(spec.charset.is_none(), "{type_name} kept its charset");
        match type_name {
            SqlTypeName::Varchar | SqlTypeName::Integer => {
                assert!(matches!(spec.name, TypeNameSpec::Named(_)))
            }
            _ => assert_eq!(spec.name, TypeNameSpec::Builtin(type_name)),
        }
    }
}

#[test]
fn test_cast_rendering() {
    let dialect = dialect();
    let varchar = RelDataType::new(SqlTypeName::Varchar).with_precision(10);
    let node = cast(&dialect, SqlNode::identifier("name"), &varchar);
    assert_eq!(to_sql(&dialect, &node).unwrap(), "CAST(`name` AS String)");

    let decimal = RelDataType::new(SqlTypeName::Decimal)
        .with_precision(10)
        .with_scale(2);
    let node = cast(&dialect, SqlNode::identifier("price"), &decimal);
    assert_eq!(
        to_sql(&dialect, &node).unwrap(),
        "CAST(`price` AS DECIMAL(10, 2))"
    );
}

// =========================================================================
// FLOOR
// =========================================================================

#[test]
fn test_floor_supported_units() {
    let dialect = dialect();
    let cases = [
        (TimeUnit::Year, "toStartOfYear(`ts`)"),
        (TimeUnit::Month, "toStartOfMonth(`ts`)"),
        (TimeUnit::Week, "toMonday(`ts`)"),
        (TimeUnit::Day, "toDate(`ts`)"),
        (TimeUnit::Hour, "toStartOfHour(`ts`)"),
        (TimeUnit::Minute, "toStartOfMinute(`ts`)"),
    ];
    for (unit, expected) in cases {
        assert_eq!(to_sql(&dialect, &floor(unit)).unwrap(), expected);
    }
}

#[test]
fn test_floor_unsupported_units() {
    let dialect = dialect();
    for unit in [
        TimeUnit::Quarter,
        TimeUnit::Second,
        TimeUnit::Millisecond,
        TimeUnit::Microsecond,
    ] {
        let err = to_sql(&dialect, &floor(unit)).unwrap_err();
        assert_eq!(
            err,
            UnparseError::UnsupportedTimeUnit {
                dialect: "ClickHouse".to_string(),
                unit
            }
        );
        assert_eq!(err.kind(), ErrorKind::ConfigurationIncomplete);
    }
}

#[test]
fn test_floor_single_operand_passes_through() {
    let node = SqlKind::Floor.create_call(vec![SqlNode::identifier("x")]);
    assert_eq!(to_sql(&dialect(), &node).unwrap(), "FLOOR(`x`)");
}

#[test]
fn test_floor_inside_expression() {
    let node = SqlKind::Equals.create_call(vec![
        floor(TimeUnit::Day),
        SqlNode::date_time(DateTimeLiteral::date(jan_15())),
    ]);
    assert_eq!(
        to_sql(&dialect(), &node).unwrap(),
        "toDate(`ts`) = toDate('2024-01-15')"
    );
}

// =========================================================================
// Date/time literals
// =========================================================================

#[test]
fn test_date_time_literals() {
    let dialect = dialect();

    let date = SqlNode::date_time(DateTimeLiteral::date(jan_15()));
    assert_eq!(to_sql(&dialect, &date).unwrap(), "toDate('2024-01-15')");

    let ts = jan_15().and_hms_opt(10, 30, 0).unwrap();
    let timestamp = SqlNode::date_time(DateTimeLiteral::timestamp(ts));
    assert_eq!(
        to_sql(&dialect, &timestamp).unwrap(),
        "toDateTime('2024-01-15 10:30:00')"
    );

    let time = SqlNode::date_time(DateTimeLiteral::time(
        NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
    ));
    assert_eq!(to_sql(&dialect, &time).unwrap(), "toTime('10:30:00')");
}

#[test]
fn test_local_time_zone_literal_rejected() {
    let literal = DateTimeLiteral::TimestampWithLocalTimeZone {
        value: jan_15().and_hms_opt(10, 30, 0).unwrap(),
        precision: 0,
    };
    let err = to_sql(&dialect(), &SqlNode::date_time(literal)).unwrap_err();
    assert!(matches!(err, UnparseError::UnsupportedDateTimeLiteral { .. }));
    assert_eq!(
        err.to_string(),
        "ClickHouse does not support DateTime literal: \
         TIMESTAMP WITH LOCAL TIME ZONE '2024-01-15 10:30:00'"
    );
}

// =========================================================================
// SINGLE_VALUE and LIMIT
// =========================================================================

#[test]
fn test_single_value_rendering() {
    let dialect = dialect();
    let call = SqlKind::SingleValue.create_call(vec![SqlNode::identifier("x")]);
    let rewritten = dialect.rewrite_single_value_expr(&call).unwrap();
    assert_eq!(
        to_sql(&dialect, &rewritten).unwrap(),
        "CASE COUNT(`x`) WHEN 0 THEN NULL WHEN 1 THEN `x` \
         ELSE (SELECT NULL UNION ALL SELECT NULL) END"
    );
}

#[test]
fn test_fetch_uses_limit() {
    let select = SqlSelect::new(vec![SqlNode::identifier("a")])
        .with_from(SqlNode::identifier("t"))
        .with_offset(SqlNode::exact_numeric("20"))
        .with_fetch(SqlNode::exact_numeric("10"));
    assert_eq!(
        to_sql(&dialect(), &SqlNode::from(select)).unwrap(),
        "SELECT `a` FROM `t` LIMIT 10 OFFSET 20"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let dialect = dialect();
    let select = SqlSelect::new(vec![
        floor(TimeUnit::Month),
        SqlKind::Count.create_call(vec![SqlNode::identifier("*")]),
    ])
    .with_from(SqlNode::identifier("events"))
    .with_where(SqlKind::GreaterThanOrEqual.create_call(vec![
        SqlNode::identifier("ts"),
        SqlNode::date_time(DateTimeLiteral::date(jan_15())),
    ]));
    let node = SqlNode::from(select);

    let first = to_sql(&dialect, &node).unwrap();
    let second = to_sql(&dialect, &node).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first,
        "SELECT toStartOfMonth(`ts`), COUNT(*) FROM `events` \
         WHERE `ts` >= toDate('2024-01-15')"
    );
}
