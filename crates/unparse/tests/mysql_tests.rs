// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! MySQL rendering tests

use chrono::NaiveDate;
use unified_sql_ir::{
    DateTimeLiteral, RelDataType, SqlKind, SqlLiteral, SqlNode, SqlSelect, SqlTypeName, TimeUnit,
};
use unified_sql_unparse::cast::cast;
use unified_sql_unparse::{
    MySqlDialect, NullDirection, SortDirection, SqlDialect, UnparseError, order_by_items, to_sql,
};

fn floor(unit: TimeUnit) -> SqlNode {
    SqlKind::Floor.create_call(vec![
        SqlNode::identifier("ts"),
        SqlNode::literal(SqlLiteral::TimeUnit(unit)),
    ])
}

#[test]
fn test_floor_date_format() {
    let dialect = MySqlDialect::default();
    let cases = [
        (TimeUnit::Year, "DATE_FORMAT(`ts`, '%Y-01-01')"),
        (TimeUnit::Month, "DATE_FORMAT(`ts`, '%Y-%m-01')"),
        (TimeUnit::Day, "DATE_FORMAT(`ts`, '%Y-%m-%d')"),
        (TimeUnit::Hour, "DATE_FORMAT(`ts`, '%Y-%m-%d %H:00:00')"),
        (TimeUnit::Minute, "DATE_FORMAT(`ts`, '%Y-%m-%d %H:%i:00')"),
        (TimeUnit::Second, "DATE_FORMAT(`ts`, '%Y-%m-%d %H:%i:%s')"),
        (
            TimeUnit::Week,
            "STR_TO_DATE(DATE_FORMAT(`ts`, '%x%v-1'), '%x%v-%w')",
        ),
    ];
    for (unit, expected) in cases {
        assert_eq!(to_sql(&dialect, &floor(unit)).unwrap(), expected, "{unit}");
    }
}

#[test]
fn test_floor_quarter_unsupported() {
    let err = to_sql(&MySqlDialect::default(), &floor(TimeUnit::Quarter)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "MySQL does not support FLOOR for time unit: QUARTER"
    );
}

#[test]
fn test_casts() {
    let dialect = MySqlDialect::default();

    let varchar = RelDataType::new(SqlTypeName::Varchar).with_precision(10);
    let node = cast(&dialect, SqlNode::identifier("name"), &varchar);
    assert_eq!(to_sql(&dialect, &node).unwrap(), "CAST(`name` AS CHAR(10))");

    for type_name in [SqlTypeName::Integer, SqlTypeName::BigInt] {
        let node = cast(&dialect, SqlNode::identifier("n"), &RelDataType::new(type_name));
        assert_eq!(to_sql(&dialect, &node).unwrap(), "CAST(`n` AS SIGNED)");
    }
}

#[test]
fn test_generic_date_literal() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let node = SqlNode::date_time(DateTimeLiteral::date(date));
    assert_eq!(
        to_sql(&MySqlDialect::default(), &node).unwrap(),
        "DATE '2024-01-15'"
    );
}

#[test]
fn test_order_by_with_limit() {
    let dialect = MySqlDialect::default();
    let items = order_by_items(
        &dialect,
        &SqlNode::identifier("score"),
        SortDirection::Descending,
        NullDirection::First,
    )
    .unwrap();
    let select = SqlSelect::new(vec![SqlNode::identifier("name")])
        .with_from(SqlNode::identifier("players"))
        .with_order_by(items)
        .with_fetch(SqlNode::exact_numeric("3"));
    assert_eq!(
        to_sql(&dialect, &SqlNode::from(select)).unwrap(),
        "SELECT `name` FROM `players` ORDER BY `score` IS NULL DESC, `score` DESC LIMIT 3"
    );
}

#[test]
fn test_single_value_supported_as_rewrite() {
    let dialect = MySqlDialect::default();
    assert!(dialect.supports_aggregate_function(SqlKind::SingleValue));
    let call = SqlKind::SingleValue.create_call(vec![SqlNode::identifier("x")]);
    assert!(matches!(
        dialect.rewrite_single_value_expr(&call),
        Ok(SqlNode::Case(_))
    ));

    let empty = SqlKind::SingleValue.create_call(vec![]);
    assert!(matches!(
        dialect.rewrite_single_value_expr(&empty),
        Err(UnparseError::OperandCount { actual: 0, .. })
    ));
}
