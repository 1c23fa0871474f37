// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Cast target translation
//!
//! Turns a [`RelDataType`] into the [`DataTypeSpec`] a dialect writes after
//! `CAST(x AS ...)`. Dialects list their native spellings in
//! [`SqlDialect::cast_type_overrides`]; everything else keeps the standard
//! spelling.

use crate::dialect::SqlDialect;
use unified_sql_ir::{DataTypeSpec, RelDataType, SqlKind, SqlNode, SqlTypeName};

/// Native spelling of `type_name` in an override table, if any
pub fn lookup_override(
    table: &'static [(SqlTypeName, &'static str)],
    type_name: SqlTypeName,
) -> Option<&'static str> {
    table
        .iter()
        .find(|(standard, _)| *standard == type_name)
        .map(|(_, native)| *native)
}

/// Spec for a type spelled with a native name
///
/// Precision is carried along; scale is dropped.
pub fn native_cast_spec(native: &str, ty: &RelDataType) -> DataTypeSpec {
    DataTypeSpec::named(native, ty.precision, None)
}

/// Standard spelling of `ty`
///
/// The character set is kept only for dialects that accept `CHARACTER SET`.
pub fn default_cast_spec<D: SqlDialect + ?Sized>(dialect: &D, ty: &RelDataType) -> DataTypeSpec {
    let spec = DataTypeSpec::builtin(ty.type_name, ty.precision, ty.scale);
    match &ty.charset {
        Some(charset) if dialect.supports_char_set() && ty.type_name.is_character() => {
            spec.with_charset(charset.as_str())
        }
        _ => spec,
    }
}

/// Build `CAST(expr AS <dialect spelling of ty>)`
pub fn cast<D: SqlDialect + ?Sized>(dialect: &D, expr: SqlNode, ty: &RelDataType) -> SqlNode {
    let spec = dialect.get_cast_spec(ty);
    SqlKind::Cast.create_call(vec![expr, SqlNode::from(spec)])
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(SqlTypeName, &str)] = &[(SqlTypeName::Varchar, "String")];

    #[test]
    fn test_lookup_override() {
        assert_eq!(lookup_override(TABLE, SqlTypeName::Varchar), Some("String"));
        assert_eq!(lookup_override(TABLE, SqlTypeName::Integer), None);
    }

    #[test]
    fn test_native_spec_drops_scale() {
        let ty = RelDataType::new(SqlTypeName::Decimal)
            .with_precision(10)
            .with_scale(2);
        let spec = native_cast_spec("Decimal64", &ty);
        assert_eq!(spec.type_name(), "Decimal64");
        assert_eq!(spec.precision, Some(10));
        assert_eq!(spec.scale, None);
    }
}
