// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Generic Renderer
//!
//! Standard-SQL rendering of every node variant. Dialects reach this module
//! through the default methods of [`SqlDialect`] and through their own
//! overrides once they have handled the cases they care about.
//!
//! ## Precedence
//!
//! Every render call carries the binding strength demanded by the
//! surrounding context as `(left_prec, right_prec)`. An operator call with
//! precedence `(l, r)` is parenthesized when
//!
//! ```text
//! left_prec > l || (r <= right_prec && right_prec != 0)
//! ```
//!
//! so `a - (b - c)` keeps its parentheses while `(a - b) - c` drops them.
//! Function-style calls never need parentheses.

use crate::dialect::SqlDialect;
use crate::error::{UnparseError, UnparseResult};
use crate::writer::SqlWriter;
use unified_sql_ir::{
    DataTypeSpec, SqlCall, SqlCase, SqlIdentifier, SqlKind, SqlLiteral, SqlNode, SqlSelect,
    SqlSyntax, TypeNameSpec,
};

/// Render any node
pub fn unparse_node<D: SqlDialect + ?Sized>(
    dialect: &D,
    writer: &mut dyn SqlWriter,
    node: &SqlNode,
    left_prec: u32,
    right_prec: u32,
) -> UnparseResult<()> {
    match node {
        SqlNode::Identifier(id) => {
            unparse_identifier(dialect, writer, id);
            Ok(())
        }
        SqlNode::Literal(literal) => {
            unparse_literal(dialect, writer, literal, left_prec, right_prec)
        }
        SqlNode::Call(call) => dialect.unparse_call(writer, call, left_prec, right_prec),
        SqlNode::Case(case) => unparse_case(dialect, writer, case),
        SqlNode::Select(select) if left_prec != 0 || right_prec != 0 => {
            let frame = writer.start_list("(", ")");
            unparse_select(dialect, writer, select)?;
            writer.end_list(frame);
            Ok(())
        }
        SqlNode::Select(select) => unparse_select(dialect, writer, select),
        SqlNode::DataType(spec) => {
            unparse_data_type(writer, spec);
            Ok(())
        }
    }
}

/// Whether a call with precedence `(op_left, op_right)` needs parentheses
pub fn needs_parens(op_left: u32, op_right: u32, left_prec: u32, right_prec: u32) -> bool {
    left_prec > op_left || (op_right <= right_prec && right_prec != 0)
}

/// Render a call by the syntax of its kind
pub fn unparse_call<D: SqlDialect + ?Sized>(
    dialect: &D,
    writer: &mut dyn SqlWriter,
    call: &SqlCall,
    left_prec: u32,
    right_prec: u32,
) -> UnparseResult<()> {
    match call.kind().syntax() {
        SqlSyntax::Function => unparse_function(dialect, writer, call.name(), call.operands()),
        SqlSyntax::Special => unparse_special(dialect, writer, call),
        SqlSyntax::Binary | SqlSyntax::Prefix | SqlSyntax::Postfix => {
            let (op_left, op_right) = call.kind().precedence();
            if needs_parens(op_left, op_right, left_prec, right_prec) {
                let frame = writer.start_list("(", ")");
                unparse_operator(dialect, writer, call, 0, 0)?;
                writer.end_list(frame);
                Ok(())
            } else {
                unparse_operator(dialect, writer, call, left_prec, right_prec)
            }
        }
    }
}

/// Render `name(arg, ...)`
pub fn unparse_function<D: SqlDialect + ?Sized>(
    dialect: &D,
    writer: &mut dyn SqlWriter,
    name: &str,
    operands: &[SqlNode],
) -> UnparseResult<()> {
    writer.print(name);
    let frame = writer.start_list("(", ")");
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            writer.sep(",");
        }
        unparse_node(dialect, writer, operand, 0, 0)?;
    }
    writer.end_list(frame);
    Ok(())
}

fn unparse_operator<D: SqlDialect + ?Sized>(
    dialect: &D,
    writer: &mut dyn SqlWriter,
    call: &SqlCall,
    left_prec: u32,
    right_prec: u32,
) -> UnparseResult<()> {
    let kind = call.kind();
    let (op_left, op_right) = kind.precedence();
    match kind.syntax() {
        SqlSyntax::Binary => {
            let [left, right] = operands::<2>(call)?;
            let set_op = matches!(kind, SqlKind::Union | SqlKind::UnionAll);
            // SELECT branches of a set operation are never parenthesized
            let (l_left, l_right) = branch_prec(set_op, left, (left_prec, op_left));
            let (r_left, r_right) = branch_prec(set_op, right, (op_right, right_prec));
            unparse_node(dialect, writer, left, l_left, l_right)?;
            writer.keyword(kind.sql_name());
            unparse_node(dialect, writer, right, r_left, r_right)
        }
        SqlSyntax::Prefix => {
            let [operand] = operands::<1>(call)?;
            writer.keyword(kind.sql_name());
            unparse_node(dialect, writer, operand, op_right, right_prec)
        }
        _ => {
            let [operand] = operands::<1>(call)?;
            unparse_node(dialect, writer, operand, left_prec, op_left)?;
            writer.keyword(kind.sql_name());
            Ok(())
        }
    }
}

fn branch_prec(set_op: bool, branch: &SqlNode, prec: (u32, u32)) -> (u32, u32) {
    if set_op && matches!(branch, SqlNode::Select(_)) {
        (0, 0)
    } else {
        prec
    }
}

fn unparse_special<D: SqlDialect + ?Sized>(
    dialect: &D,
    writer: &mut dyn SqlWriter,
    call: &SqlCall,
) -> UnparseResult<()> {
    match call.kind() {
        SqlKind::Floor if call.operand_count() == 2 => {
            let [value, unit] = operands::<2>(call)?;
            writer.print(call.name());
            let frame = writer.start_list("(", ")");
            unparse_node(dialect, writer, value, 0, 0)?;
            writer.keyword("TO");
            unparse_node(dialect, writer, unit, 0, 0)?;
            writer.end_list(frame);
            Ok(())
        }
        SqlKind::Cast => {
            let [value, target] = operands::<2>(call)?;
            writer.print(call.name());
            let frame = writer.start_list("(", ")");
            unparse_node(dialect, writer, value, 0, 0)?;
            writer.keyword("AS");
            unparse_node(dialect, writer, target, 0, 0)?;
            writer.end_list(frame);
            Ok(())
        }
        SqlKind::ScalarQuery => {
            let [query] = operands::<1>(call)?;
            let frame = writer.start_list("(", ")");
            unparse_node(dialect, writer, query, 0, 0)?;
            writer.end_list(frame);
            Ok(())
        }
        _ => unparse_function(dialect, writer, call.name(), call.operands()),
    }
}

/// Borrow exactly `N` operands of a call
pub fn operands<const N: usize>(call: &SqlCall) -> UnparseResult<[&SqlNode; N]> {
    let all = call.operands();
    if all.len() != N {
        return Err(UnparseError::OperandCount {
            operator: call.name().to_string(),
            expected: N,
            actual: all.len(),
        });
    }
    Ok(std::array::from_fn(|i| &all[i]))
}

fn unparse_identifier<D: SqlDialect + ?Sized>(
    dialect: &D,
    writer: &mut dyn SqlWriter,
    id: &SqlIdentifier,
) {
    let quoted: Vec<String> = id
        .names
        .iter()
        .map(|name| {
            if name == "*" {
                name.clone()
            } else {
                dialect.quote_identifier(name)
            }
        })
        .collect();
    writer.identifier(&quoted.join("."));
}

fn unparse_literal<D: SqlDialect + ?Sized>(
    dialect: &D,
    writer: &mut dyn SqlWriter,
    literal: &SqlLiteral,
    left_prec: u32,
    right_prec: u32,
) -> UnparseResult<()> {
    match literal {
        SqlLiteral::Null => writer.keyword("NULL"),
        SqlLiteral::Boolean(true) => writer.keyword("TRUE"),
        SqlLiteral::Boolean(false) => writer.keyword("FALSE"),
        SqlLiteral::ExactNumeric(text) | SqlLiteral::ApproxNumeric(text) => writer.literal(text),
        SqlLiteral::CharString(text) => writer.literal(&dialect.quote_string_literal(text)),
        SqlLiteral::TimeUnit(unit) => writer.keyword(unit.as_str()),
        SqlLiteral::DateTime(value) => {
            return dialect.unparse_date_time_literal(writer, value, left_prec, right_prec);
        }
    }
    Ok(())
}

fn unparse_case<D: SqlDialect + ?Sized>(
    dialect: &D,
    writer: &mut dyn SqlWriter,
    case: &SqlCase,
) -> UnparseResult<()> {
    writer.keyword("CASE");
    if let Some(value) = &case.value {
        unparse_node(dialect, writer, value, 0, 0)?;
    }
    for (when, then) in case.when_list.iter().zip(&case.then_list) {
        writer.keyword("WHEN");
        unparse_node(dialect, writer, when, 0, 0)?;
        writer.keyword("THEN");
        unparse_node(dialect, writer, then, 0, 0)?;
    }
    if let Some(else_expr) = &case.else_expr {
        writer.keyword("ELSE");
        unparse_node(dialect, writer, else_expr, 0, 0)?;
    }
    writer.keyword("END");
    Ok(())
}

fn unparse_list<D: SqlDialect + ?Sized>(
    dialect: &D,
    writer: &mut dyn SqlWriter,
    items: &[SqlNode],
) -> UnparseResult<()> {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            writer.sep(",");
        }
        unparse_node(dialect, writer, item, 0, 0)?;
    }
    Ok(())
}

/// Render a SELECT statement without surrounding parentheses
pub fn unparse_select<D: SqlDialect + ?Sized>(
    dialect: &D,
    writer: &mut dyn SqlWriter,
    select: &SqlSelect,
) -> UnparseResult<()> {
    writer.keyword("SELECT");
    unparse_list(dialect, writer, &select.select_list)?;

    if let Some(from) = &select.from {
        writer.keyword("FROM");
        // a derived table is parenthesized by the non-zero precedence
        unparse_node(dialect, writer, from, 0, 1)?;
    }
    if let Some(condition) = &select.where_clause {
        writer.keyword("WHERE");
        unparse_node(dialect, writer, condition, 0, 0)?;
    }
    if !select.order_by.is_empty() {
        writer.keyword("ORDER BY");
        unparse_list(dialect, writer, &select.order_by)?;
    }
    dialect.unparse_offset_fetch(writer, select.offset.as_ref(), select.fetch.as_ref())
}

/// Render a type specification
///
/// Standard names carry precision and scale where the type allows them;
/// native names render bare.
pub fn unparse_data_type(writer: &mut dyn SqlWriter, spec: &DataTypeSpec) {
    writer.print(spec.type_name());
    if let TypeNameSpec::Builtin(type_name) = &spec.name {
        if let Some(precision) = spec.precision.filter(|_| type_name.allows_precision()) {
            let frame = writer.start_list("(", ")");
            writer.literal(&precision.to_string());
            if let Some(scale) = spec.scale.filter(|_| type_name.allows_scale()) {
                writer.sep(",");
                writer.literal(&scale.to_string());
            }
            writer.end_list(frame);
        }
    }
    if let Some(charset) = &spec.charset {
        writer.keyword("CHARACTER SET");
        writer.print(charset);
    }
}

/// `OFFSET n ROWS FETCH NEXT m ROWS ONLY`
pub fn unparse_fetch_using_ansi<D: SqlDialect + ?Sized>(
    dialect: &D,
    writer: &mut dyn SqlWriter,
    offset: Option<&SqlNode>,
    fetch: Option<&SqlNode>,
) -> UnparseResult<()> {
    if let Some(offset) = offset {
        writer.keyword("OFFSET");
        unparse_node(dialect, writer, offset, 0, 0)?;
        writer.keyword("ROWS");
    }
    if let Some(fetch) = fetch {
        writer.keyword("FETCH NEXT");
        unparse_node(dialect, writer, fetch, 0, 0)?;
        writer.keyword("ROWS ONLY");
    }
    Ok(())
}

/// `LIMIT m OFFSET n`
pub fn unparse_fetch_using_limit<D: SqlDialect + ?Sized>(
    dialect: &D,
    writer: &mut dyn SqlWriter,
    offset: Option<&SqlNode>,
    fetch: Option<&SqlNode>,
) -> UnparseResult<()> {
    if let Some(fetch) = fetch {
        writer.keyword("LIMIT");
        unparse_node(dialect, writer, fetch, 0, 0)?;
    }
    if let Some(offset) = offset {
        writer.keyword("OFFSET");
        unparse_node(dialect, writer, offset, 0, 0)?;
    }
    Ok(())
}
