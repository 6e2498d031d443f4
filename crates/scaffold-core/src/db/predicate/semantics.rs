//! Module: predicate::semantics
//! Responsibility: value comparison semantics for predicate evaluation.
//! Does not own: predicate AST normalization or schema legality checks.
//! Boundary: runtime predicate evaluation delegates compare behavior here.

use crate::value::{TextMode, Value};
use std::{cmp::Ordering, mem::discriminant};

///
/// TextOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(in crate::db) enum TextOp {
    Eq,
    Contains,
    StartsWith,
    EndsWith,
}

/// Equality with numeric widening; `Null` only equals `Null`.
///
/// Returns `None` when the operands belong to incomparable families.
#[must_use]
pub(in crate::db) fn compare_eq(left: &Value, right: &Value) -> Option<bool> {
    match (left, right) {
        (Value::Null, _) | (_, Value::Null) => Some(left == right),
        (a, b) if a.is_numeric() && b.is_numeric() => a.cmp_numeric(b).map(Ordering::is_eq),
        (a, b) if same_variant(a, b) => Some(a == b),
        _ => None,
    }
}

/// Ordering comparison; `Null` never orders against anything.
#[must_use]
pub(in crate::db) fn compare_order(left: &Value, right: &Value) -> Option<Ordering> {
    if left.is_null() || right.is_null() {
        return None;
    }

    Value::strict_order_cmp(left, right)
}

/// Perform text-specific comparison operations.
#[must_use]
pub(in crate::db) fn compare_text(
    left: &Value,
    right: &Value,
    op: TextOp,
    mode: TextMode,
) -> Option<bool> {
    match op {
        TextOp::Eq => left.text_eq(right, mode),
        TextOp::Contains => left.text_contains(right, mode),
        TextOp::StartsWith => left.text_starts_with(right, mode),
        TextOp::EndsWith => left.text_ends_with(right, mode),
    }
}

fn same_variant(left: &Value, right: &Value) -> bool {
    discriminant(left) == discriminant(right)
}
