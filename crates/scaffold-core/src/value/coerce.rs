//! Module: value::coerce
//! Responsibility: convert query literals into the value family of a field.
//! Does not own: operator legality or literal shape rules for lookups.
//! Boundary: consumed by predicate validation and search construction.

use crate::{model::field::FieldKind, value::Value};

/// Coerce one scalar literal into the value family of `kind`.
///
/// Returns `None` when the literal cannot represent a value of that kind.
/// `Null` passes through unchanged; relation kinds never accept a literal
/// because paths are resolved down to the related primary key first.
#[must_use]
pub fn coerce_to_kind(kind: &FieldKind, value: Value) -> Option<Value> {
    if value.is_null() {
        return Some(Value::Null);
    }

    match kind {
        FieldKind::Bool => coerce_bool(&value).map(Value::Bool),
        FieldKind::Int => coerce_int(&value).map(Value::Int),
        FieldKind::Uint => coerce_uint(&value).map(Value::Uint),
        FieldKind::Text => value.to_text().map(Value::Text),
        FieldKind::Relation(_) | FieldKind::Many(_) => None,
    }
}

/// Interpret a literal as a boolean.
///
/// Accepts booleans, `0`/`1`, and the usual textual spellings in any case.
#[must_use]
pub fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Int(0) | Value::Uint(0) => Some(false),
        Value::Int(1) | Value::Uint(1) => Some(true),
        Value::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "1" | "yes" | "on" => Some(true),
            "false" | "f" | "0" | "no" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        Value::Uint(n) => i64::try_from(*n).ok(),
        Value::Text(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_uint(value: &Value) -> Option<u64> {
    match value {
        Value::Uint(n) => Some(*n),
        Value::Int(n) => u64::try_from(*n).ok(),
        Value::Text(text) => text.trim().parse().ok(),
        _ => None,
    }
}
