//! Module: predicate::validate
//! Responsibility: schema-aware legality checks and literal coercion.
//! Does not own: evaluation semantics or clause-level degrade policy.
//! Boundary: the deep filter validates every leaf through here before use.

use crate::{
    db::predicate::{CompareOp, ComparePredicate},
    error::{ErrorClass, ErrorOrigin, InternalError},
    model::{
        entity::EntityModel,
        field::FieldKind,
        path::{ResolvedPath, resolve_path},
    },
    value::{Value, coerce_bool, coerce_to_kind},
};
use regex::{Regex, RegexBuilder};
use thiserror::Error as ThisError;

///
/// ValidateError
///
/// Predicate/schema validation failures.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidateError {
    #[error("unknown field '{field}' on entity '{entity}'")]
    UnknownField { entity: String, field: String },

    #[error("field '{field}' on entity '{entity}' is not a relation")]
    NotARelation { entity: String, field: String },

    #[error("invalid field path '{path}'")]
    InvalidPath { path: String },

    #[error("entity '{entity}' has no resolvable primary key")]
    InvalidPrimaryKey { entity: String },

    #[error("operator {op} is not valid for field '{field}'")]
    InvalidOperator { field: String, op: String },

    #[error("invalid literal for field '{field}': {message}")]
    InvalidLiteral { field: String, message: String },
}

impl ValidateError {
    pub(crate) fn invalid_operator(field: &str, op: CompareOp) -> Self {
        Self::InvalidOperator {
            field: field.to_string(),
            op: op.lookup().to_string(),
        }
    }

    pub(crate) fn invalid_literal(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidLiteral {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate one comparison against `model`.
///
/// On success the field is rewritten to its canonical path and the literal
/// is coerced into the value family of the leaf field.
pub fn validate_compare(
    model: &'static EntityModel,
    cmp: ComparePredicate,
) -> Result<ComparePredicate, ValidateError> {
    resolve_compare(model, cmp).map(|(_, cmp)| cmp)
}

// Validate one comparison and keep the resolved path for compilation.
pub(in crate::db) fn resolve_compare(
    model: &'static EntityModel,
    cmp: ComparePredicate,
) -> Result<(ResolvedPath, ComparePredicate), ValidateError> {
    let path = resolve_path(model, &cmp.field)?;
    let value = coerce_literal(path.path(), path.leaf(), cmp.op, cmp.value)?;
    let cmp = ComparePredicate {
        field: path.path().to_string(),
        op: cmp.op,
        value,
    };

    Ok((path, cmp))
}

// Coerce a literal for one operator/leaf pairing.
fn coerce_literal(
    field: &str,
    leaf: &FieldKind,
    op: CompareOp,
    value: Value,
) -> Result<Value, ValidateError> {
    match op {
        CompareOp::IsNull => coerce_bool(&value)
            .map(Value::Bool)
            .ok_or_else(|| ValidateError::invalid_literal(field, "isnull expects a boolean")),

        CompareOp::In => {
            let items = match value {
                Value::List(items) => items,
                Value::Null => {
                    return Err(ValidateError::invalid_literal(field, "in expects a list"));
                }
                other => vec![other],
            };

            items
                .into_iter()
                .map(|item| coerce_scalar(field, leaf, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List)
        }

        op if op.is_text() => {
            if !leaf.is_text() {
                return Err(ValidateError::invalid_operator(field, op));
            }

            text_literal(field, &value).map(Value::Text)
        }

        op if op.is_regex() => {
            if !leaf.is_text() && !leaf.is_numeric() {
                return Err(ValidateError::invalid_operator(field, op));
            }
            let pattern = text_literal(field, &value)?;
            build_regex(&pattern, op == CompareOp::RegexCi)
                .map_err(|err| ValidateError::invalid_literal(field, err.to_string()))?;

            Ok(Value::Text(pattern))
        }

        CompareOp::Eq if value.is_null() => Ok(Value::Null),

        _ => coerce_scalar(field, leaf, value),
    }
}

fn coerce_scalar(field: &str, leaf: &FieldKind, value: Value) -> Result<Value, ValidateError> {
    if value.is_null() {
        return Err(ValidateError::invalid_literal(
            field,
            "None is only valid for equality",
        ));
    }
    let rendered = format!("{value:?}");

    coerce_to_kind(leaf, value).ok_or_else(|| {
        ValidateError::invalid_literal(field, format!("{rendered} is not a valid {leaf:?}"))
    })
}

fn text_literal(field: &str, value: &Value) -> Result<String, ValidateError> {
    value
        .to_text()
        .ok_or_else(|| ValidateError::invalid_literal(field, "expected a text literal"))
}

/// Compile a regex lookup pattern; `regex` lookups match anywhere in the text.
pub(in crate::db) fn build_regex(
    pattern: &str,
    case_insensitive: bool,
) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
}

impl From<ValidateError> for InternalError {
    fn from(err: ValidateError) -> Self {
        Self::new(ErrorClass::Unsupported, ErrorOrigin::Query, err.to_string())
    }
}
