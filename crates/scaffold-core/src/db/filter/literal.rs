//! Module: filter::literal
//! Responsibility: turn raw query-string values into untyped literals.
//! Does not own: coercion to field kinds (see predicate validation).

use crate::{db::predicate::CompareOp, value::Value};
use regex::Regex;
use std::sync::LazyLock;

static INT_LIST: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^(?:\d+,)*\d+$").ok());
static TOKEN_LIST: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:[\d\w]+,)*[\d\w]+$").ok());

/// Map one raw value to a literal for `op`.
///
/// `True`, `False`, and `None` become booleans and null. For `in`, a comma
/// list of digits becomes an integer list and a comma list of word tokens a
/// text list; anything else stays a single text value.
#[must_use]
pub fn normalize_literal(op: CompareOp, raw: &str) -> Value {
    match raw {
        "True" => return Value::Bool(true),
        "False" => return Value::Bool(false),
        "None" => return Value::Null,
        _ => {}
    }

    if op == CompareOp::In {
        if matches_list(&INT_LIST, raw)
            && let Some(ints) = split_ints(raw)
        {
            return Value::List(ints);
        }
        if matches_list(&TOKEN_LIST, raw) {
            return Value::List(raw.split(',').map(Value::from).collect());
        }
    }

    Value::Text(raw.to_string())
}

fn matches_list(pattern: &LazyLock<Option<Regex>>, raw: &str) -> bool {
    pattern.as_ref().is_some_and(|regex| regex.is_match(raw))
}

// None when any element overflows i64; the caller falls back to text tokens.
fn split_ints(raw: &str) -> Option<Vec<Value>> {
    raw.split(',')
        .map(|part| part.parse::<i64>().ok().map(Value::Int))
        .collect()
}

///
/// TESTS
///
