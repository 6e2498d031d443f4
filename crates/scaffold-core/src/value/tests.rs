use crate::{
    model::field::FieldKind,
    value::{RecordValue, TextMode, Value, coerce_bool, coerce_to_kind},
};
use std::cmp::Ordering;

#[test]
fn numeric_order_crosses_int_and_uint() {
    assert_eq!(
        Value::strict_order_cmp(&Value::Int(-1), &Value::Uint(0)),
        Some(Ordering::Less)
    );
    assert_eq!(
        Value::strict_order_cmp(&Value::Uint(7), &Value::Int(7)),
        Some(Ordering::Equal)
    );
}

#[test]
fn cross_family_values_are_unordered_but_canonically_ranked() {
    assert_eq!(
        Value::strict_order_cmp(&Value::Text("1".into()), &Value::Int(1)),
        None
    );
    assert_eq!(
        Value::canonical_cmp(&Value::Null, &Value::Text("a".into())),
        Ordering::Less
    );
    assert_eq!(
        Value::canonical_cmp(&Value::Int(3), &Value::Bool(true)),
        Ordering::Greater
    );
}

#[test]
fn text_ops_fold_case_only_when_asked() {
    let actual = Value::Text("Admiral".into());
    let prefix = Value::Text("ad".into());

    assert_eq!(actual.text_starts_with(&prefix, TextMode::Cs), Some(false));
    assert_eq!(actual.text_starts_with(&prefix, TextMode::Ci), Some(true));
    assert_eq!(
        actual.text_ends_with(&Value::Text("RAL".into()), TextMode::Ci),
        Some(true)
    );
    assert_eq!(
        actual.text_contains(&Value::Text("mir".into()), TextMode::Cs),
        Some(true)
    );
}

#[test]
fn text_ops_reject_non_text_operands() {
    assert_eq!(
        Value::Int(10).text_contains(&Value::Text("1".into()), TextMode::Cs),
        None
    );
}

#[test]
fn coerce_to_kind_parses_text_literals() {
    assert_eq!(
        coerce_to_kind(&FieldKind::Int, Value::Text("10".into())),
        Some(Value::Int(10))
    );
    assert_eq!(
        coerce_to_kind(&FieldKind::Uint, Value::Text("-1".into())),
        None
    );
    assert_eq!(
        coerce_to_kind(&FieldKind::Text, Value::Int(42)),
        Some(Value::Text("42".into()))
    );
    assert_eq!(
        coerce_to_kind(&FieldKind::Bool, Value::Text("t".into())),
        Some(Value::Bool(true))
    );
    assert_eq!(
        coerce_to_kind(&FieldKind::Int, Value::Null),
        Some(Value::Null)
    );
}

#[test]
fn coerce_bool_rejects_unknown_spellings() {
    assert_eq!(coerce_bool(&Value::Text("maybe".into())), None);
    assert_eq!(coerce_bool(&Value::Uint(2)), None);
    assert_eq!(coerce_bool(&Value::Text(" FALSE ".into())), Some(false));
}

#[test]
fn to_json_renders_nested_values() {
    let record = RecordValue::new("Author", vec![Value::Uint(1), Value::Text("ada".into())]);
    let value = Value::List(vec![Value::Null, Value::Record(record)]);

    assert_eq!(value.to_json(), serde_json::json!([null, [1, "ada"]]));
}
