use crate::{
    model::{entity::EntityModel, field::FieldKind},
    traits::{EntityKind, EntityValue},
    value::Value,
};
use serde_json::{Map, Value as JsonValue};

/// Render `fields` of one record as a JSON object.
///
/// To-one relations render as the related primary key, to-many relations
/// as a list of primary keys. Unknown field names are skipped.
#[must_use]
pub fn render_dto<E>(record: &E, fields: &[&str]) -> JsonValue
where
    E: EntityKind + EntityValue,
{
    let model = E::MODEL;
    let mut out = Map::new();

    for name in fields {
        let Some((slot, field)) = model
            .fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name == *name)
        else {
            continue;
        };
        let value = record.get_value_by_index(slot).unwrap_or(Value::Null);

        out.insert(field.name.to_string(), render_value(&field.kind, &value));
    }

    JsonValue::Object(out)
}

fn render_value(kind: &FieldKind, value: &Value) -> JsonValue {
    match (kind, value) {
        (FieldKind::Relation(related), Value::Record(_)) => related_pk(related, value),
        (FieldKind::Many(related), Value::List(items)) => JsonValue::Array(
            items.iter().map(|item| related_pk(related, item)).collect(),
        ),
        _ => value.to_json(),
    }
}

fn related_pk(model: &EntityModel, value: &Value) -> JsonValue {
    match (value, model.primary_key_slot()) {
        (Value::Record(record), Some(slot)) => {
            record.get(slot).map_or(JsonValue::Null, Value::to_json)
        }
        _ => JsonValue::Null,
    }
}
