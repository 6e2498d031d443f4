use crate::{
    model::entity::EntityModel,
    value::{RecordValue, Value},
};

// ============================================================================
// ENTITY SCHEMA
// ============================================================================
//
// These traits describe *types* of entities.
//

///
/// EntityKind
///
/// Binds a Rust type to its runtime entity model.
///

pub trait EntityKind: 'static {
    const MODEL: &'static EntityModel;
}

// ============================================================================
// ENTITY VALUES
// ============================================================================
//
// These traits describe *instances* of entities.
//

///
/// EntityValue
///
/// Slot-indexed field access for one entity instance.
///
/// Relation slots return `Value::Record` (to-one, or `Value::Null` when
/// unset) and `Value::List` of records (to-many).
///

pub trait EntityValue {
    fn get_value_by_index(&self, index: usize) -> Option<Value>;

    /// Materialize every slot into a record value for embedding in a parent.
    fn to_record_value(&self) -> RecordValue
    where
        Self: EntityKind + Sized,
    {
        let model = Self::MODEL;
        let values = (0..model.fields.len())
            .map(|slot| self.get_value_by_index(slot).unwrap_or(Value::Null))
            .collect();

        RecordValue::new(model.entity_name, values)
    }

    /// Primary key value, when the model declares a resolvable one.
    fn primary_key_value(&self) -> Option<Value>
    where
        Self: EntityKind + Sized,
    {
        Self::MODEL
            .primary_key_slot()
            .and_then(|slot| self.get_value_by_index(slot))
    }
}
