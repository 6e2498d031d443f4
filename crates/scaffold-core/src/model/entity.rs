use crate::model::field::EntityFieldModel;
use std::fmt;

///
/// EntityModel
/// Minimal runtime model for one entity.
///

pub struct EntityModel {
    /// Fully-qualified Rust type path (for dispatch and diagnostics).
    pub path: &'static str,
    /// Stable external name used in routes and error messages.
    pub entity_name: &'static str,
    /// Name of the primary key field (must be an entry in `fields`).
    pub primary_key: &'static str,
    /// Ordered field list; a field's position is its slot.
    pub fields: &'static [EntityFieldModel],
}

impl EntityModel {
    #[must_use]
    pub fn field(&self, slot: usize) -> Option<&'static EntityFieldModel> {
        self.fields.get(slot)
    }

    #[must_use]
    pub fn field_named(&self, name: &str) -> Option<&'static EntityFieldModel> {
        resolve_field_slot(self, name).and_then(|slot| self.field(slot))
    }

    #[must_use]
    pub fn primary_key_slot(&self) -> Option<usize> {
        resolve_field_slot(self, self.primary_key)
    }
}

// Fields can reference this model again through relations.
impl fmt::Debug for EntityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityModel")
            .field("path", &self.path)
            .field("entity_name", &self.entity_name)
            .field("primary_key", &self.primary_key)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Resolve a field name to its slot; `pk` aliases the primary key.
#[must_use]
pub fn resolve_field_slot(model: &EntityModel, field: &str) -> Option<usize> {
    let field = if field == "pk" { model.primary_key } else { field };

    model.fields.iter().position(|f| f.name == field)
}
