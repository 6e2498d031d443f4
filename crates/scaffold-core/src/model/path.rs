//! Module: model::path
//! Responsibility: resolve dunder/dotted field paths into slot chains.
//! Does not own: lookup suffix parsing or literal validation.
//! Boundary: shared by predicate compilation, ordering, search, and DTOs.

use crate::{
    LOOKUP_SEP,
    db::predicate::ValidateError,
    model::{
        entity::{EntityModel, resolve_field_slot},
        field::{EntityFieldModel, FieldKind},
    },
};

///
/// ResolvedPath
///
/// One field path resolved against an entity model.
///
/// `slots` holds one slot per hop. A path that ends on a relation is
/// extended with the related primary key slot, so the leaf is always a
/// scalar kind.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedPath {
    path: String,
    slots: Vec<usize>,
    leaf: FieldKind,
    crosses_many: bool,
}

impl ResolvedPath {
    /// Canonical `a__b__c` spelling with `pk` aliases expanded.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    #[must_use]
    pub const fn leaf(&self) -> &FieldKind {
        &self.leaf
    }

    /// Whether any hop fans out through a to-many relation.
    #[must_use]
    pub const fn crosses_many(&self) -> bool {
        self.crosses_many
    }
}

/// Resolve `path` (segments separated by `__` or `.`) against `model`.
pub fn resolve_path(
    model: &'static EntityModel,
    path: &str,
) -> Result<ResolvedPath, ValidateError> {
    let normalized = path.replace('.', LOOKUP_SEP);
    let segments: Vec<&str> = normalized.split(LOOKUP_SEP).collect();

    let mut current = model;
    let mut names = Vec::with_capacity(segments.len());
    let mut slots = Vec::with_capacity(segments.len() + 1);
    let mut crosses_many = false;
    let mut leaf = None;

    for (index, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            return Err(ValidateError::InvalidPath {
                path: path.to_string(),
            });
        }
        let (slot, field) =
            field_with_slot(current, segment).ok_or_else(|| ValidateError::UnknownField {
                entity: current.entity_name.to_string(),
                field: (*segment).to_string(),
            })?;
        let is_last = index + 1 == segments.len();

        slots.push(slot);
        names.push(field.name);

        match field.kind.related_model() {
            Some(related) => {
                crosses_many |= field.kind.is_many();
                current = related;

                if is_last {
                    let (pk_slot, pk) = primary_key_field(related)?;
                    slots.push(pk_slot);
                    leaf = Some(pk.kind);
                }
            }
            None if is_last => leaf = Some(field.kind),
            None => {
                return Err(ValidateError::NotARelation {
                    entity: current.entity_name.to_string(),
                    field: field.name.to_string(),
                });
            }
        }
    }

    let leaf = leaf.ok_or_else(|| ValidateError::InvalidPath {
        path: path.to_string(),
    })?;

    Ok(ResolvedPath {
        path: names.join(LOOKUP_SEP),
        slots,
        leaf,
        crosses_many,
    })
}

/// Resolve the primary key field of `model`.
pub(crate) fn primary_key_field(
    model: &'static EntityModel,
) -> Result<(usize, &'static EntityFieldModel), ValidateError> {
    field_with_slot(model, model.primary_key).ok_or_else(|| ValidateError::InvalidPrimaryKey {
        entity: model.entity_name.to_string(),
    })
}

fn field_with_slot(
    model: &'static EntityModel,
    name: &str,
) -> Option<(usize, &'static EntityFieldModel)> {
    let slot = resolve_field_slot(model, name)?;

    model.field(slot).map(|field| (slot, field))
}
