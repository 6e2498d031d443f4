use crate::model::entity::EntityModel;
use std::fmt;

///
/// EntityFieldModel
/// Runtime field metadata used by path resolution and validation.
///

#[derive(Debug)]
pub struct EntityFieldModel {
    /// Field name as used in query parameters and DTOs.
    pub name: &'static str,
    /// Runtime type shape.
    pub kind: FieldKind,
}

impl EntityFieldModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

///
/// FieldKind
///
/// Minimal type surface needed by the filter translator.
/// Aligned with `Value` variants; relations point at the related model.
///

#[derive(Clone, Copy)]
pub enum FieldKind {
    Bool,
    Int,
    Text,
    Uint,

    /// To-one relation; the field value is a `Value::Record` or `Value::Null`.
    Relation(&'static EntityModel),

    /// To-many relation; the field value is a `Value::List` of records.
    Many(&'static EntityModel),
}

impl FieldKind {
    #[must_use]
    pub const fn related_model(&self) -> Option<&'static EntityModel> {
        match self {
            Self::Relation(model) | Self::Many(model) => Some(*model),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Uint)
    }
}

// Relations print the related entity name only; models may be cyclic.
impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "Bool"),
            Self::Int => write!(f, "Int"),
            Self::Text => write!(f, "Text"),
            Self::Uint => write!(f, "Uint"),
            Self::Relation(model) => write!(f, "Relation({})", model.entity_name),
            Self::Many(model) => write!(f, "Many({})", model.entity_name),
        }
    }
}

impl PartialEq for FieldKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Relation(a), Self::Relation(b)) | (Self::Many(a), Self::Many(b)) => {
                std::ptr::eq(*a, *b)
            }
            (Self::Bool, Self::Bool)
            | (Self::Int, Self::Int)
            | (Self::Text, Self::Text)
            | (Self::Uint, Self::Uint) => true,
            _ => false,
        }
    }
}

impl Eq for FieldKind {}
