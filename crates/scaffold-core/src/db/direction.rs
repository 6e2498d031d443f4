use crate::{
    db::predicate::ValidateError,
    model::{entity::EntityModel, path::resolve_path},
};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

///
/// OrderDirection
///
/// Ordering direction applied after filtering.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

///
/// OrderTerm
///
/// One resolved ordering field. Parsed from `path` or `-path`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderTerm {
    path: String,
    slots: Vec<usize>,
    direction: OrderDirection,
}

impl OrderTerm {
    /// Resolve one raw ordering term against `model`.
    pub fn resolve(model: &'static EntityModel, raw: &str) -> Result<Self, ValidateError> {
        let raw = raw.trim();
        let (direction, path) = match raw.strip_prefix('-') {
            Some(path) => (OrderDirection::Desc, path),
            None => (OrderDirection::Asc, raw),
        };
        let resolved = resolve_path(model, path)?;

        Ok(Self {
            path: resolved.path().to_string(),
            slots: resolved.slots().to_vec(),
            direction,
        })
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    #[must_use]
    pub const fn direction(&self) -> OrderDirection {
        self.direction
    }
}

impl fmt::Display for OrderTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            OrderDirection::Asc => write!(f, "{}", self.path),
            OrderDirection::Desc => write!(f, "-{}", self.path),
        }
    }
}
