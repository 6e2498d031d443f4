use crate::db::predicate::{Predicate, ValidateError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// MalformedQueryPolicy
///
/// What a rejected or malformed clause turns into.
///
/// Permissive → the clause matches everything.
/// Strict     → the clause matches nothing.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum MalformedQueryPolicy {
    #[default]
    Permissive,
    Strict,
}

impl MalformedQueryPolicy {
    #[must_use]
    pub const fn from_allow_malformed(allow: bool) -> Self {
        if allow { Self::Permissive } else { Self::Strict }
    }

    /// The neutral predicate a rejected clause is replaced with.
    #[must_use]
    pub const fn degrade(self) -> Predicate {
        match self {
            Self::Permissive => Predicate::True,
            Self::Strict => Predicate::False,
        }
    }
}

///
/// ClauseError
///
/// Why one clause was rejected. Never fatal; the clause degrades.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ClauseError {
    #[error("unsupported parameter name '{name}'")]
    MalformedName { name: String },

    #[error("unsupported expression '{expr}'")]
    MalformedExpression { expr: String },

    #[error("parameter '{name}' is not in the allow-list")]
    Unauthorized { name: String },

    #[error("{count} clauses exceed the limit of {max}")]
    TooManyClauses { count: usize, max: usize },

    #[error(transparent)]
    Invalid(#[from] ValidateError),
}

///
/// DegradedClause
///
/// One clause that was replaced by the degrade predicate.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DegradedClause {
    pub param: String,
    pub value: String,
    pub reason: ClauseError,
}
