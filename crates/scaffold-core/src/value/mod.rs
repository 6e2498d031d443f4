mod coerce;

#[cfg(test)]
mod tests;

use serde_json::Value as JsonValue;
use std::cmp::Ordering;

// re-exports
pub use coerce::{coerce_bool, coerce_to_kind};

///
/// TextMode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextMode {
    Cs, // case-sensitive
    Ci, // case-insensitive
}

///
/// Value
/// can be used in WHERE statements
///
/// Null        → the field holds no value (SQL NULL, or an unset relation).
/// Record      → one related record, slot-ordered by its entity model.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    /// Ordered list of values.
    /// Used for membership literals and to-many relations.
    List(Vec<Self>),
    Null,
    Record(RecordValue),
    Text(String),
    Uint(u64),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Uint(_))
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Render scalar values the way a text comparison sees them.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Int(n) => Some(n.to_string()),
            Self::Uint(n) => Some(n.to_string()),
            Self::Bool(true) => Some("True".to_string()),
            Self::Bool(false) => Some("False".to_string()),
            _ => None,
        }
    }

    /// Numeric ordering across `Int` and `Uint` without loss.
    #[must_use]
    pub fn cmp_numeric(&self, other: &Self) -> Option<Ordering> {
        let left = self.as_i128()?;
        let right = other.as_i128()?;

        Some(left.cmp(&right))
    }

    fn as_i128(&self) -> Option<i128> {
        match self {
            Self::Int(n) => Some(i128::from(*n)),
            Self::Uint(n) => Some(i128::from(*n)),
            _ => None,
        }
    }

    /// Ordering between two values of the same family.
    ///
    /// Numeric values compare across widths; `Null` only equals `Null`;
    /// every other cross-family pair is unordered.
    #[must_use]
    pub fn strict_order_cmp(left: &Self, right: &Self) -> Option<Ordering> {
        match (left, right) {
            (Self::Null, Self::Null) => Some(Ordering::Equal),
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (a, b) if a.is_numeric() && b.is_numeric() => a.cmp_numeric(b),
            _ => None,
        }
    }

    /// Rank used to order values of different families deterministically.
    #[must_use]
    pub const fn canonical_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Uint(_) => 2,
            Self::Text(_) => 3,
            Self::List(_) => 4,
            Self::Record(_) => 5,
        }
    }

    /// Total ordering used for sorting; `Null` sorts first.
    #[must_use]
    pub fn canonical_cmp(left: &Self, right: &Self) -> Ordering {
        if let Some(ordering) = Self::strict_order_cmp(left, right) {
            return ordering;
        }

        left.canonical_rank().cmp(&right.canonical_rank())
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    #[must_use]
    pub fn text_eq(&self, other: &Self, mode: TextMode) -> Option<bool> {
        let (a, b) = text_pair(self, other, mode)?;

        Some(a == b)
    }

    #[must_use]
    pub fn text_contains(&self, needle: &Self, mode: TextMode) -> Option<bool> {
        let (a, b) = text_pair(self, needle, mode)?;

        Some(a.contains(b.as_str()))
    }

    #[must_use]
    pub fn text_starts_with(&self, prefix: &Self, mode: TextMode) -> Option<bool> {
        let (a, b) = text_pair(self, prefix, mode)?;

        Some(a.starts_with(b.as_str()))
    }

    #[must_use]
    pub fn text_ends_with(&self, suffix: &Self, mode: TextMode) -> Option<bool> {
        let (a, b) = text_pair(self, suffix, mode)?;

        Some(a.ends_with(b.as_str()))
    }

    // ------------------------------------------------------------------
    // Json
    // ------------------------------------------------------------------

    /// Render this value as JSON.
    ///
    /// Records render as their slot-ordered values; DTO rendering resolves
    /// relations to primary keys before reaching this point.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Int(n) => JsonValue::from(*n),
            Self::Uint(n) => JsonValue::from(*n),
            Self::Text(text) => JsonValue::String(text.clone()),
            Self::Null => JsonValue::Null,
            Self::List(items) => JsonValue::Array(items.iter().map(Self::to_json).collect()),
            Self::Record(record) => {
                JsonValue::Array(record.values().iter().map(Self::to_json).collect())
            }
        }
    }
}

// Borrow both sides as text, folding case when requested.
fn text_pair(left: &Value, right: &Value, mode: TextMode) -> Option<(String, String)> {
    let (Value::Text(a), Value::Text(b)) = (left, right) else {
        return None;
    };

    match mode {
        TextMode::Cs => Some((a.clone(), b.clone())),
        TextMode::Ci => Some((casefold(a), casefold(b))),
    }
}

pub(crate) fn casefold(input: &str) -> String {
    if input.is_ascii() {
        return input.to_ascii_lowercase();
    }

    input.to_lowercase()
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<RecordValue> for Value {
    fn from(value: RecordValue) -> Self {
        Self::Record(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

///
/// RecordValue
///
/// One related record carried inside a relation field.
/// Values are slot-ordered by the related entity model.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RecordValue {
    entity: &'static str,
    values: Vec<Value>,
}

impl RecordValue {
    #[must_use]
    pub const fn new(entity: &'static str, values: Vec<Value>) -> Self {
        Self { entity, values }
    }

    #[must_use]
    pub const fn entity_name(&self) -> &'static str {
        self.entity
    }

    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Value> {
        self.values.get(slot)
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}
