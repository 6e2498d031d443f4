use crate::value::Value;
use std::ops::{BitAnd, BitOr, Not};

///
/// Predicate AST
///
/// Pure, schema-agnostic representation of query predicates.
/// This layer contains no type validation or execution semantics.
/// All interpretation occurs in later passes:
///
/// - normalization
/// - validation (schema-aware)
/// - compilation to slot programs
/// - evaluation
///

///
/// CompareOp
///
/// One comparison operator, spelled as a lookup suffix in query strings.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CompareOp {
    Eq,
    EqCi,
    Contains,
    ContainsCi,
    StartsWith,
    StartsWithCi,
    EndsWith,
    EndsWithCi,
    Regex,
    RegexCi,
    In,
    Gt,
    Gte,
    Lt,
    Lte,
    IsNull,
}

impl CompareOp {
    pub const ALL: [Self; 16] = [
        Self::Eq,
        Self::EqCi,
        Self::Contains,
        Self::ContainsCi,
        Self::StartsWith,
        Self::StartsWithCi,
        Self::EndsWith,
        Self::EndsWithCi,
        Self::Regex,
        Self::RegexCi,
        Self::In,
        Self::Gt,
        Self::Gte,
        Self::Lt,
        Self::Lte,
        Self::IsNull,
    ];

    /// Parse a lookup suffix (`exact`, `icontains`, `in`, ...).
    #[must_use]
    pub fn from_lookup(lookup: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.lookup() == lookup)
    }

    #[must_use]
    pub const fn lookup(self) -> &'static str {
        match self {
            Self::Eq => "exact",
            Self::EqCi => "iexact",
            Self::Contains => "contains",
            Self::ContainsCi => "icontains",
            Self::StartsWith => "startswith",
            Self::StartsWithCi => "istartswith",
            Self::EndsWith => "endswith",
            Self::EndsWithCi => "iendswith",
            Self::Regex => "regex",
            Self::RegexCi => "iregex",
            Self::In => "in",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::IsNull => "isnull",
        }
    }

    /// Operators that only apply to text-like leaves.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(
            self,
            Self::EqCi
                | Self::Contains
                | Self::ContainsCi
                | Self::StartsWith
                | Self::StartsWithCi
                | Self::EndsWith
                | Self::EndsWithCi
        )
    }

    #[must_use]
    pub const fn is_regex(self) -> bool {
        matches!(self, Self::Regex | Self::RegexCi)
    }
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ComparePredicate {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Predicate {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[must_use]
    pub fn compare(field: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(field, op, value))
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Eq, value)
    }

    #[must_use]
    pub fn in_(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self::compare(field, CompareOp::In, Value::List(values))
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl Not for Predicate {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}
